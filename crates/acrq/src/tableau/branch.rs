//! Branch bookkeeping.

use crate::formula::SignedFormula;
use indexmap::IndexSet;
use std::collections::HashSet;

/// A path from the root to a frontier node.
///
/// Each branch owns its formula set and processed marks exclusively; forking
/// clones them. Closure is permanent: once a complementary atomic pair is
/// found the branch never reopens.
#[derive(Debug, Clone)]
pub struct Branch {
    /// Node ids on this branch, in the order they were added.
    node_ids: Vec<usize>,
    /// Nodes whose rule has already been applied on this branch.
    processed: HashSet<usize>,
    /// All signed formulas present on this branch, in insertion order.
    formulas: IndexSet<SignedFormula>,
    closed: bool,
}

impl Branch {
    pub fn new() -> Self {
        Branch {
            node_ids: Vec::new(),
            processed: HashSet::new(),
            formulas: IndexSet::new(),
            closed: false,
        }
    }

    pub fn node_ids(&self) -> &[usize] {
        &self.node_ids
    }

    /// The frontier node, where extensions attach.
    pub fn leaf(&self) -> Option<usize> {
        self.node_ids.last().copied()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn contains(&self, formula: &SignedFormula) -> bool {
        self.formulas.contains(formula)
    }

    /// Signed formulas on this branch, in insertion order.
    pub fn formulas(&self) -> impl Iterator<Item = &SignedFormula> {
        self.formulas.iter()
    }

    pub fn is_processed(&self, node_id: usize) -> bool {
        self.processed.contains(&node_id)
    }

    pub fn mark_processed(&mut self, node_id: usize) {
        self.processed.insert(node_id);
    }

    /// Record a node on this branch and re-check closure.
    ///
    /// A branch closes iff it holds `t: F` and `f: F` for the same atomic F.
    /// Gluts (`t: P` with `t: P*`) do not close: the dual is a distinct atom.
    pub fn record(&mut self, node_id: usize, formula: &SignedFormula) {
        self.node_ids.push(node_id);
        self.formulas.insert(formula.clone());
        if formula.formula.is_atomic() && self.formulas.contains(&formula.complement()) {
            self.closed = true;
        }
    }
}

impl Default for Branch {
    fn default() -> Self {
        Self::new()
    }
}
