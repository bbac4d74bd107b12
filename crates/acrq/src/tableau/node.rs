//! Arena nodes of the tableau tree.

use crate::formula::{BilateralTruthValue, SignedFormula};
use serde::{Deserialize, Serialize};

/// One signed formula placed in the tableau tree.
///
/// Nodes live in an arena owned by the tableau and refer to each other by
/// integer id, so branches can share prefixes without ownership cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableauNode {
    pub id: usize,
    pub formula: SignedFormula,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    /// Cached raw oracle answer for this occurrence.
    ///
    /// Set on first evaluation and reused when the node sits above a fork
    /// and its effect has to be replayed on another branch, so the adapter
    /// is invoked at most once per occurrence.
    pub oracle_verdict: Option<BilateralTruthValue>,
}

impl TableauNode {
    pub fn new(id: usize, formula: SignedFormula, parent: Option<usize>) -> Self {
        TableauNode {
            id,
            formula,
            parent,
            children: Vec::new(),
            oracle_verdict: None,
        }
    }

    /// Whether this occurrence has already been oracle-evaluated.
    pub fn oracle_evaluated(&self) -> bool {
        self.oracle_verdict.is_some()
    }
}
