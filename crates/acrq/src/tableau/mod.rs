//! The tableau construction engine.
//!
//! The engine owns an arena of nodes (integer ids, parent/child links) and a
//! list of branches, each with exclusively owned bookkeeping. Construction
//! repeatedly scans open branches and applies the highest-priority rule that
//! matches an unprocessed node, extending the branch, forking it, or marking
//! the node processed, until no open branch can make progress.
//!
//! Rule selection is deterministic: rules in list order, branches in index
//! order, nodes in branch order. Repeated runs over the same input and
//! oracle state produce identical trees, traces, and results.

pub mod branch;
pub mod model;
pub mod node;


pub use branch::Branch;
pub use model::Model;
pub use node::TableauNode;

use crate::config::TableauConfig;
use crate::error::{Result, TableauError};
use crate::formula::SignedFormula;
use crate::oracle::Oracle;
use crate::rules::{rule_list, RuleContext, RuleResult, TableauRule};
use crate::trace::{TableauTrace, TraceEvent};
use serde::{Deserialize, Serialize};

/// The verdict of a completed construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableauResult {
    /// True iff at least one branch remains open.
    pub satisfiable: bool,
    /// One model per open branch, in branch order.
    pub models: Vec<Model>,
    pub open_branches: usize,
    pub closed_branches: usize,
}

impl TableauResult {
    /// Serialize the result to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A tableau proof attempt.
///
/// Created once per attempt; after `construct` returns, the node tree and
/// trace remain available for read-only inspection (e.g. by a renderer).
pub struct Tableau {
    nodes: Vec<TableauNode>,
    branches: Vec<Branch>,
    config: TableauConfig,
    trace: TableauTrace,
    steps: usize,
}

impl Tableau {
    /// Build the initial tree: the given formulas chained as a single spine
    /// (the first formula is the root) on one open branch.
    pub fn new(initial: Vec<SignedFormula>, config: TableauConfig) -> Self {
        let mut tableau = Tableau {
            nodes: Vec::new(),
            branches: vec![Branch::new()],
            config,
            trace: Vec::new(),
            steps: 0,
        };
        for sf in initial {
            tableau.attach(0, sf);
        }
        tableau
    }

    /// Run construction to completion.
    ///
    /// Returns the satisfiability verdict with extracted models, or an error
    /// if the oracle adapter failed or a configured budget was exceeded.
    /// Errors abort the whole attempt; there is no partial result.
    pub fn construct(&mut self, mut oracle: Option<&mut dyn Oracle>) -> Result<TableauResult> {
        let rules = rule_list(oracle.is_some());

        loop {
            let mut progressed = false;
            let mut i = 0;
            // Branches appended by forks during this pass are scanned in the
            // same pass; indices of existing branches never move.
            while i < self.branches.len() {
                if self.branches[i].is_closed() {
                    i += 1;
                    continue;
                }
                let Some((rule_idx, node_id)) = self.select(&self.branches[i], &rules) else {
                    i += 1;
                    continue;
                };

                self.steps += 1;
                self.check_budget()?;

                let result = {
                    let mut ctx = RuleContext {
                        oracle: oracle.as_deref_mut(),
                    };
                    rules[rule_idx].apply(&mut self.nodes[node_id], &mut ctx)?
                };

                if self.config.enable_trace {
                    self.trace.push(TraceEvent {
                        rule: rules[rule_idx].name().to_string(),
                        formula: self.nodes[node_id].formula.to_string(),
                    });
                }

                self.branches[i].mark_processed(node_id);
                match result {
                    RuleResult::NoOp => {}
                    RuleResult::Extend(formulas) => {
                        self.extend(i, formulas);
                    }
                    RuleResult::Fork(alternatives) => {
                        self.fork(i, alternatives);
                    }
                }
                self.check_budget()?;
                progressed = true;
                i += 1;
            }
            if !progressed {
                break;
            }
        }

        Ok(self.result())
    }

    /// Find the highest-priority applicable rule on a branch.
    ///
    /// Rules are scanned in list order, nodes in branch order, so every
    /// structural decomposition on the branch precedes any oracle call.
    fn select(&self, branch: &Branch, rules: &[Box<dyn TableauRule>]) -> Option<(usize, usize)> {
        for (rule_idx, rule) in rules.iter().enumerate() {
            for &node_id in branch.node_ids() {
                if !branch.is_processed(node_id) && rule.matches(&self.nodes[node_id]) {
                    return Some((rule_idx, node_id));
                }
            }
        }
        None
    }

    /// Append deduplicated formulas at the branch leaf.
    fn extend(&mut self, branch_idx: usize, formulas: Vec<SignedFormula>) {
        for sf in formulas {
            if self.branches[branch_idx].is_closed() {
                break;
            }
            if !self.branches[branch_idx].contains(&sf) {
                self.attach(branch_idx, sf);
            }
        }
    }

    /// Replace the branch with the first alternative and append the rest,
    /// each starting from a clone of the pre-fork bookkeeping.
    fn fork(&mut self, branch_idx: usize, alternatives: Vec<Vec<SignedFormula>>) {
        let base = self.branches[branch_idx].clone();
        for (k, alternative) in alternatives.into_iter().enumerate() {
            let target = if k == 0 {
                branch_idx
            } else {
                self.branches.push(base.clone());
                self.branches.len() - 1
            };
            self.extend(target, alternative);
        }
    }

    /// Create a node at the branch leaf and record it on the branch.
    fn attach(&mut self, branch_idx: usize, formula: SignedFormula) -> usize {
        let id = self.nodes.len();
        let parent = self.branches[branch_idx].leaf();
        self.nodes.push(TableauNode::new(id, formula, parent));
        if let Some(parent_id) = parent {
            self.nodes[parent_id].children.push(id);
        }
        let formula_ref = self.nodes[id].formula.clone();
        self.branches[branch_idx].record(id, &formula_ref);
        id
    }

    fn check_budget(&self) -> Result<()> {
        let over_steps = self.config.max_steps > 0 && self.steps > self.config.max_steps;
        let over_nodes = self.config.max_nodes > 0 && self.nodes.len() > self.config.max_nodes;
        if over_steps || over_nodes {
            return Err(TableauError::ResourceExhausted {
                steps: self.steps,
                nodes: self.nodes.len(),
            });
        }
        Ok(())
    }

    fn result(&self) -> TableauResult {
        let mut models = Vec::new();
        let mut open_branches = 0;
        let mut closed_branches = 0;
        for branch in &self.branches {
            if branch.is_closed() {
                closed_branches += 1;
            } else {
                open_branches += 1;
                models.push(Model::from_branch(branch));
            }
        }
        TableauResult {
            satisfiable: open_branches > 0,
            models,
            open_branches,
            closed_branches,
        }
    }

    // === Read-only inspection (for renderers and tests) ===

    pub fn node(&self, id: usize) -> Option<&TableauNode> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[TableauNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// The construction trace (empty unless `enable_trace` was set).
    pub fn trace(&self) -> &[TraceEvent] {
        &self.trace
    }
}

/// Construct a tableau from initial signed formulas with the default
/// configuration and return the verdict.
pub fn construct(
    initial: Vec<SignedFormula>,
    oracle: Option<&mut dyn Oracle>,
) -> Result<TableauResult> {
    Tableau::new(initial, TableauConfig::default()).construct(oracle)
}
