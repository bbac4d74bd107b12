//! Tableau expansion rules.
//!
//! Rules implement a `matches`/`apply` capability and are held in a fixed,
//! ordered list; priority is simply list order. Structural decomposition
//! rules come first, one per connective, and the oracle rule is strictly
//! last, so the oracle is never consulted while a compound formula could
//! still be decomposed.
//!
//! All rule effects are expressed as `RuleResult` values. Rules never close
//! branches directly: a closing effect is an extension with the complement
//! of an atom already on the branch, and the branch bookkeeping detects the
//! complementary pair uniformly.

pub mod oracle;
pub mod structural;

use crate::error::Result;
use crate::oracle::Oracle;
use crate::tableau::TableauNode;

pub use oracle::OracleRule;
pub use structural::{
    BiconditionalRule, ConjunctionRule, DisjunctionRule, ImplicationRule, NegationRule,
};

use crate::formula::SignedFormula;

/// The effect of applying a rule to a node on a branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleResult {
    /// The node is consistent as it stands; nothing to add.
    NoOp,
    /// Linear extension: add these formulas to the same branch.
    Extend(Vec<SignedFormula>),
    /// Branch on alternatives: one new branch per list of formulas.
    Fork(Vec<Vec<SignedFormula>>),
}

/// Per-application context handed to rules.
///
/// Only the oracle rule uses the adapter; structural rules ignore it.
pub struct RuleContext<'a, 'o> {
    pub oracle: Option<&'a mut (dyn Oracle + 'o)>,
}

/// A tableau expansion rule.
pub trait TableauRule {
    fn name(&self) -> &str;

    /// Whether this rule applies to the node's signed formula.
    fn matches(&self, node: &TableauNode) -> bool;

    /// Apply the rule. The node is mutable so the oracle rule can cache its
    /// verdict on the occurrence; structural rules leave the node untouched.
    fn apply(&self, node: &mut TableauNode, ctx: &mut RuleContext) -> Result<RuleResult>;
}

/// The fixed rule list, in priority order.
///
/// The oracle rule is included only when an adapter was supplied; without
/// one, atomic nodes are terminal and branches stay open on them.
pub fn rule_list(with_oracle: bool) -> Vec<Box<dyn TableauRule>> {
    let mut rules: Vec<Box<dyn TableauRule>> = vec![
        Box::new(NegationRule),
        Box::new(ConjunctionRule),
        Box::new(DisjunctionRule),
        Box::new(ImplicationRule),
        Box::new(BiconditionalRule),
    ];
    if with_oracle {
        rules.push(Box::new(OracleRule));
    }
    rules
}
