//! Structural decomposition rules, one per connective.
//!
//! Each rule decomposes a signed compound into its components per standard
//! tableau semantics: one sign of each connective extends linearly, the
//! other forks into alternative branches.

use super::{RuleContext, RuleResult, TableauRule};
use crate::error::Result;
use crate::formula::{Formula, Sign, SignedFormula};
use crate::tableau::TableauNode;

/// `t:~A ⇒ f:A` and `f:~A ⇒ t:A`.
pub struct NegationRule;

impl TableauRule for NegationRule {
    fn name(&self) -> &str {
        "Negation"
    }

    fn matches(&self, node: &TableauNode) -> bool {
        matches!(node.formula.formula, Formula::Negation(_))
    }

    fn apply(&self, node: &mut TableauNode, _ctx: &mut RuleContext) -> Result<RuleResult> {
        let Formula::Negation(inner) = &node.formula.formula else {
            return Ok(RuleResult::NoOp);
        };
        Ok(RuleResult::Extend(vec![SignedFormula::new(
            node.formula.sign.opposite(),
            (**inner).clone(),
        )]))
    }
}

/// `t:A&B ⇒ t:A, t:B` (extend); `f:A&B ⇒ f:A | f:B` (fork).
pub struct ConjunctionRule;

impl TableauRule for ConjunctionRule {
    fn name(&self) -> &str {
        "Conjunction"
    }

    fn matches(&self, node: &TableauNode) -> bool {
        matches!(node.formula.formula, Formula::Conjunction(_, _))
    }

    fn apply(&self, node: &mut TableauNode, _ctx: &mut RuleContext) -> Result<RuleResult> {
        let Formula::Conjunction(a, b) = &node.formula.formula else {
            return Ok(RuleResult::NoOp);
        };
        let (a, b) = ((**a).clone(), (**b).clone());
        Ok(match node.formula.sign {
            Sign::T => RuleResult::Extend(vec![
                SignedFormula::asserted(a),
                SignedFormula::asserted(b),
            ]),
            Sign::F => RuleResult::Fork(vec![
                vec![SignedFormula::denied(a)],
                vec![SignedFormula::denied(b)],
            ]),
        })
    }
}

/// `t:A|B ⇒ t:A | t:B` (fork); `f:A|B ⇒ f:A, f:B` (extend).
pub struct DisjunctionRule;

impl TableauRule for DisjunctionRule {
    fn name(&self) -> &str {
        "Disjunction"
    }

    fn matches(&self, node: &TableauNode) -> bool {
        matches!(node.formula.formula, Formula::Disjunction(_, _))
    }

    fn apply(&self, node: &mut TableauNode, _ctx: &mut RuleContext) -> Result<RuleResult> {
        let Formula::Disjunction(a, b) = &node.formula.formula else {
            return Ok(RuleResult::NoOp);
        };
        let (a, b) = ((**a).clone(), (**b).clone());
        Ok(match node.formula.sign {
            Sign::T => RuleResult::Fork(vec![
                vec![SignedFormula::asserted(a)],
                vec![SignedFormula::asserted(b)],
            ]),
            Sign::F => RuleResult::Extend(vec![
                SignedFormula::denied(a),
                SignedFormula::denied(b),
            ]),
        })
    }
}

/// `t:A->B ⇒ f:A | t:B` (fork); `f:A->B ⇒ t:A, f:B` (extend).
pub struct ImplicationRule;

impl TableauRule for ImplicationRule {
    fn name(&self) -> &str {
        "Implication"
    }

    fn matches(&self, node: &TableauNode) -> bool {
        matches!(node.formula.formula, Formula::Implication(_, _))
    }

    fn apply(&self, node: &mut TableauNode, _ctx: &mut RuleContext) -> Result<RuleResult> {
        let Formula::Implication(a, b) = &node.formula.formula else {
            return Ok(RuleResult::NoOp);
        };
        let (a, b) = ((**a).clone(), (**b).clone());
        Ok(match node.formula.sign {
            Sign::T => RuleResult::Fork(vec![
                vec![SignedFormula::denied(a)],
                vec![SignedFormula::asserted(b)],
            ]),
            Sign::F => RuleResult::Extend(vec![
                SignedFormula::asserted(a),
                SignedFormula::denied(b),
            ]),
        })
    }
}

/// `t:A<->B ⇒ (t:A,t:B) | (f:A,f:B)`; `f:A<->B ⇒ (t:A,f:B) | (f:A,t:B)`.
pub struct BiconditionalRule;

impl TableauRule for BiconditionalRule {
    fn name(&self) -> &str {
        "Biconditional"
    }

    fn matches(&self, node: &TableauNode) -> bool {
        matches!(node.formula.formula, Formula::Biconditional(_, _))
    }

    fn apply(&self, node: &mut TableauNode, _ctx: &mut RuleContext) -> Result<RuleResult> {
        let Formula::Biconditional(a, b) = &node.formula.formula else {
            return Ok(RuleResult::NoOp);
        };
        let (a, b) = ((**a).clone(), (**b).clone());
        Ok(match node.formula.sign {
            Sign::T => RuleResult::Fork(vec![
                vec![SignedFormula::asserted(a.clone()), SignedFormula::asserted(b.clone())],
                vec![SignedFormula::denied(a), SignedFormula::denied(b)],
            ]),
            Sign::F => RuleResult::Fork(vec![
                vec![SignedFormula::asserted(a.clone()), SignedFormula::denied(b.clone())],
                vec![SignedFormula::denied(a), SignedFormula::asserted(b)],
            ]),
        })
    }
}
