//! The oracle evidence rule (Γ_LLM).
//!
//! Applies only to atomic nodes, and only after every structural rule on the
//! branch is exhausted (it is last in the rule list). The adapter is always
//! queried with the base predicate; when the node holds the starred dual the
//! answer's components are swapped before the effect table applies, so
//! evidence for `P` is read through `P*` with the roles of the two
//! components exchanged.
//!
//! Effect table, for the (possibly swapped) pair and the node's sign, where
//! `R` is the node's own atom and `R*` its dual:
//!
//! | pair  | s = t                       | s = f                     |
//! |-------|-----------------------------|---------------------------|
//! | (T,F) | no-op                       | extend `t:R` (closes)     |
//! | (F,T) | extend `t:R*` (glut, open)  | no-op                     |
//! | (T,T) | extend `t:R`, `t:R*` (open) | extend `f:R`, `f:R*`      |
//! | (F,F) | extend `f:R` (closes)       | no-op                     |
//!
//! A gap closes a positively asserted atom: no evidence is not license to
//! assume the assertion holds. A refutation of a positively asserted atom
//! does not close; it records the counter-evidence as an explicit glut,
//! which the closure check tolerates.

use super::{RuleContext, RuleResult, TableauRule};
use crate::error::Result;
use crate::formula::{Formula, Sign, SignedFormula};
use crate::oracle::evaluate_base;
use crate::tableau::TableauNode;

pub struct OracleRule;

impl TableauRule for OracleRule {
    fn name(&self) -> &str {
        "Oracle"
    }

    fn matches(&self, node: &TableauNode) -> bool {
        node.formula.formula.is_atomic()
    }

    fn apply(&self, node: &mut TableauNode, ctx: &mut RuleContext) -> Result<RuleResult> {
        let Some(atom) = node.formula.formula.as_atom() else {
            return Ok(RuleResult::NoOp);
        };

        let raw = match node.oracle_verdict {
            Some(cached) => cached,
            None => {
                let Some(oracle) = ctx.oracle.as_mut() else {
                    return Ok(RuleResult::NoOp);
                };
                let base = Formula::Atom(atom.base());
                evaluate_base(&mut **oracle, &base)?
            }
        };

        let verdict = if atom.negative { raw.swapped() } else { raw };
        let this = Formula::Atom(atom.clone());
        let dual = Formula::Atom(atom.dual());

        let result = match (node.formula.sign, verdict.positive, verdict.negative) {
            // Confirmation: consistent with assertion, contradicts denial.
            (Sign::T, true, false) => RuleResult::NoOp,
            (Sign::F, true, false) => RuleResult::Extend(vec![SignedFormula::asserted(this)]),
            // Refutation: the dual becomes true, yielding a tolerated glut
            // under assertion; consistent with denial.
            (Sign::T, false, true) => RuleResult::Extend(vec![SignedFormula::asserted(dual)]),
            (Sign::F, false, true) => RuleResult::NoOp,
            // Glut: both components recorded explicitly; never closes.
            (Sign::T, true, true) => RuleResult::Extend(vec![
                SignedFormula::asserted(this),
                SignedFormula::asserted(dual),
            ]),
            (Sign::F, true, true) => RuleResult::Extend(vec![
                SignedFormula::denied(this),
                SignedFormula::denied(dual),
            ]),
            // Gap: an unsupported positive assertion closes; absence of
            // evidence is consistent with explicit denial.
            (Sign::T, false, false) => RuleResult::Extend(vec![SignedFormula::denied(this)]),
            (Sign::F, false, false) => RuleResult::NoOp,
        };

        node.oracle_verdict = Some(raw);
        Ok(result)
    }
}
