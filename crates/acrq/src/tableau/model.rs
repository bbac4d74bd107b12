//! Models extracted from open branches.

use super::branch::Branch;
use crate::formula::{PredicateFormula, Sign};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A candidate model read off one open branch.
///
/// `valuations` maps each atomic occurrence on the branch, by its display
/// text (`"P(a)"`, `"P*(a)"`), to `"t"` or `"f"` according to its sign. The
/// map preserves branch insertion order, so extraction is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub valuations: IndexMap<String, String>,
}

impl Model {
    pub(crate) fn from_branch(branch: &Branch) -> Model {
        let mut valuations = IndexMap::new();
        for sf in branch.formulas() {
            if sf.formula.is_atomic() {
                let value = match sf.sign {
                    Sign::T => "t",
                    Sign::F => "f",
                };
                valuations
                    .entry(sf.formula.to_string())
                    .or_insert_with(|| value.to_string());
            }
        }
        Model { valuations }
    }

    /// Four-valued designation of a predicate instance, collapsing the
    /// bilateral pair: `"t"` (only the base atom affirmed), `"f"` (only the
    /// dual affirmed), `"b"` (glut, both affirmed), or `"n"` (gap, neither).
    ///
    /// Only t-signed evidence counts; an f-signed atom records a denied
    /// assertion, not negative evidence.
    pub fn designation(&self, atom: &PredicateFormula) -> &'static str {
        let base = atom.base();
        let positive = self.valuations.get(&base.to_string()).map(String::as_str) == Some("t");
        let negative = self.valuations.get(&base.dual().to_string()).map(String::as_str) == Some("t");
        match (positive, negative) {
            (true, true) => "b",
            (true, false) => "t",
            (false, true) => "f",
            (false, false) => "n",
        }
    }
}
