//! The oracle adapter boundary.
//!
//! An oracle is an external evidence source (an LLM, a database, a human)
//! queried for atomic formulas only. It is treated as an opaque, fallible
//! capability: the engine calls it synchronously and propagates its answer
//! or error verbatim. Statefulness is the caller's responsibility, which is
//! what makes non-monotonic behavior possible: the same formula may receive
//! different evidence on different `construct` runs.

use crate::error::{Result, TableauError};
use crate::formula::{BilateralTruthValue, Formula};
use indexmap::IndexMap;

/// Errors raised by oracle adapters.
pub type OracleError = Box<dyn std::error::Error + Send + Sync>;

/// A user-supplied evidence source.
///
/// The engine invokes `evaluate` only on atomic, unstarred formulas, and at
/// most once per formula occurrence in the tableau.
pub trait Oracle {
    fn evaluate(&mut self, formula: &Formula) -> std::result::Result<BilateralTruthValue, OracleError>;
}

/// Any `FnMut(&Formula) -> Result<BilateralTruthValue, OracleError>` is an oracle.
impl<F> Oracle for F
where
    F: FnMut(&Formula) -> std::result::Result<BilateralTruthValue, OracleError>,
{
    fn evaluate(&mut self, formula: &Formula) -> std::result::Result<BilateralTruthValue, OracleError> {
        self(formula)
    }
}

/// A table-driven oracle mapping atom text (e.g. `"P(a)"`) to evidence.
///
/// Atoms absent from the table receive the configured default, a gap unless
/// overridden. Entries can be replaced between runs to simulate changing
/// knowledge.
#[derive(Debug, Clone)]
pub struct LookupOracle {
    entries: IndexMap<String, BilateralTruthValue>,
    default: BilateralTruthValue,
}

impl LookupOracle {
    pub fn new() -> Self {
        LookupOracle {
            entries: IndexMap::new(),
            default: BilateralTruthValue::gap(),
        }
    }

    /// Set the value returned for atoms not present in the table.
    pub fn with_default(mut self, default: BilateralTruthValue) -> Self {
        self.default = default;
        self
    }

    /// Record evidence for an atom, replacing any previous entry.
    pub fn insert(&mut self, atom: impl Into<String>, value: BilateralTruthValue) {
        self.entries.insert(atom.into(), value);
    }

    /// Builder-style `insert`.
    pub fn with_entry(mut self, atom: impl Into<String>, value: BilateralTruthValue) -> Self {
        self.insert(atom, value);
        self
    }
}

impl Default for LookupOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl Oracle for LookupOracle {
    fn evaluate(&mut self, formula: &Formula) -> std::result::Result<BilateralTruthValue, OracleError> {
        let key = formula.to_string();
        Ok(self.entries.get(&key).copied().unwrap_or(self.default))
    }
}

/// Wrap an adapter error with the formula that was being evaluated.
pub(crate) fn wrap_oracle_error(formula: &Formula, source: OracleError) -> TableauError {
    TableauError::Oracle {
        formula: formula.to_string(),
        source,
    }
}

/// Call the adapter on the base form of an atom, wrapping any error.
pub(crate) fn evaluate_base(
    oracle: &mut dyn Oracle,
    base: &Formula,
) -> Result<BilateralTruthValue> {
    oracle
        .evaluate(base)
        .map_err(|e| wrap_oracle_error(base, e))
}
