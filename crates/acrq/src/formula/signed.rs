//! Signed formulas: the unit of work placed on a tableau branch.

use super::formula::Formula;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The truth sign attached to a formula under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// Asserted true within the proof.
    T,
    /// Asserted false within the proof.
    F,
}

impl Sign {
    pub fn opposite(self) -> Sign {
        match self {
            Sign::T => Sign::F,
            Sign::F => Sign::T,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::T => write!(f, "t"),
            Sign::F => write!(f, "f"),
        }
    }
}

/// A formula paired with a truth sign.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignedFormula {
    pub sign: Sign,
    pub formula: Formula,
}

impl SignedFormula {
    pub fn new(sign: Sign, formula: Formula) -> Self {
        SignedFormula { sign, formula }
    }

    /// Shorthand for `t: formula`.
    pub fn asserted(formula: Formula) -> Self {
        SignedFormula::new(Sign::T, formula)
    }

    /// Shorthand for `f: formula`.
    pub fn denied(formula: Formula) -> Self {
        SignedFormula::new(Sign::F, formula)
    }

    /// The same formula under the opposite sign.
    pub fn complement(&self) -> SignedFormula {
        SignedFormula {
            sign: self.sign.opposite(),
            formula: self.formula.clone(),
        }
    }
}

impl fmt::Display for SignedFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sign, self.formula)
    }
}
