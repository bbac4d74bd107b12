//! Bilateral truth values: paired positive/negative evidence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An oracle's evidence about a predicate instance.
///
/// The two components are independent classical booleans, giving four
/// meaningful combinations:
///
/// | positive | negative | meaning                                   |
/// |----------|----------|-------------------------------------------|
/// | true     | false    | confirmation (oracle affirms)             |
/// | false    | true     | refutation (oracle denies)                |
/// | true     | true     | glut (contradictory evidence, tolerated)  |
/// | false    | false    | gap (no opinion)                          |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BilateralTruthValue {
    pub positive: bool,
    pub negative: bool,
}

impl BilateralTruthValue {
    pub fn new(positive: bool, negative: bool) -> Self {
        BilateralTruthValue { positive, negative }
    }

    pub fn confirmation() -> Self {
        BilateralTruthValue::new(true, false)
    }

    pub fn refutation() -> Self {
        BilateralTruthValue::new(false, true)
    }

    pub fn glut() -> Self {
        BilateralTruthValue::new(true, true)
    }

    pub fn gap() -> Self {
        BilateralTruthValue::new(false, false)
    }

    /// The component swap applied when a node holds the starred dual:
    /// evidence for `P` read through `P*` exchanges the two components.
    pub fn swapped(self) -> Self {
        BilateralTruthValue {
            positive: self.negative,
            negative: self.positive,
        }
    }

    pub fn is_confirmation(self) -> bool {
        self.positive && !self.negative
    }

    pub fn is_refutation(self) -> bool {
        !self.positive && self.negative
    }

    pub fn is_glut(self) -> bool {
        self.positive && self.negative
    }

    pub fn is_gap(self) -> bool {
        !self.positive && !self.negative
    }
}

impl fmt::Display for BilateralTruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.positive, self.negative) {
            (true, false) => write!(f, "confirmation"),
            (false, true) => write!(f, "refutation"),
            (true, true) => write!(f, "glut"),
            (false, false) => write!(f, "gap"),
        }
    }
}
