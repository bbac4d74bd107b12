//! Terms denoting domain individuals.

use crate::error::{Result, TableauError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque, immutable reference to a domain individual (a named constant).
///
/// Identity is by value: two terms are equal iff their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    name: String,
}

impl Term {
    /// Create a term. The name must be non-empty.
    pub fn new(name: impl Into<String>) -> Result<Term> {
        let name = name.into();
        if name.is_empty() {
            return Err(TableauError::MalformedFormula(
                "term name must be non-empty".to_string(),
            ));
        }
        Ok(Term { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
