//! Bilateral predicate atoms.
//!
//! Every predicate `P` has a paired dual `P*` that tracks negative evidence
//! independently. A `PredicateFormula` with `negative = true` is the starred
//! dual; it shares the predicate name and arguments with its base form but is
//! a distinct atom for closure purposes, which is what makes gluts
//! (`t: P(a)` together with `t: P*(a)`) representable without contradiction.

use super::term::Term;
use crate::error::{Result, TableauError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An atomic predicate application, or its starred dual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PredicateFormula {
    pub name: String,
    pub args: Vec<Term>,
    /// True for the starred dual `P*`, which records counter-evidence.
    pub negative: bool,
}

impl PredicateFormula {
    /// Create a base (unstarred) predicate atom.
    ///
    /// The name must be non-empty and must not contain `*`, which is
    /// reserved for displaying the dual.
    pub fn new(name: impl Into<String>, args: Vec<Term>) -> Result<PredicateFormula> {
        let name = name.into();
        if name.is_empty() {
            return Err(TableauError::MalformedFormula(
                "predicate name must be non-empty".to_string(),
            ));
        }
        if name.contains('*') {
            return Err(TableauError::MalformedFormula(format!(
                "predicate name {:?} must not contain '*'",
                name
            )));
        }
        Ok(PredicateFormula {
            name,
            args,
            negative: false,
        })
    }

    /// The paired atom: `P ↔ P*`.
    pub fn dual(&self) -> PredicateFormula {
        PredicateFormula {
            name: self.name.clone(),
            args: self.args.clone(),
            negative: !self.negative,
        }
    }

    /// The unstarred form. This is the only form the oracle is ever queried with.
    pub fn base(&self) -> PredicateFormula {
        PredicateFormula {
            name: self.name.clone(),
            args: self.args.clone(),
            negative: false,
        }
    }
}

impl fmt::Display for PredicateFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.negative {
            write!(f, "*")?;
        }
        if !self.args.is_empty() {
            write!(f, "(")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(name: &str) -> Term {
        Term::new(name).unwrap()
    }

    #[test]
    fn test_display() {
        let p = PredicateFormula::new("P", vec![term("a"), term("b")]).unwrap();
        assert_eq!(p.to_string(), "P(a,b)");
        assert_eq!(p.dual().to_string(), "P*(a,b)");

        let zero_ary = PredicateFormula::new("Rain", vec![]).unwrap();
        assert_eq!(zero_ary.to_string(), "Rain");
    }

    #[test]
    fn test_dual_round_trip() {
        let p = PredicateFormula::new("P", vec![term("a")]).unwrap();
        assert_ne!(p, p.dual());
        assert_eq!(p, p.dual().dual());
        assert_eq!(p.dual().base(), p);
    }

    #[test]
    fn test_star_in_name_rejected() {
        assert!(matches!(
            PredicateFormula::new("P*", vec![]),
            Err(TableauError::MalformedFormula(_))
        ));
    }
}
