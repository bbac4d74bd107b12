//! Formulas: atoms and compound forms.

use super::predicate::PredicateFormula;
use super::term::Term;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A formula in bilateral predicate logic.
///
/// Formulas are immutable and compared/hashed structurally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    Atom(PredicateFormula),
    Negation(Box<Formula>),
    Conjunction(Box<Formula>, Box<Formula>),
    Disjunction(Box<Formula>, Box<Formula>),
    Implication(Box<Formula>, Box<Formula>),
    Biconditional(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Create an atomic predicate formula `name(args)`.
    pub fn predicate(name: impl Into<String>, args: Vec<Term>) -> Result<Formula> {
        Ok(Formula::Atom(PredicateFormula::new(name, args)?))
    }

    /// Create the starred dual atom `name*(args)`.
    pub fn star(name: impl Into<String>, args: Vec<Term>) -> Result<Formula> {
        Ok(Formula::Atom(PredicateFormula::new(name, args)?.dual()))
    }

    pub fn negate(self) -> Formula {
        Formula::Negation(Box::new(self))
    }

    pub fn and(self, other: Formula) -> Formula {
        Formula::Conjunction(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Formula) -> Formula {
        Formula::Disjunction(Box::new(self), Box::new(other))
    }

    pub fn implies(self, other: Formula) -> Formula {
        Formula::Implication(Box::new(self), Box::new(other))
    }

    pub fn iff(self, other: Formula) -> Formula {
        Formula::Biconditional(Box::new(self), Box::new(other))
    }

    /// Check whether this formula is atomic.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Formula::Atom(_))
    }

    /// Get the underlying atom, if this formula is atomic.
    pub fn as_atom(&self) -> Option<&PredicateFormula> {
        match self {
            Formula::Atom(atom) => Some(atom),
            _ => None,
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Atom(atom) => write!(f, "{}", atom),
            Formula::Negation(a) => write!(f, "~{}", a),
            Formula::Conjunction(a, b) => write!(f, "({} & {})", a, b),
            Formula::Disjunction(a, b) => write!(f, "({} | {})", a, b),
            Formula::Implication(a, b) => write!(f, "({} -> {})", a, b),
            Formula::Biconditional(a, b) => write!(f, "({} <-> {})", a, b),
        }
    }
}
