//! Data model for bilateral predicate logic.
//!
//! This module provides the fundamental types: terms, atoms with their
//! starred duals, compound formulas, signed formulas, and bilateral truth
//! values.

pub mod bilateral;
#[allow(clippy::module_inception)]
pub mod formula;
pub mod predicate;
pub mod signed;
pub mod term;

// Re-export commonly used types
pub use bilateral::BilateralTruthValue;
pub use formula::Formula;
pub use predicate::PredicateFormula;
pub use signed::{Sign, SignedFormula};
pub use term::Term;
