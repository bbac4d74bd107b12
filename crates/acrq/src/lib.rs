//! acrq: a tableau prover for bilateral predicate logic.
//!
//! This library implements a semantic tableau calculus over a four-valued
//! (bilateral) predicate logic: every predicate `P` has a starred dual `P*`
//! tracking negative evidence independently, so contradictory evidence
//! (a glut) and absent evidence (a gap) are first-class, and neither
//! collapses into classical contradiction.
//!
//! On top of the structural calculus sits a non-monotonic oracle rule: an
//! external, possibly fallible evidence source (an LLM, a database) is
//! consulted for atomic formulas once every structural decomposition on a
//! branch is exhausted. Oracle answers are evidence, not axioms: re-running
//! the same proof against changed oracle state can flip the verdict.

pub mod config;
pub mod error;
pub mod formula;
pub mod oracle;
pub mod rules;
pub mod tableau;
pub mod trace;

// Re-export commonly used types from formula
pub use formula::{BilateralTruthValue, Formula, PredicateFormula, Sign, SignedFormula, Term};

// Re-export the oracle boundary
pub use oracle::{LookupOracle, Oracle, OracleError};

// Re-export rule types
pub use rules::{rule_list, OracleRule, RuleContext, RuleResult, TableauRule};

// Re-export the engine
pub use tableau::{construct, Branch, Model, Tableau, TableauNode, TableauResult};

pub use config::TableauConfig;
pub use error::{Result, TableauError};
pub use trace::{TableauTrace, TraceEvent};
