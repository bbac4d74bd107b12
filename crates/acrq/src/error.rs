//! Error types for the tableau engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableauError {
    /// A term or formula constructor was given invalid input.
    #[error("malformed formula: {0}")]
    MalformedFormula(String),

    /// The oracle adapter failed while evaluating an atomic formula.
    ///
    /// Adapter errors are propagated verbatim, wrapped with the text of the
    /// formula that was being evaluated. They are never converted into a
    /// truth value.
    #[error("oracle evaluation failed for {formula}: {source}")]
    Oracle {
        formula: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A configured step or node budget was exceeded.
    ///
    /// Distinct from a proof verdict: callers must not mistake a budget
    /// overrun for unsatisfiability.
    #[error("resource limit exceeded after {steps} rule applications ({nodes} nodes)")]
    ResourceExhausted { steps: usize, nodes: usize },
}

pub type Result<T> = std::result::Result<T, TableauError>;
