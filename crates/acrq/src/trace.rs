//! Optional construction trace.
//!
//! The engine appends one event per rule application when
//! `TableauConfig::enable_trace` is set. The trace is purely observational:
//! rule logic never reads it.

use serde::{Deserialize, Serialize};

/// One rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Name of the applied rule.
    pub rule: String,
    /// Text of the signed formula the rule was applied to.
    pub formula: String,
}

/// The full construction trace, in application order.
pub type TableauTrace = Vec<TraceEvent>;
