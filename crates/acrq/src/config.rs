//! Engine configuration types.

/// Configuration for tableau construction.
#[derive(Debug, Clone)]
pub struct TableauConfig {
    /// Maximum number of rule applications (0 means no limit).
    pub max_steps: usize,
    /// Maximum number of tableau nodes (0 means no limit).
    pub max_nodes: usize,
    /// Record a trace event per rule application (zero overhead when false).
    pub enable_trace: bool,
}

impl Default for TableauConfig {
    fn default() -> Self {
        TableauConfig {
            max_steps: 0,
            max_nodes: 0,
            enable_trace: false,
        }
    }
}
