//! String constants shared by the normalizer, the default display table and selectors.

/// Contextual messages attached to a rule's `info` field
pub mod info_messages {
    pub const EXECUTION_ERROR_PREFIX: &str = "Execution Error: ";
    pub const NO_DATA: &str = "Query returned no data";
}

/// Display text for each alert state
pub mod state_labels {
    pub const OK: &str = "OK";
    pub const ALERTING: &str = "ALERTING";
    pub const NO_DATA: &str = "NO DATA";
    pub const PAUSED: &str = "PAUSED";
    pub const PENDING: &str = "PENDING";
    pub const EXECUTION_ERROR: &str = "EXECUTION ERROR";
    pub const UNKNOWN: &str = "UNKNOWN";
}

/// Icon classes used by the default display table
pub mod state_icons {
    pub const HEART: &str = "heart";
    pub const HEART_BREAK: &str = "heart-break";
    pub const QUESTION_CIRCLE: &str = "question-circle";
    pub const PAUSE: &str = "pause";
    pub const EXCLAMATION: &str = "exclamation";
    pub const EXCLAMATION_TRIANGLE: &str = "exclamation-triangle";
}

/// CSS classes used by the default display table
pub mod state_classes {
    pub const OK: &str = "alert-state-ok";
    pub const CRITICAL: &str = "alert-state-critical";
    pub const WARNING: &str = "alert-state-warning";
    pub const PAUSED: &str = "alert-state-paused";
}
