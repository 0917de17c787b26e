//! Todo service metrics.

use metrics::counter;

/// Result of a todo operation, used as a metric label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NotFound,
    Error,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::NotFound => "not_found",
            Outcome::Error => "error",
        }
    }
}

/// Todo metrics recorder
pub struct TodoMetrics;

impl TodoMetrics {
    /// Count one service operation (`create`, `update`, `delete`, `find`, `find_all`)
    pub fn record_operation(operation: &'static str, outcome: Outcome) {
        counter!(
            "todo_operations_total",
            "operation" => operation,
            "outcome" => outcome.as_str()
        )
        .increment(1);
    }
}
