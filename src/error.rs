//! Error types for the analytics engine.
//!
//! Only malformed input is fatal. Everything else (dangling edges, empty
//! graphs, disconnected path queries) degrades to well-defined empty or zero
//! results instead of an error.

use thiserror::Error;

/// Errors returned by the analytics engine.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The supplied nodes/edges do not have the expected shape or ranges.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Two nodes in the same snapshot share an id.
    #[error("invalid input: duplicate node id '{0}'")]
    DuplicateNodeId(String),
}

impl AnalyticsError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = AnalyticsError::invalid("nodes must be an array");
        assert_eq!(err.to_string(), "invalid input: nodes must be an array");
    }

    #[test]
    fn test_duplicate_node_display() {
        let err = AnalyticsError::DuplicateNodeId("n1".to_string());
        assert_eq!(err.to_string(), "invalid input: duplicate node id 'n1'");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AnalyticsError = json_err.into();
        assert!(matches!(err, AnalyticsError::InvalidInput { .. }));
    }
}
