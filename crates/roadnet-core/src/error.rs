//! Error types for roadnet-core
//!
//! Only graph construction can fail. The algorithms never return errors: an
//! unknown start node yields an empty result instead.

use thiserror::Error;

/// Errors raised while building a graph
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    #[error("invalid weight {weight} for edge {from} -> {to}")]
    InvalidWeight { from: String, to: String, weight: f64 },
}

impl GraphError {
    /// Create an error for a node id that is not in the graph
    pub fn unknown_node(id: impl Into<String>) -> Self {
        GraphError::UnknownNode { id: id.into() }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownNode { .. } => "unknown_node",
            GraphError::InvalidWeight { .. } => "invalid_weight",
        }
    }
}

/// Result type alias for graph construction
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_node_message() {
        let err = GraphError::unknown_node("Atlantis");
        assert_eq!(err.to_string(), "unknown node: Atlantis");
        assert_eq!(err.error_type(), "unknown_node");
    }

    #[test]
    fn test_invalid_weight_message() {
        let err = GraphError::InvalidWeight {
            from: "A".to_string(),
            to: "B".to_string(),
            weight: f64::NAN,
        };
        assert_eq!(err.to_string(), "invalid weight NaN for edge A -> B");
        assert_eq!(err.error_type(), "invalid_weight");
    }
}
