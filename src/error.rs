//! Error types and exit codes for roadnet
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown city, invalid network file)

use std::path::PathBuf;

use roadnet_core::error::GraphError;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown city, invalid network (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while running a roadnet command
#[derive(Error, Debug)]
pub enum RoadnetError {
    // Usage errors (exit code 2)
    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("unknown city: {id}")]
    UnknownCity { id: String },

    #[error("invalid network {path:?}: {reason}")]
    InvalidNetwork { path: PathBuf, reason: String },

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RoadnetError {
    /// Create an error for a network file whose contents are unusable
    pub fn invalid_network(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        RoadnetError::InvalidNetwork {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn unknown_city(id: &str) -> Self {
        RoadnetError::UnknownCity { id: id.to_string() }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RoadnetError::DuplicateFormat | RoadnetError::UsageError(_) => ExitCode::Usage,

            RoadnetError::UnknownCity { .. }
            | RoadnetError::InvalidNetwork { .. }
            | RoadnetError::Graph(_)
            | RoadnetError::Toml(_) => ExitCode::Data,

            RoadnetError::Io(_) | RoadnetError::Json(_) | RoadnetError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            RoadnetError::DuplicateFormat => "duplicate_format",
            RoadnetError::UsageError(_) => "usage_error",
            RoadnetError::UnknownCity { .. } => "unknown_city",
            RoadnetError::InvalidNetwork { .. } => "invalid_network",
            RoadnetError::Graph(e) => e.error_type(),
            RoadnetError::Toml(_) => "toml_error",
            RoadnetError::Io(_) => "io_error",
            RoadnetError::Json(_) => "json_error",
            RoadnetError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for roadnet commands
pub type Result<T> = std::result::Result<T, RoadnetError>;
