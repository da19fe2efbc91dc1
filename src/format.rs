//! Output format handling for roadnet
//!
//! Supports three output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format, one fact per line

use std::fmt;

/// Output format for roadnet commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output for line-oriented tools
    Records,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Quote a city id for records output, escaping embedded quotes
pub fn quote_id(id: &str) -> String {
    format!("\"{}\"", id.replace('"', r#"\""#))
}

/// Render a distance, spelling out unreachable ones
pub fn format_distance(distance: f64) -> String {
    if distance.is_finite() {
        distance.to_string()
    } else {
        "inf".to_string()
    }
}
