//! Error types for Mapstats

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapstatsError {
    // Search input errors
    #[error("Search query is empty")]
    EmptyQuery,

    #[error("No place found for '{query}'")]
    NoResultsFound { query: String },

    // Upstream errors
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Bad response status: {status}")]
    BadHttpStatus { status: u16 },

    #[error("Invalid {field} value '{value}': expected a finite decimal number")]
    InvalidCoordinate { field: String, value: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MapstatsError {
    /// Whether this failure ends an invocation without any diagnostic log.
    ///
    /// Empty queries halt silently and empty search results are reported
    /// to the user instead of the log.
    pub fn is_silent(&self) -> bool {
        matches!(self, MapstatsError::EmptyQuery | MapstatsError::NoResultsFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, MapstatsError>;
