//! Error types for portal-sweep.
//!
//! Uses thiserror for ergonomic error definitions. Per-item and per-group
//! failures are logged and counted where they occur; only configuration and
//! orchestrator-level failures propagate out of a run.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Remote portal errors
    #[error("Portal API error: {0}")]
    Portal(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Orchestrator-level hard stop
    #[error("Holding account not found: {0}")]
    HoldingAccountNotFound(String),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

// Convenience conversions
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Portal(format!("HTTP request failed: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Portal(format!("JSON parsing error: {}", err))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Config(format!("Invalid portal URL: {}", err))
    }
}
