//! Error types for the weightsim_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for weightsim_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A simulation parameter failed validation (non-positive step or
    /// horizon, non-finite number). Raised before any computation.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A user input is outside the plausible range configured for the CLI
    #[error("Input out of range: {0}")]
    InputRange(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidParameter`]
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidParameter(msg.into())
    }
}
