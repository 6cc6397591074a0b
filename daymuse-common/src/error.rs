//! Common error types for Daily Muse

use thiserror::Error;

/// Common result type for Daily Muse operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Daily Muse crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input (manifest or overrides)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML configuration file
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Manifest failed validation; one entry per issue
    #[error("Manifest invalid: {}", .0.join("; "))]
    ManifestInvalid(Vec<String>),
}
