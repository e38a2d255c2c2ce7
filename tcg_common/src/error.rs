//! Error types shared by the deck checker crates

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for snapshot acquisition, configuration and I/O
///
/// Line-level problems in decklists or collection tables are not errors; they
/// are collected (invalid lines) or dropped (incomplete rows) by the parsers.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to write a collection table
    #[error("CSV error: {0}")]
    Csv(String),
    /// A fresh collection snapshot was needed but could not be fetched
    #[error("Unable to fetch collection data: {0}")]
    SourceUnavailable(String),
    /// No usable collection endpoint is configured
    #[error("Configuration error: {0}")]
    ConfigurationMissing(String),
    /// The configuration file exists but cannot be read
    #[error("Invalid configuration file {}: {reason}", .path.display())]
    InvalidConfig { path: PathBuf, reason: String },
}

/// Short alias used across the workspace
pub type Error = CheckerError;

/// Result alias for deck checker operations
pub type Result<T> = std::result::Result<T, CheckerError>;
