//! Error types for the folha-core library.
//!
//! Extraction and calculation never fail: noisy input degrades to empty or
//! zero fields instead of raising. The only fallible surface is country
//! configuration loading.

use thiserror::Error;

/// Main error type for the folha library.
#[derive(Error, Debug)]
pub enum FolhaError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading or writing a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the folha library.
pub type Result<T> = std::result::Result<T, FolhaError>;
