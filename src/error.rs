//! Error handling for the mdvis core
//!
//! This module defines the crate error type and a Result alias.
//!
//! Malformed payloads never surface here: they degrade to absent or
//! empty values inside the reduction and classification code. The
//! error type exists for the dispatch boundary (no renderer matched
//! an analysis) and for the companion binary's file handling.

use thiserror::Error;

/// Main error type for mdvis-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// No dispatch entry produced a canonical extraction for an analysis
    #[error("No renderer available for analysis '{name}'")]
    NoRenderer { name: String },

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload parsing errors
    #[error("Payload error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for mdvis-core operations
pub type Result<T> = std::result::Result<T, CoreError>;
