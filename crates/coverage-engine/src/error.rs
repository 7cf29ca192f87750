//! Error types for coverage-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverageError {
    #[error("Report end must be after report begin (begin: {begin}, end: {end})")]
    InvalidWindow { begin: String, end: String },

    #[error("Unparsable instant '{input}': {reason}")]
    UnparsableInstant { input: String, reason: String },

    #[error("Invalid contract at index {index}: field {field}: {reason}")]
    InvalidContract {
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoverageError>;
