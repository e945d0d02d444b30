//! Error types for job parsing, validation and planning.
//!
//! The packer itself never fails: panels that cannot be placed are reported
//! in [`crate::PackingResult::unplaceable`]. These errors cover the code
//! around it.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes reported as the CLI exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (1)
    FileNotFound = 1,
    /// Empty file (2)
    EmptyFile = 2,
    /// Malformed job file (3)
    ParseError = 3,
    /// No boxes in the job (11)
    NoBoxes = 11,
    /// Validation reported errors (200)
    ValidationFailed = 200,
}

/// Main error type for the planner.
#[derive(Debug, Error)]
pub enum BoxcutError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid job file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No boxes defined in job")]
    NoBoxes,

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BoxcutError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BoxcutError::FileNotFound { .. } => ErrorCode::FileNotFound,
            BoxcutError::EmptyFile { .. } => ErrorCode::EmptyFile,
            BoxcutError::Json(_) => ErrorCode::ParseError,
            BoxcutError::NoBoxes => ErrorCode::NoBoxes,
            BoxcutError::Validation { .. } => ErrorCode::ValidationFailed,
            BoxcutError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, BoxcutError>;
