//! Error types and handling infrastructure for student-roster.
//!
//! Library code returns [`RosterError`] through the crate-wide [`Result`] alias; the binary
//! wraps it with `anyhow` for context at the process boundary.
//!
//! ## Design Principles
//!
//! - **User-facing messages**: most variants end up in an alert popup, so `Display` output
//!   is phrased for the person at the keyboard
//! - **Context preservation**: I/O failures keep their source error
//! - **Dialog policy**: [`RosterError::keeps_dialog_open`] decides whether a failed submit
//!   leaves the dialog on screen

use std::path::Path;
use thiserror::Error;

/// The main error type for student-roster operations.
#[derive(Error, Debug)]
pub enum RosterError {
    /// File system related errors (permission denied, disk full, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A line of the backing file does not hold exactly three fields
    #[error("Malformed record on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    /// Required form input is missing
    #[error("{message}")]
    Validation { message: String },

    /// Add was refused because the roll number is already taken
    #[error("Roll number {roll_no} already exists!")]
    DuplicateRollNo { roll_no: String },

    /// Update/delete target is absent, including when the backing file was never created
    #[error("No records found!")]
    RecordNotFound { roll_no: String },

    /// An operation that needs a selected row was triggered without one
    #[error("Please select a student to {action}!")]
    NoSelection { action: String },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for student-roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    /// Create a Validation error shown to the user verbatim
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a RecordNotFound error for the given roll number
    pub fn record_not_found(roll_no: impl Into<String>) -> Self {
        Self::RecordNotFound {
            roll_no: roll_no.into(),
        }
    }

    /// Create a NoSelection error naming the blocked action ("update", "delete")
    pub fn no_selection(action: impl Into<String>) -> Self {
        Self::NoSelection {
            action: action.into(),
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Build a FileError that names the path involved
    pub fn at_path(path: &Path, source: std::io::Error) -> Self {
        Self::FileError {
            message: format!("{}: {}", path.display(), source),
            source,
        }
    }

    /// Whether a dialog whose submit failed with this error should stay open for correction.
    pub fn keeps_dialog_open(&self) -> bool {
        matches!(
            self,
            RosterError::Validation { .. } | RosterError::DuplicateRollNo { .. }
        )
    }
}

// Automatic conversion from io::Error to RosterError
impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}
