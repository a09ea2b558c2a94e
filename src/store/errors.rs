//! Store error types
//!
//! Error codes:
//! - ROSTER_DUPLICATE_ID (REJECT)
//! - ROSTER_NOT_FOUND (REJECT)
//! - ROSTER_PERSISTENCE_FAILED (ERROR)
//! - ROSTER_STORE_CORRUPTED (ERROR)
//!
//! None of these are fatal to the process.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Student store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Student ID already exists: {0}")]
    DuplicateId(String),

    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("Failed to {action} {}: {reason}", .path.display())]
    Persistence {
        action: &'static str,
        path: PathBuf,
        reason: String,
    },

    #[error(
        "Checksum mismatch in {}: stored {expected:08x}, computed {actual:08x}",
        .path.display()
    )]
    Corrupted {
        path: PathBuf,
        expected: u32,
        actual: u32,
    },
}

impl StoreError {
    pub(crate) fn persistence(
        action: &'static str,
        path: impl Into<PathBuf>,
        reason: impl ToString,
    ) -> Self {
        StoreError::Persistence {
            action,
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::DuplicateId(_) => "ROSTER_DUPLICATE_ID",
            StoreError::NotFound(_) => "ROSTER_NOT_FOUND",
            StoreError::Persistence { .. } => "ROSTER_PERSISTENCE_FAILED",
            StoreError::Corrupted { .. } => "ROSTER_STORE_CORRUPTED",
        }
    }

    /// Returns true for errors caused by the caller rather than the backing file
    pub fn is_rejection(&self) -> bool {
        matches!(self, StoreError::DuplicateId(_) | StoreError::NotFound(_))
    }
}
