//! Error conversion from engine error types.
//!
//! This module maps [`SyncError`] onto the executor's [`Error`] type.

use crate::Error;
use jsonsync_core::{PathParseError, SyncError};

/// Convert a SyncError to an executor Error.
///
/// Paths and reasons are carried over; parse errors keep the parser message.
impl From<SyncError> for Error {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::Parse { message } => Error::InvalidJson { reason: message },
            SyncError::MissingPath => Error::PathNotFound,

            // Addressing errors
            SyncError::PathResolution { path, reason } => Error::InvalidPath { path, reason },
            SyncError::InvalidPath(e) => invalid_path("", e),
            SyncError::IndexOutOfRange { path, index, len } => {
                Error::IndexOutOfRange { path, index, len }
            }
            SyncError::AddressingMismatch { path, reason } => {
                Error::AddressingMismatch { path, reason }
            }

            // Session state
            SyncError::NoSelection => Error::NoSelection,
            SyncError::NotEditing => Error::NotEditing,
            SyncError::NotScalar { id } => Error::NotScalar { id },
            SyncError::ReadOnly => Error::ReadOnly,
            SyncError::NodeNotFound { id } => Error::NodeNotFound { id },

            SyncError::Config(reason) => Error::Config { reason },
        }
    }
}

/// Error for path text that failed to parse.
pub(crate) fn invalid_path(path: &str, err: PathParseError) -> Error {
    Error::InvalidPath {
        path: path.to_string(),
        reason: err.to_string(),
    }
}
