//! Error types for jsonsync
//!
//! Every failure the synchronization core can report is a [`SyncError`].
//! None of them is fatal: the edit session catches them, reports them through
//! the notifier and leaves the document untouched.

use thiserror::Error;

/// Errors raised by path addressing, the document store and the edit session
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// Text is not valid JSON
    #[error("invalid JSON: {message}")]
    Parse {
        /// Parser message
        message: String,
    },

    /// A node save was attempted on a node that carries no path
    #[error("path not found")]
    MissingPath,

    /// A path segment could not be resolved against the document shape
    #[error("cannot resolve {path}: {reason}")]
    PathResolution {
        /// Formatted path being resolved
        path: String,
        /// What went wrong
        reason: String,
    },

    /// An array write past the append position
    #[error("index {index} out of range at {path} (length {len})")]
    IndexOutOfRange {
        /// Formatted path being written
        path: String,
        /// Requested index
        index: usize,
        /// Current array length
        len: usize,
    },

    /// The selected node was computed against a document shape that no longer holds
    #[error("node at {path} no longer matches the document: {reason}")]
    AddressingMismatch {
        /// Formatted path of the node
        path: String,
        /// What changed
        reason: String,
    },

    /// No node is selected
    #[error("no node selected")]
    NoSelection,

    /// A buffer operation was attempted outside of an edit
    #[error("not editing")]
    NotEditing,

    /// Inline editing requires a scalar node
    #[error("node {id} is not a scalar node")]
    NotScalar {
        /// Node id
        id: String,
    },

    /// Writes are disabled by configuration
    #[error("document is read-only")]
    ReadOnly,

    /// The graph has no node with this id
    #[error("node {id} not found")]
    NodeNotFound {
        /// Node id
        id: String,
    },

    /// Path text could not be parsed
    #[error("invalid path: {0}")]
    InvalidPath(#[from] crate::json::PathParseError),

    /// Configuration could not be loaded
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SyncError {
    /// Build a parse error from any displayable parser failure
    pub fn parse(err: impl std::fmt::Display) -> Self {
        SyncError::Parse {
            message: err.to_string(),
        }
    }

    /// Build a path resolution error
    pub fn path_resolution(path: impl Into<String>, reason: impl Into<String>) -> Self {
        SyncError::PathResolution {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Build an addressing mismatch error
    pub fn addressing_mismatch(path: impl Into<String>, reason: impl Into<String>) -> Self {
        SyncError::AddressingMismatch {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by what the user typed
    ///
    /// These keep the edit session open so the user can correct the input.
    pub fn is_user_input(&self) -> bool {
        matches!(self, SyncError::Parse { .. } | SyncError::MissingPath)
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(e: serde_json::Error) -> Self {
        SyncError::parse(e)
    }
}

/// Result alias used across jsonsync crates
pub type Result<T> = std::result::Result<T, SyncError>;
