//! Executor error type.

use thiserror::Error;

/// Errors returned by [`Executor::execute`](crate::Executor::execute).
///
/// Every engine failure maps onto one of these variants; see `convert.rs`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text that should be JSON did not parse.
    #[error("invalid JSON: {reason}")]
    InvalidJson {
        /// Parser message.
        reason: String,
    },

    /// The selected node has no path into the document.
    #[error("path not found")]
    PathNotFound,

    /// A path could not be parsed or does not resolve in the document.
    #[error("invalid path {path}: {reason}")]
    InvalidPath {
        /// Path text as given or formatted.
        path: String,
        /// What went wrong.
        reason: String,
    },

    /// An array index past the append position.
    #[error("index {index} out of range at {path} (length {len})")]
    IndexOutOfRange {
        /// Formatted path.
        path: String,
        /// Requested index.
        index: usize,
        /// Array length.
        len: usize,
    },

    /// The node's path no longer points at the kind of value it showed.
    #[error("node at {path} is out of date: {reason}")]
    AddressingMismatch {
        /// Formatted path.
        path: String,
        /// What was found instead.
        reason: String,
    },

    /// No node is selected.
    #[error("no node selected")]
    NoSelection,

    /// The command needs an edit in progress.
    #[error("not editing")]
    NotEditing,

    /// Inline editing needs a scalar node.
    #[error("node {id} is not a scalar")]
    NotScalar {
        /// Node ID.
        id: String,
    },

    /// Writes are disabled.
    #[error("document is read-only")]
    ReadOnly,

    /// No node with this ID.
    #[error("node not found: {id}")]
    NodeNotFound {
        /// Node ID or path text.
        id: String,
    },

    /// Options could not be loaded.
    #[error("config error: {reason}")]
    Config {
        /// What went wrong.
        reason: String,
    },

    /// A command was issued from inside another command on the same thread,
    /// e.g. by a collaborator while it was being notified.
    #[error("{command} issued while another command is running on this thread")]
    Reentrant {
        /// Name of the rejected command.
        command: String,
    },

    /// A command produced an unexpected output.
    #[error("internal error: {reason}")]
    Internal {
        /// What went wrong.
        reason: String,
    },
}

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;
