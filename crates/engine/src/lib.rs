//! Synchronization engine for jsonsync
//!
//! Keeps one JSON document consistent across three views:
//! - [`DocumentStore`]: the authoritative text
//! - [`GraphModel`]: nodes derived from the text, plus the selection
//! - the host's text editor, behind [`jsonsync_core::TextEditor`]
//!
//! [`NodeEditSession`] edits the selected node and writes back through the
//! store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod editor;
pub mod graph;
pub mod notify;
pub mod registry;
pub mod session;
pub mod store;

pub use editor::MemoryEditor;
pub use graph::types::{Edge, GraphNode, NodeSize};
pub use graph::GraphModel;
pub use notify::{LogNotifier, Notification, RecordingNotifier};
pub use session::{EditState, NodeEditSession};
pub use store::{DocumentStore, EMPTY_DOCUMENT};
