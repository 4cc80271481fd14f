//! Collaborator traits
//!
//! The synchronization core talks to three external components it does not
//! own: the text editor, the graph, and the notification UI. Each is a trait
//! so hosts can plug in their own implementations.

use serde::{Deserialize, Serialize};

/// A write pushed to the text editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentsUpdate {
    /// New editor text
    pub contents: String,
    /// Suppress the editor's own change notification for this write
    pub skip_update: bool,
}

impl ContentsUpdate {
    /// An update that originated inside the store and must not be re-ingested
    pub fn internal(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            skip_update: true,
        }
    }
}

/// The text/file editor showing the raw document
pub trait TextEditor: Send + Sync {
    /// Current editor text
    fn contents(&self) -> String;

    /// Replace the editor text
    ///
    /// With `skip_update` set the editor must not raise a change notification
    /// for this write.
    fn set_contents(&self, update: ContentsUpdate);
}

/// The derived graph view
pub trait GraphSink: Send + Sync {
    /// Rebuild the graph from JSON text
    ///
    /// Callers pass validated JSON only.
    fn set_graph(&self, json: &str);

    /// Remove every node
    fn clear_graph(&self);
}

/// Fire-and-forget user notifications
pub trait Notifier: Send + Sync {
    /// Report a success
    fn notify_success(&self, message: &str);

    /// Report a failure
    fn notify_error(&self, message: &str);
}
