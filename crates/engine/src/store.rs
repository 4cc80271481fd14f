//! Document store
//!
//! The single source of truth for the JSON text. Every consumer writes through
//! it; it pushes each change to the graph and to the text editor.
//!
//! # Loop suppression
//!
//! There are exactly two directions of flow:
//! - push ([`DocumentStore::set_json`], [`DocumentStore::clear`]): store ->
//!   graph + editor, with `skip_update` set so the editor does not report the
//!   write back as a user edit
//! - pull ([`DocumentStore::sync_from_file`]): editor -> store + graph, never
//!   writing to the editor
//!
//! A pull attempted while a push is propagating is ignored, so one logical
//! change can never travel both ways. Pushes may nest (a collaborator can
//! call `set_json` while being notified); the pull stays suppressed until the
//! outermost push returns.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use jsonsync_core::{ContentsUpdate, GraphSink, Result, SyncError, TextEditor};
use parking_lot::RwLock;
use serde_json::Value;

/// Document text used when there is nothing else
pub const EMPTY_DOCUMENT: &str = "{}";

struct DocumentState {
    json: String,
    revision: u64,
}

/// Owner of the authoritative JSON text
///
/// # Thread Safety
///
/// The store is `Send + Sync` and shared through `Arc`. Its lock is never held
/// while a collaborator runs, so collaborators may read the store while being
/// notified.
pub struct DocumentStore {
    state: RwLock<DocumentState>,
    graph: Arc<dyn GraphSink>,
    editor: Arc<dyn TextEditor>,
    /// Number of pushes currently on the stack
    pushing: AtomicUsize,
}

/// Counts one push in progress for as long as it lives
struct PushGuard<'a>(&'a AtomicUsize);

impl<'a> PushGuard<'a> {
    fn new(depth: &'a AtomicUsize) -> Self {
        depth.fetch_add(1, Ordering::SeqCst);
        PushGuard(depth)
    }
}

impl Drop for PushGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl DocumentStore {
    /// Create the store, seeding it from the editor's current contents
    ///
    /// Empty or invalid editor text seeds `{}`. The graph is built from the
    /// seed; the editor is not written to.
    pub fn new(graph: Arc<dyn GraphSink>, editor: Arc<dyn TextEditor>) -> Self {
        let contents = editor.contents();
        let json = if contents.trim().is_empty() {
            EMPTY_DOCUMENT.to_string()
        } else if let Err(e) = serde_json::from_str::<Value>(&contents) {
            tracing::warn!(target: "jsonsync::store", error = %e, "editor contents are not valid JSON, starting empty");
            EMPTY_DOCUMENT.to_string()
        } else {
            contents
        };

        graph.set_graph(&json);

        Self {
            state: RwLock::new(DocumentState { json, revision: 0 }),
            graph,
            editor,
            pushing: AtomicUsize::new(0),
        }
    }

    /// Current document text
    pub fn get_json(&self) -> String {
        self.state.read().json.clone()
    }

    /// Counter bumped on every change of the document text
    pub fn revision(&self) -> u64 {
        self.state.read().revision
    }

    /// Fresh parse of the current document
    pub fn parse(&self) -> Result<Value> {
        serde_json::from_str(&self.state.read().json).map_err(SyncError::parse)
    }

    fn replace(&self, json: String) -> u64 {
        let mut state = self.state.write();
        state.json = json;
        state.revision += 1;
        state.revision
    }

    /// Store new text and push it to the graph and the editor
    ///
    /// The text is not validated; callers hand in JSON they already parsed.
    /// Use [`DocumentStore::try_set_json`] for unchecked input.
    pub fn set_json(&self, new_json: impl Into<String>) {
        let json = new_json.into();
        let _push = PushGuard::new(&self.pushing);

        let revision = self.replace(json.clone());
        self.graph.set_graph(&json);
        let bytes = json.len();
        self.editor.set_contents(ContentsUpdate::internal(json));

        tracing::debug!(target: "jsonsync::store", revision, bytes, "document pushed");
    }

    /// Validate text as JSON, then [`set_json`](DocumentStore::set_json) it
    ///
    /// Invalid text is rejected before anything changes.
    pub fn try_set_json(&self, new_json: impl Into<String>) -> Result<()> {
        let json = new_json.into();
        serde_json::from_str::<Value>(&json).map_err(SyncError::parse)?;
        self.set_json(json);
        Ok(())
    }

    /// Adopt the editor's text after the user edited it directly
    ///
    /// Returns `Ok(true)` when the document changed. Empty or identical
    /// editor text is ignored. Invalid JSON is rejected and the document
    /// keeps its prior value. The editor is never written to.
    pub fn sync_from_file(&self) -> Result<bool> {
        if self.pushing.load(Ordering::SeqCst) > 0 {
            tracing::debug!(target: "jsonsync::store", "pull ignored while a push is propagating");
            return Ok(false);
        }

        let contents = self.editor.contents();
        if contents.is_empty() || contents == self.state.read().json {
            return Ok(false);
        }
        if let Err(e) = serde_json::from_str::<Value>(&contents) {
            tracing::debug!(target: "jsonsync::store", error = %e, "editor text is not valid JSON, keeping document");
            return Err(SyncError::parse(e));
        }

        let revision = self.replace(contents.clone());
        self.graph.set_graph(&contents);

        tracing::debug!(target: "jsonsync::store", revision, "document pulled from editor");
        Ok(true)
    }

    /// Reset to `{}`, clear the graph and push the empty document to the editor
    pub fn clear(&self) {
        let _push = PushGuard::new(&self.pushing);

        let revision = self.replace(EMPTY_DOCUMENT.to_string());
        self.graph.clear_graph();
        self.editor
            .set_contents(ContentsUpdate::internal(EMPTY_DOCUMENT));

        tracing::debug!(target: "jsonsync::store", revision, "document cleared");
    }

    /// Publish this store as the process-wide diagnostic handle
    pub fn publish(self: &Arc<Self>) {
        crate::registry::publish(self);
    }
}
