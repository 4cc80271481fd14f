//! Node edit session
//!
//! Editing state for the selected graph node. The session shows the node's
//! rows as editable text, lets the user stage a change, and commits it into
//! the document at the node's path with merge-on-save semantics.
//!
//! # States
//!
//! - `Viewing`: the buffer mirrors the selected node and is re-snapshotted by
//!   [`NodeEditSession::refresh`] whenever the node or the document changes
//! - `Editing`: the buffer belongs to the user; background changes never
//!   touch it
//!
//! # Example
//!
//! ```ignore
//! let mut session = NodeEditSession::new(store, graph, notifier, SyncOptions::default());
//! graph.select_node("2")?;
//! session.refresh();
//! session.begin_edit()?;
//! session.set_buffer(r#"{"name": "Bob"}"#)?;
//! let merged = session.save()?;
//! ```

use std::sync::Arc;

use jsonsync_core::json::{kind_name, read_value_at, write_value_at, JsonPath};
use jsonsync_core::rows::{rows_to_editable_text, text_to_rows};
use jsonsync_core::{merge_values, Notifier, Result, SyncError, SyncOptions};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::graph::types::GraphNode;
use crate::graph::GraphModel;
use crate::store::DocumentStore;

/// Whether the user is currently editing the selected node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditState {
    /// Buffer mirrors the node
    Viewing,
    /// Buffer holds the user's uncommitted text
    Editing,
}

/// Editing state for the selected node
pub struct NodeEditSession {
    store: Arc<DocumentStore>,
    graph: Arc<GraphModel>,
    notifier: Arc<dyn Notifier>,
    options: SyncOptions,
    state: EditState,
    buffer: String,
    /// Store revision the buffer was last snapshotted at
    seen_document: u64,
    /// Graph selection revision the buffer was last snapshotted at
    seen_selection: u64,
}

impl NodeEditSession {
    /// Create a session in the `Viewing` state, snapshotting the current
    /// selection
    pub fn new(
        store: Arc<DocumentStore>,
        graph: Arc<GraphModel>,
        notifier: Arc<dyn Notifier>,
        options: SyncOptions,
    ) -> Self {
        let mut session = Self {
            store,
            graph,
            notifier,
            options,
            state: EditState::Viewing,
            buffer: String::new(),
            seen_document: 0,
            seen_selection: 0,
        };
        session.snapshot();
        session
    }

    /// Current state
    pub fn state(&self) -> EditState {
        self.state
    }

    /// True while the user is editing
    pub fn is_editing(&self) -> bool {
        self.state == EditState::Editing
    }

    /// Text shown in the node editor
    pub fn edit_buffer(&self) -> &str {
        &self.buffer
    }

    /// Options the session was created with
    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// Formatted path of the selected node, `$` when there is none
    pub fn path_label(&self) -> String {
        self.graph
            .selected_node()
            .and_then(|node| node.path)
            .unwrap_or_default()
            .to_string()
    }

    fn snapshot(&mut self) {
        let rows = self
            .graph
            .selected_node()
            .map(|node| node.rows)
            .unwrap_or_default();
        self.buffer = rows_to_editable_text(&rows);
        self.mark_seen();
    }

    fn mark_seen(&mut self) {
        self.seen_document = self.store.revision();
        self.seen_selection = self.graph.selection_revision();
    }

    /// Re-snapshot the buffer if the selection or the document changed
    ///
    /// Does nothing while editing. Returns whether the buffer was replaced.
    pub fn refresh(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }
        let stale = self.seen_document != self.store.revision()
            || self.seen_selection != self.graph.selection_revision();
        if stale {
            self.snapshot();
        }
        stale
    }

    /// Start editing the selected node
    ///
    /// Snapshots the node's rows into the buffer. Calling it while already
    /// editing keeps the in-progress text.
    pub fn begin_edit(&mut self) -> Result<()> {
        if self.is_editing() {
            return Ok(());
        }
        if self.graph.selected_node().is_none() {
            return Err(SyncError::NoSelection);
        }
        self.snapshot();
        self.state = EditState::Editing;
        tracing::debug!(target: "jsonsync::session", path = %self.path_label(), "edit started");
        Ok(())
    }

    /// Replace the buffer with what the user typed
    pub fn set_buffer(&mut self, text: impl Into<String>) -> Result<()> {
        if !self.is_editing() {
            return Err(SyncError::NotEditing);
        }
        self.buffer = text.into();
        Ok(())
    }

    /// Discard the buffer and show the node's current content again
    pub fn cancel(&mut self) {
        self.snapshot();
        self.state = EditState::Viewing;
    }

    /// Commit the buffer into the document
    ///
    /// Returns the merged value now stored at the node's path. On failure the
    /// error is reported to the notifier, the document is untouched and the
    /// session stays in `Editing`.
    pub fn save(&mut self) -> Result<Value> {
        if !self.is_editing() {
            return Err(SyncError::NotEditing);
        }
        let outcome = self
            .require_writable()
            .and_then(|()| serde_json::from_str::<Value>(&self.buffer).map_err(SyncError::parse))
            .and_then(|input| self.commit(input));
        self.report(&outcome);

        let merged = outcome?;
        self.buffer = serde_json::to_string_pretty(&merged).map_err(SyncError::parse)?;
        self.state = EditState::Viewing;
        self.mark_seen();
        Ok(merged)
    }

    /// Commit a value typed into a scalar node's inline editor
    ///
    /// `raw` is parsed as JSON, or taken as a string when it does not parse.
    /// The value replaces the node's value. An in-progress edit of the
    /// buffer is left alone.
    pub fn commit_inline(&mut self, raw: &str) -> Result<Value> {
        let outcome = self.require_writable().and_then(|()| {
            let node = self.graph.selected_node().ok_or(SyncError::NoSelection)?;
            if !node.is_scalar() {
                return Err(SyncError::NotScalar { id: node.id });
            }
            let value = serde_json::from_str::<Value>(raw)
                .unwrap_or_else(|_| Value::String(raw.to_string()));
            self.commit(value)
        });
        self.report(&outcome);

        if outcome.is_ok() && !self.is_editing() {
            self.snapshot();
        }
        outcome
    }

    fn require_writable(&self) -> Result<()> {
        if self.options.is_read_only() {
            Err(SyncError::ReadOnly)
        } else {
            Ok(())
        }
    }

    /// Resolve, merge, write back and push; mutates nothing on failure
    fn commit(&self, input: Value) -> Result<Value> {
        let node = self.graph.selected_node().ok_or(SyncError::NoSelection)?;
        let path = node.path.clone().ok_or(SyncError::MissingPath)?;

        let mut doc = self.store.parse()?;
        let existing = read_value_at(&doc, &path)?.cloned();
        if self.options.strict_paths {
            check_shape(&node, &path, existing.as_ref())?;
        }

        let merged = merge_values(existing.as_ref(), input);
        write_value_at(&mut doc, &path, merged.clone())?;
        let new_json = serde_json::to_string_pretty(&doc).map_err(SyncError::parse)?;

        self.store.set_json(new_json);
        self.graph.update_selected_rows(text_to_rows(&merged));

        tracing::info!(target: "jsonsync::session", path = %path, "node saved");
        Ok(merged)
    }

    fn report(&self, outcome: &Result<Value>) {
        match outcome {
            Ok(_) => self.notifier.notify_success(&self.options.success_message),
            Err(e) => {
                tracing::warn!(target: "jsonsync::session", error = %e, "node save failed");
                self.notifier.notify_error(&user_message(e));
            }
        }
    }
}

fn user_message(err: &SyncError) -> String {
    match err {
        SyncError::Parse { .. } => "Invalid JSON format".to_string(),
        SyncError::MissingPath => "Path not found".to_string(),
        other => other.to_string(),
    }
}

/// Fail when the live value at `path` is not the kind of value `node` was
/// built from
fn check_shape(node: &GraphNode, path: &JsonPath, existing: Option<&Value>) -> Result<()> {
    let existing = existing
        .ok_or_else(|| SyncError::addressing_mismatch(path.to_string(), "no value at this path"))?;
    let container = existing.is_object() || existing.is_array();
    if node.is_scalar() && container {
        Err(SyncError::addressing_mismatch(
            path.to_string(),
            format!("expected a scalar, found an {}", kind_name(existing)),
        ))
    } else if !node.is_scalar() && !container {
        Err(SyncError::addressing_mismatch(
            path.to_string(),
            format!("expected an object, found a {}", kind_name(existing)),
        ))
    } else {
        Ok(())
    }
}
