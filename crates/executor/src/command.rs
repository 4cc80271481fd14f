//! Commands accepted by the executor.

use serde::{Deserialize, Serialize};

/// A single request against the synchronized document.
///
/// Commands are plain data so hosts can send them across a boundary as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    // =========================================================================
    // Document
    // =========================================================================
    /// Read the document text.
    GetJson,

    /// Replace the document text. Rejected if it is not valid JSON.
    SetJson {
        /// New document text.
        json: String,
    },

    /// The user edited the text editor directly; pull its contents.
    EditorChanged,

    /// Reset the document to `{}`.
    Clear,

    // =========================================================================
    // Selection
    // =========================================================================
    /// Select a graph node by ID.
    SelectNode {
        /// Node ID.
        id: String,
    },

    /// Select the graph node at a path such as `$["users"][0]`.
    SelectPath {
        /// Path text.
        path: String,
    },

    /// Drop the selection.
    ClearSelection,

    /// Read the selected node.
    SelectedNode,

    // =========================================================================
    // Node editing
    // =========================================================================
    /// Start editing the selected node.
    BeginEdit,

    /// Replace the edit buffer.
    UpdateBuffer {
        /// Buffer text.
        text: String,
    },

    /// Commit the edit buffer into the document.
    Save,

    /// Discard the edit buffer.
    Cancel,

    /// Commit a scalar node's inline edit.
    InlineSave {
        /// Text typed into the inline editor.
        raw: String,
    },

    /// Read the edit buffer and state.
    GetBuffer,

    /// Read the formatted path of the selected node.
    PathLabel,
}

impl Command {
    /// Command name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::GetJson => "GetJson",
            Command::SetJson { .. } => "SetJson",
            Command::EditorChanged => "EditorChanged",
            Command::Clear => "Clear",
            Command::SelectNode { .. } => "SelectNode",
            Command::SelectPath { .. } => "SelectPath",
            Command::ClearSelection => "ClearSelection",
            Command::SelectedNode => "SelectedNode",
            Command::BeginEdit => "BeginEdit",
            Command::UpdateBuffer { .. } => "UpdateBuffer",
            Command::Save => "Save",
            Command::Cancel => "Cancel",
            Command::InlineSave { .. } => "InlineSave",
            Command::GetBuffer => "GetBuffer",
            Command::PathLabel => "PathLabel",
        }
    }

    /// True for commands that may change the document.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::SetJson { .. }
                | Command::EditorChanged
                | Command::Clear
                | Command::Save
                | Command::InlineSave { .. }
        )
    }
}
