//! Node operations: selection and editing.

use jsonsync_core::JsonValue;
use jsonsync_engine::{EditState, GraphNode};

use super::{unexpected, JsonSync};
use crate::{Command, Output, Result};

impl JsonSync {
    // =========================================================================
    // Selection
    // =========================================================================

    /// Select a node by ID.
    pub fn select_node(&self, id: &str) -> Result<GraphNode> {
        self.expect_node(
            "SelectNode",
            Command::SelectNode { id: id.to_string() },
        )
    }

    /// Select the node at a path such as `$["users"][0]`.
    pub fn select_path(&self, path: &str) -> Result<GraphNode> {
        self.expect_node(
            "SelectPath",
            Command::SelectPath {
                path: path.to_string(),
            },
        )
    }

    fn expect_node(&self, name: &str, cmd: Command) -> Result<GraphNode> {
        match self.executor.execute(cmd)? {
            Output::Node(Some(node)) => Ok(node),
            other => Err(unexpected(name, &other)),
        }
    }

    /// Drop the selection.
    pub fn clear_selection(&self) -> Result<()> {
        match self.executor.execute(Command::ClearSelection)? {
            Output::Unit => Ok(()),
            other => Err(unexpected("ClearSelection", &other)),
        }
    }

    /// The selected node, if any.
    pub fn selected_node(&self) -> Result<Option<GraphNode>> {
        match self.executor.execute(Command::SelectedNode)? {
            Output::Node(node) => Ok(node),
            other => Err(unexpected("SelectedNode", &other)),
        }
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Start editing the selected node; returns the text to edit.
    pub fn begin_edit(&self) -> Result<String> {
        match self.executor.execute(Command::BeginEdit)? {
            Output::Buffer { text, .. } => Ok(text),
            other => Err(unexpected("BeginEdit", &other)),
        }
    }

    /// Replace the edit buffer.
    pub fn update_buffer(&self, text: impl Into<String>) -> Result<()> {
        match self
            .executor
            .execute(Command::UpdateBuffer { text: text.into() })?
        {
            Output::Unit => Ok(()),
            other => Err(unexpected("UpdateBuffer", &other)),
        }
    }

    /// Commit the edit buffer; returns the merged value.
    pub fn save(&self) -> Result<JsonValue> {
        match self.executor.execute(Command::Save)? {
            Output::Value(value) => Ok(value),
            other => Err(unexpected("Save", &other)),
        }
    }

    /// Discard the edit buffer.
    pub fn cancel(&self) -> Result<()> {
        match self.executor.execute(Command::Cancel)? {
            Output::Buffer { .. } => Ok(()),
            other => Err(unexpected("Cancel", &other)),
        }
    }

    /// Commit a scalar node's inline edit; returns the written value.
    pub fn inline_save(&self, raw: &str) -> Result<JsonValue> {
        match self.executor.execute(Command::InlineSave {
            raw: raw.to_string(),
        })? {
            Output::Value(value) => Ok(value),
            other => Err(unexpected("InlineSave", &other)),
        }
    }

    /// Edit buffer text and session state.
    pub fn buffer(&self) -> Result<(String, EditState)> {
        match self.executor.execute(Command::GetBuffer)? {
            Output::Buffer { text, state } => Ok((text, state)),
            other => Err(unexpected("GetBuffer", &other)),
        }
    }

    /// Formatted path of the selected node.
    pub fn path_label(&self) -> Result<String> {
        match self.executor.execute(Command::PathLabel)? {
            Output::PathLabel(label) => Ok(label),
            other => Err(unexpected("PathLabel", &other)),
        }
    }
}
