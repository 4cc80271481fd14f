//! Node command handlers.
//!
//! Selection commands go to the graph model; edit commands go to the
//! [`NodeEditSession`]. Save failures have already been reported through the
//! notifier by the session when they come back here.

use std::str::FromStr;

use jsonsync_core::JsonPath;
use jsonsync_engine::{GraphModel, NodeEditSession};

use crate::convert::invalid_path;
use crate::{Output, Result};

// =============================================================================
// Selection
// =============================================================================

/// Handle SelectNode command.
pub fn select_node(graph: &GraphModel, id: String) -> Result<Output> {
    let node = graph.select_node(&id)?;
    Ok(Output::Node(Some(node)))
}

/// Handle SelectPath command.
pub fn select_path(graph: &GraphModel, path: String) -> Result<Output> {
    let json_path = JsonPath::from_str(&path).map_err(|e| invalid_path(&path, e))?;
    let node = graph.select_path(&json_path)?;
    Ok(Output::Node(Some(node)))
}

/// Handle ClearSelection command.
pub fn clear_selection(graph: &GraphModel) -> Result<Output> {
    graph.clear_selection();
    Ok(Output::Unit)
}

/// Handle SelectedNode command.
pub fn selected_node(graph: &GraphModel) -> Result<Output> {
    Ok(Output::Node(graph.selected_node()))
}

// =============================================================================
// Editing
// =============================================================================

fn buffer(session: &NodeEditSession) -> Output {
    Output::Buffer {
        text: session.edit_buffer().to_string(),
        state: session.state(),
    }
}

/// Handle BeginEdit command: returns the buffer to edit.
pub fn begin_edit(session: &mut NodeEditSession) -> Result<Output> {
    session.begin_edit()?;
    Ok(buffer(session))
}

/// Handle UpdateBuffer command.
pub fn update_buffer(session: &mut NodeEditSession, text: String) -> Result<Output> {
    session.set_buffer(text)?;
    Ok(Output::Unit)
}

/// Handle Save command: returns the merged value.
pub fn save(session: &mut NodeEditSession) -> Result<Output> {
    let merged = session.save()?;
    Ok(Output::Value(merged))
}

/// Handle Cancel command: returns the re-snapshotted buffer.
pub fn cancel(session: &mut NodeEditSession) -> Result<Output> {
    session.cancel();
    Ok(buffer(session))
}

/// Handle InlineSave command: returns the written value.
pub fn inline_save(session: &mut NodeEditSession, raw: String) -> Result<Output> {
    let value = session.commit_inline(&raw)?;
    Ok(Output::Value(value))
}

/// Handle GetBuffer command.
pub fn get_buffer(session: &NodeEditSession) -> Result<Output> {
    Ok(buffer(session))
}

/// Handle PathLabel command.
pub fn path_label(session: &NodeEditSession) -> Result<Output> {
    Ok(Output::PathLabel(session.path_label()))
}
