//! Graph module for jsonsync.
//!
//! Provides the node graph derived from the document text. The document store
//! rebuilds it on every change through the [`GraphSink`] trait; the edit
//! session reads the selected node from it.

mod builder;
pub mod types;

use jsonsync_core::json::JsonPath;
use jsonsync_core::rows::NodeRow;
use jsonsync_core::{GraphSink, Result, SyncError};
use parking_lot::RwLock;
use serde_json::Value;

use builder::GraphBuilder;
use types::*;

#[derive(Default)]
struct GraphState {
    nodes: Vec<GraphNode>,
    edges: Vec<Edge>,
    selected: Option<GraphNode>,
    selection_revision: u64,
}

impl GraphState {
    fn set_selected(&mut self, node: Option<GraphNode>) {
        self.selected = node;
        self.selection_revision += 1;
    }
}

/// In-memory graph model owning the derived nodes and the current selection.
#[derive(Default)]
pub struct GraphModel {
    state: RwLock<GraphState>,
}

impl GraphModel {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Nodes
    // =========================================================================

    /// All nodes, in build order.
    pub fn nodes(&self) -> Vec<GraphNode> {
        self.state.read().nodes.clone()
    }

    /// All edges, in build order.
    pub fn edges(&self) -> Vec<Edge> {
        self.state.read().edges.clone()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.state.read().nodes.len()
    }

    /// Node by ID.
    pub fn node(&self, id: &str) -> Option<GraphNode> {
        self.state.read().nodes.iter().find(|n| n.id == id).cloned()
    }

    /// Node whose value lives at `path`.
    pub fn node_at(&self, path: &JsonPath) -> Option<GraphNode> {
        let state = self.state.read();
        state
            .nodes
            .iter()
            .find(|n| n.path.as_ref() == Some(path))
            .cloned()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select a node by ID.
    pub fn select_node(&self, id: &str) -> Result<GraphNode> {
        let mut state = self.state.write();
        let node = state
            .nodes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| SyncError::NodeNotFound { id: id.to_string() })?;
        state.set_selected(Some(node.clone()));
        Ok(node)
    }

    /// Select the node whose value lives at `path`.
    pub fn select_path(&self, path: &JsonPath) -> Result<GraphNode> {
        let node = self.node_at(path).ok_or_else(|| SyncError::NodeNotFound {
            id: path.to_string(),
        })?;
        self.state.write().set_selected(Some(node.clone()));
        Ok(node)
    }

    /// Select a node supplied by the host, which need not belong to this graph.
    pub fn set_selected(&self, node: GraphNode) {
        self.state.write().set_selected(Some(node));
    }

    /// Drop the selection.
    pub fn clear_selection(&self) {
        self.state.write().set_selected(None);
    }

    /// The selected node, if any.
    pub fn selected_node(&self) -> Option<GraphNode> {
        self.state.read().selected.clone()
    }

    /// Replace the rows displayed by the selected node.
    ///
    /// Returns false when nothing is selected.
    pub fn update_selected_rows(&self, rows: Vec<NodeRow>) -> bool {
        let mut state = self.state.write();
        let Some(mut node) = state.selected.take() else {
            return false;
        };
        node.size = NodeSize::estimate(&rows);
        node.rows = rows;
        state.set_selected(Some(node));
        true
    }

    /// Counter bumped on every selection change, including row updates and
    /// re-selection after a rebuild.
    pub fn selection_revision(&self) -> u64 {
        self.state.read().selection_revision
    }
}

impl GraphSink for GraphModel {
    fn set_graph(&self, json: &str) {
        let root: Value = match serde_json::from_str(json) {
            Ok(root) => root,
            Err(e) => {
                tracing::warn!(target: "jsonsync::graph", error = %e, "rebuild skipped, document is not valid JSON");
                return;
            }
        };
        let (nodes, edges) = GraphBuilder::build(&root);

        let mut state = self.state.write();
        state.nodes = nodes;
        state.edges = edges;

        // Follow the selection to its path in the rebuilt graph
        let reselect = state.selected.as_ref().and_then(|sel| {
            sel.path
                .as_ref()
                .map(|path| state.nodes.iter().find(|n| n.path.as_ref() == Some(path)).cloned())
        });
        if let Some(found) = reselect {
            if found.is_none() {
                tracing::debug!(target: "jsonsync::graph", "selected path vanished, selection cleared");
            }
            state.set_selected(found);
        }

        tracing::debug!(
            target: "jsonsync::graph",
            nodes = state.nodes.len(),
            edges = state.edges.len(),
            "graph rebuilt"
        );
    }

    fn clear_graph(&self) {
        let mut state = self.state.write();
        state.nodes.clear();
        state.edges.clear();
        if state.selected.is_some() {
            state.set_selected(None);
        }
    }
}
