//! Command results.

use jsonsync_core::JsonValue;
use jsonsync_engine::{EditState, GraphNode};
use serde::{Deserialize, Serialize};

/// Result of a successfully executed [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Nothing to return.
    Unit,

    /// Document text.
    Json(String),

    /// Whether the document changed.
    Changed(bool),

    /// Value written at the selected node's path.
    Value(JsonValue),

    /// Edit buffer and session state.
    Buffer {
        /// Buffer text.
        text: String,
        /// Session state.
        state: EditState,
    },

    /// Formatted path of the selected node.
    PathLabel(String),

    /// A graph node, if there is one.
    Node(Option<GraphNode>),
}
