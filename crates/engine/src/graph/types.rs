//! Core graph types for the derived node graph.

use jsonsync_core::json::JsonPath;
use jsonsync_core::rows::NodeRow;
use serde::{Deserialize, Serialize};

/// Width of one character in the estimated node size.
const CHAR_WIDTH: u32 = 8;
/// Height of one row in the estimated node size.
const ROW_HEIGHT: u32 = 24;
/// Horizontal plus vertical padding around node content.
const PADDING: u32 = 24;
const MIN_WIDTH: u32 = 80;
const MAX_WIDTH: u32 = 700;

/// Estimated on-screen size of a node.
///
/// Hosts with a real layout engine replace this; it only keeps node metadata
/// complete for hosts without one.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl NodeSize {
    /// Estimate a size from the rows a node displays.
    pub fn estimate(rows: &[NodeRow]) -> Self {
        let longest = rows
            .iter()
            .map(|row| {
                let key = row.key.as_deref().map_or(0, |k| k.chars().count() + 2);
                key + jsonsync_core::rows::coerce_to_string(&row.value).chars().count()
            })
            .max()
            .unwrap_or(2);
        Self {
            width: scaled(longest, CHAR_WIDTH).clamp(MIN_WIDTH, MAX_WIDTH),
            height: scaled(rows.len().max(1), ROW_HEIGHT),
        }
    }
}

/// `count * unit + PADDING`, saturating at `u32::MAX`
fn scaled(count: usize, unit: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(unit)
        .saturating_add(PADDING)
}

/// A node of the derived graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphNode {
    /// Node ID, unique within one build of the graph.
    pub id: String,
    /// Displayed fields, in document order.
    pub rows: Vec<NodeRow>,
    /// Location of the node's value in the document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<JsonPath>,
    /// Estimated size.
    pub size: NodeSize,
}

impl GraphNode {
    /// Create a node, estimating its size from its rows.
    pub fn new(id: impl Into<String>, rows: Vec<NodeRow>, path: Option<JsonPath>) -> Self {
        let size = NodeSize::estimate(&rows);
        Self {
            id: id.into(),
            rows,
            path,
            size,
        }
    }

    /// True for a node built from a scalar value: one row with no key.
    ///
    /// A row keyed by the empty string is an object member, so `{"": 1}`
    /// is not a scalar node even though its editor text is `1`.
    pub fn is_scalar(&self) -> bool {
        matches!(self.rows.as_slice(), [only] if only.key.is_none())
    }
}

/// Parent/child link between two nodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    /// Source node ID.
    pub src: String,
    /// Destination node ID.
    pub dst: String,
}
