//! Public types for the jsonsync API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// JSON values and paths
pub use jsonsync_core::{JsonPath, JsonValue, PathParseError, PathSegment};

// Node rows
pub use jsonsync_core::{NodeRow, RowType};

// Configuration
pub use jsonsync_core::{AccessMode, SyncOptions};

// Collaborator traits and the editor write they receive
pub use jsonsync_core::{ContentsUpdate, GraphSink, Notifier, TextEditor};

// Graph types
pub use jsonsync_engine::{Edge, GraphNode, NodeSize};

// Edit session state
pub use jsonsync_engine::EditState;

// Commands and results
pub use jsonsync_executor::{Command, Output};

// Errors
pub use jsonsync_core::SyncError;
pub use jsonsync_executor::Error;
