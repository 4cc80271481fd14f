//! Core types for jsonsync
//!
//! This crate defines the pieces shared by every layer:
//! - json: JsonPath addressing over `serde_json::Value`
//! - rows: NodeRow serialization for graph nodes
//! - merge: merge-on-save policy
//! - config: SyncOptions and AccessMode
//! - traits: editor, graph and notifier collaborators
//! - error: SyncError

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod json;
pub mod merge;
pub mod rows;
pub mod traits;

// Re-exports
pub use config::{AccessMode, SyncOptions};
pub use error::{Result, SyncError};
pub use json::{
    format, read_value_at, resolve_container, write_value_at, JsonPath, PathParseError,
    PathSegment, ResolvedContainer,
};
pub use merge::merge_values;
pub use rows::{rows_to_editable_text, text_to_rows, NodeRow, RowType};
pub use traits::{ContentsUpdate, GraphSink, Notifier, TextEditor};

/// JSON values are serde_json's tagged union
pub use serde_json::Value as JsonValue;
