//! jsonsync keeps a JSON document consistent between a text editor and a
//! graph of nodes, and lets the user edit one node at a time.
//!
//! ```
//! use std::sync::Arc;
//! use jsonsync::{LogNotifier, MemoryEditor, SyncOptions};
//!
//! let doc = jsonsync::open(
//!     Arc::new(MemoryEditor::new(r#"{"tags": ["a", "b"]}"#)),
//!     Arc::new(LogNotifier),
//!     SyncOptions::default(),
//! );
//! doc.select_path(r#"$["tags"][1]"#).unwrap();
//! doc.inline_save("c").unwrap();
//! assert!(doc.get_json().unwrap().contains("\"c\""));
//! ```

#![warn(missing_docs)]

use std::sync::Arc;

pub mod types;

pub use jsonsync_core::{json, merge, rows};
pub use jsonsync_engine::{
    registry, DocumentStore, GraphModel, LogNotifier, MemoryEditor, NodeEditSession,
    Notification, RecordingNotifier,
};
pub use jsonsync_executor::{Executor, JsonSync, Result};
pub use types::*;

/// Open a synchronized document over `editor`.
///
/// The document is seeded from the editor's contents (`{}` when they are
/// empty or not JSON) and the graph is built from it.
pub fn open(
    editor: Arc<dyn TextEditor>,
    notifier: Arc<dyn Notifier>,
    options: SyncOptions,
) -> JsonSync {
    JsonSync::open(editor, notifier, options)
}

/// Load [`SyncOptions`] from TOML text.
pub fn options_from_toml(text: &str) -> Result<SyncOptions> {
    Ok(SyncOptions::from_toml_str(text)?)
}
