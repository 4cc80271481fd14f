//! Command execution layer for jsonsync
//!
//! Hosts drive a synchronized document by sending [`Command`]s to an
//! [`Executor`] and reading back [`Output`]s, or through the typed
//! [`JsonSync`] handle built on top of it.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use jsonsync_core::SyncOptions;
//! use jsonsync_engine::{LogNotifier, MemoryEditor};
//! use jsonsync_executor::JsonSync;
//!
//! let doc = JsonSync::open(
//!     Arc::new(MemoryEditor::new(r#"{"user": {"name": "Alice"}}"#)),
//!     Arc::new(LogNotifier),
//!     SyncOptions::default(),
//! );
//! doc.select_path(r#"$["user"]"#).unwrap();
//! doc.begin_edit().unwrap();
//! doc.update_buffer(r#"{"name": "Bob"}"#).unwrap();
//! doc.save().unwrap();
//! assert!(doc.get_json().unwrap().contains("Bob"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api;
mod command;
mod convert;
mod error;
mod executor;
pub mod handlers;
mod output;

pub use api::JsonSync;
pub use command::Command;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;
