//! Typed API over the executor.
//!
//! [`JsonSync`] wraps an [`Executor`] and turns each [`Output`] back into a
//! plain Rust value, so hosts do not match on outputs themselves.

mod document;
mod node;

use std::sync::Arc;

use jsonsync_core::{Notifier, SyncOptions, TextEditor};
use jsonsync_engine::{DocumentStore, GraphModel};

use crate::{Error, Executor, Output};

/// Handle to a synchronized document.
pub struct JsonSync {
    executor: Executor,
}

impl JsonSync {
    /// Wire a graph, a store seeded from `editor` and an edit session.
    pub fn open(
        editor: Arc<dyn TextEditor>,
        notifier: Arc<dyn Notifier>,
        options: SyncOptions,
    ) -> Self {
        let graph = Arc::new(GraphModel::new());
        let store = Arc::new(DocumentStore::new(graph.clone(), editor));
        tracing::debug!(
            target: "jsonsync::api",
            read_only = options.is_read_only(),
            strict_paths = options.strict_paths,
            "document opened"
        );
        Self {
            executor: Executor::new(store, graph, notifier, options),
        }
    }

    /// The underlying executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// The document store.
    pub fn store(&self) -> &Arc<DocumentStore> {
        self.executor.store()
    }

    /// The graph model.
    pub fn graph(&self) -> &Arc<GraphModel> {
        self.executor.graph()
    }

    /// Publish the store as the process-wide diagnostic handle.
    pub fn publish(&self) {
        self.store().publish();
    }
}

fn unexpected(command: &str, output: &Output) -> Error {
    Error::Internal {
        reason: format!("Unexpected output for {}: {:?}", command, output),
    }
}
