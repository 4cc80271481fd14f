//! The command executor.

use std::sync::Arc;
use std::thread::{self, ThreadId};

use jsonsync_core::{Notifier, SyncOptions};
use jsonsync_engine::{DocumentStore, GraphModel, NodeEditSession};
use parking_lot::Mutex;

use crate::handlers::{document, node};
use crate::{Command, Error, Output, Result};

/// Dispatches [`Command`]s to the store, the graph and the edit session.
///
/// After every command, successful or not, the session is refreshed so its
/// buffer follows selection and document changes while the user is not
/// editing.
///
/// # Reentrancy
///
/// Commands are serialized; the store, graph, editor and notifier run while
/// the session lock is held. A collaborator that calls back into
/// [`Executor::execute`] from inside a command gets [`Error::Reentrant`]
/// instead of a deadlock. Calls from other threads wait their turn.
pub struct Executor {
    store: Arc<DocumentStore>,
    graph: Arc<GraphModel>,
    session: Mutex<NodeEditSession>,
    /// Thread currently running a command
    running_on: Mutex<Option<ThreadId>>,
    read_only: bool,
}

/// Records the running thread for as long as it lives
struct RunningGuard<'a>(&'a Mutex<Option<ThreadId>>);

impl<'a> RunningGuard<'a> {
    fn new(slot: &'a Mutex<Option<ThreadId>>) -> Self {
        *slot.lock() = Some(thread::current().id());
        RunningGuard(slot)
    }
}

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        *self.0.lock() = None;
    }
}

impl Executor {
    /// Create an executor over an existing store and graph.
    pub fn new(
        store: Arc<DocumentStore>,
        graph: Arc<GraphModel>,
        notifier: Arc<dyn Notifier>,
        options: SyncOptions,
    ) -> Self {
        let read_only = options.is_read_only();
        let session = NodeEditSession::new(store.clone(), graph.clone(), notifier, options);
        Self {
            store,
            graph,
            session: Mutex::new(session),
            running_on: Mutex::new(None),
            read_only,
        }
    }

    /// Execute a command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        tracing::trace!(target: "jsonsync::executor", command = name, "execute");

        if *self.running_on.lock() == Some(thread::current().id()) {
            tracing::warn!(target: "jsonsync::executor", command = name, "reentrant command rejected");
            return Err(Error::Reentrant {
                command: name.to_string(),
            });
        }

        let mut session = self.session.lock();
        let _running = RunningGuard::new(&self.running_on);
        let result = match cmd {
            // Document
            Command::GetJson => document::get_json(&self.store),
            Command::SetJson { json } => document::set_json(&self.store, self.read_only, json),
            Command::EditorChanged => document::editor_changed(&self.store),
            Command::Clear => document::clear(&self.store, self.read_only),

            // Selection
            Command::SelectNode { id } => node::select_node(&self.graph, id),
            Command::SelectPath { path } => node::select_path(&self.graph, path),
            Command::ClearSelection => node::clear_selection(&self.graph),
            Command::SelectedNode => node::selected_node(&self.graph),

            // Editing
            Command::BeginEdit => node::begin_edit(&mut session),
            Command::UpdateBuffer { text } => node::update_buffer(&mut session, text),
            Command::Save => node::save(&mut session),
            Command::Cancel => node::cancel(&mut session),
            Command::InlineSave { raw } => node::inline_save(&mut session, raw),
            Command::GetBuffer => node::get_buffer(&session),
            Command::PathLabel => node::path_label(&session),
        };
        session.refresh();

        if let Err(e) = &result {
            tracing::debug!(target: "jsonsync::executor", command = name, error = %e, "command failed");
        }
        result
    }

    /// The document store.
    pub fn store(&self) -> &Arc<DocumentStore> {
        &self.store
    }

    /// The graph model.
    pub fn graph(&self) -> &Arc<GraphModel> {
        &self.graph
    }
}
