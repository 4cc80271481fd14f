//! In-memory text editor
//!
//! A [`TextEditor`] for hosts without a real editor component, and for tests.
//! It keeps a log of every write it received and counts the change
//! notifications a real editor would have raised.

use jsonsync_core::{ContentsUpdate, TextEditor};
use parking_lot::Mutex;

#[derive(Default)]
struct EditorState {
    contents: String,
    updates: Vec<ContentsUpdate>,
    pending_changes: usize,
}

/// Text editor backed by a string
#[derive(Default)]
pub struct MemoryEditor {
    state: Mutex<EditorState>,
}

impl MemoryEditor {
    /// Create an editor showing `contents`
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(EditorState {
                contents: contents.into(),
                ..EditorState::default()
            }),
        }
    }

    /// Simulate the user typing: replaces the text and raises a change
    /// notification
    pub fn type_text(&self, text: impl Into<String>) {
        let mut state = self.state.lock();
        state.contents = text.into();
        state.pending_changes += 1;
    }

    /// Number of change notifications raised since the last call, resetting
    /// the count
    pub fn take_change_notifications(&self) -> usize {
        std::mem::take(&mut self.state.lock().pending_changes)
    }

    /// Every write received through [`TextEditor::set_contents`], oldest first
    pub fn updates(&self) -> Vec<ContentsUpdate> {
        self.state.lock().updates.clone()
    }

    /// Most recent write received through [`TextEditor::set_contents`]
    pub fn last_update(&self) -> Option<ContentsUpdate> {
        self.state.lock().updates.last().cloned()
    }
}

impl TextEditor for MemoryEditor {
    fn contents(&self) -> String {
        self.state.lock().contents.clone()
    }

    fn set_contents(&self, update: ContentsUpdate) {
        let mut state = self.state.lock();
        state.contents = update.contents.clone();
        if !update.skip_update {
            state.pending_changes += 1;
        }
        state.updates.push(update);
    }
}
