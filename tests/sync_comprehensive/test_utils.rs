//! Shared helpers for the comprehensive suite.

use std::sync::Arc;

use jsonsync::{JsonSync, MemoryEditor, Notification, RecordingNotifier, SyncOptions};
use serde_json::Value;

/// A document with handles on its in-memory collaborators.
pub struct TestDoc {
    pub doc: JsonSync,
    pub editor: Arc<MemoryEditor>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestDoc {
    pub fn open(initial: &str) -> Self {
        Self::with_options(initial, SyncOptions::default())
    }

    pub fn with_options(initial: &str, options: SyncOptions) -> Self {
        init_tracing();
        let editor = Arc::new(MemoryEditor::new(initial));
        let notifier = Arc::new(RecordingNotifier::new());
        let doc = jsonsync::open(editor.clone(), notifier.clone(), options);
        Self {
            doc,
            editor,
            notifier,
        }
    }

    /// Parsed document text.
    pub fn value(&self) -> Value {
        serde_json::from_str(&self.doc.get_json().unwrap()).unwrap()
    }

    /// Select `path`, edit its buffer to `text` and save.
    pub fn edit(&self, path: &str, text: &str) -> jsonsync::Result<Value> {
        self.doc.select_path(path)?;
        self.doc.begin_edit()?;
        self.doc.update_buffer(text)?;
        self.doc.save()
    }

    pub fn last_notification(&self) -> Option<Notification> {
        self.notifier.last()
    }
}

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}
