//! Notifier implementations

use jsonsync_core::Notifier;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Forwards notifications to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_success(&self, message: &str) {
        tracing::info!(target: "jsonsync::notify", "{}", message);
    }

    fn notify_error(&self, message: &str) {
        tracing::warn!(target: "jsonsync::notify", "{}", message);
    }
}

/// A notification captured by [`RecordingNotifier`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// Reported through `notify_success`
    Success(String),
    /// Reported through `notify_error`
    Error(String),
}

/// Keeps every notification in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications so far, oldest first
    pub fn events(&self) -> Vec<Notification> {
        self.events.lock().clone()
    }

    /// Most recent notification
    pub fn last(&self) -> Option<Notification> {
        self.events.lock().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.events
            .lock()
            .push(Notification::Success(message.to_string()));
    }

    fn notify_error(&self, message: &str) {
        self.events
            .lock()
            .push(Notification::Error(message.to_string()));
    }
}
