//! Notification sink for QAnalyzer.
//!
//! The history registry reports every mutating action (add/restore/clear) as
//! a human-readable title + description pair. The host environment decides
//! where those go: the production sink routes them through `log`, tests use
//! the recording sink to assert on emitted notifications.

use std::sync::{Arc, Mutex};

/// A single user-visible status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Trait defining where notifications are delivered.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// Production sink: routes notifications through the `log` crate.
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: Notification) {
        log::info!("{}: {}", notification.title, notification.description);
    }
}

/// Recording sink for tests: buffers notifications behind a shared handle so
/// the test can keep a clone of the buffer while the sink is owned elsewhere.
pub struct RecordingSink {
    buffer: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            buffer: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a handle to the shared notification buffer.
    pub fn handle(&self) -> Arc<Mutex<Vec<Notification>>> {
        self.buffer.clone()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        if let Ok(mut buf) = self.buffer.lock() {
            buf.push(notification);
        }
    }
}
