//! Notification sink for user-visible messages.
//!
//! The cart store reports each failed operation exactly once through a
//! [`Notifier`]. How the message reaches the user (toast, terminal, log) is
//! up to the front end.

use std::sync::{Mutex, PoisonError};

/// Receives user-facing error messages.
pub trait Notifier: Send + Sync {
    /// Surface an error message to the user.
    fn error(&self, message: &str);
}

/// Emits notifications as `tracing` warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::warn!(target: "rocketshoes::notify", "{message}");
    }
}

/// Keeps every notification in memory, in order.
///
/// Useful for front ends that render notifications in batches, and for tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return all messages received so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.error("first");
        notifier.error("second");

        assert_eq!(notifier.messages(), vec!["first", "second"]);
        assert_eq!(notifier.take().len(), 2);
        assert!(notifier.messages().is_empty());
    }
}
