//! Notification sink for user-facing toasts.
//!
//! The widget reports copy outcomes through the [`Notifier`] trait and never
//! depends on how notifications are displayed. [`NotificationLog`] is the
//! recording implementation used in tests.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Kind of notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    /// Positive outcome (green check style).
    Success,
    /// Failure outcome.
    Error,
}

/// A user-facing notification message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Message text
    pub message: String,
    /// Success or error
    pub kind: NotificationKind,
}

impl Notification {
    /// Create a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    /// Create an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Sink that receives notifications, fire-and-forget.
pub trait Notifier: Send + Sync {
    /// Deliver a notification. The caller never consumes a return value.
    fn notify(&mut self, notification: Notification);
}

/// Shared handle: lets a host keep a view on a sink it has handed to a
/// widget. Delivery on a poisoned lock is dropped, matching the
/// fire-and-forget contract.
impl<N: Notifier> Notifier for std::sync::Arc<std::sync::Mutex<N>> {
    fn notify(&mut self, notification: Notification) {
        if let Ok(mut inner) = self.lock() {
            inner.notify(notification);
        }
    }
}

/// Recording notifier that keeps every delivered notification.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// All notifications delivered so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Number of notifications delivered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been delivered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Notifier for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        self.entries.push(notification);
    }
}

/// Display defaults for toast notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastOptions {
    /// How long a toast stays visible, in milliseconds.
    pub duration_ms: u32,
    /// Toast background color.
    pub background: Color,
    /// Toast text color.
    pub text_color: Color,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            background: Color::from_hex("#363636").unwrap_or(Color::BLACK),
            text_color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_constructors() {
        let ok = Notification::success("Copied \"3\" to clipboard!");
        assert_eq!(ok.kind, NotificationKind::Success);
        assert_eq!(ok.message, "Copied \"3\" to clipboard!");

        let err = Notification::error("Failed to copy to clipboard");
        assert_eq!(err.kind, NotificationKind::Error);
    }

    #[test]
    fn test_log_records_in_order() {
        let mut log = NotificationLog::new();
        assert!(log.is_empty());

        log.notify(Notification::success("first"));
        log.notify(Notification::error("second"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].message, "first");
        assert_eq!(log.entries()[1].kind, NotificationKind::Error);
    }

    #[test]
    fn test_toast_defaults() {
        let options = ToastOptions::default();
        assert_eq!(options.duration_ms, 2000);
        assert_eq!(options.text_color, Color::WHITE);
        assert_eq!(options.background.to_hex(), "#363636");
    }
}
