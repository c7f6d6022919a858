//! Clipboard capability for copying the count.
//!
//! The core never talks to a platform clipboard directly. It depends on the
//! [`Clipboard`] trait, a two-outcome contract (`write_text` succeeds or
//! fails), so the state machine stays testable without a real clipboard.

/// Result of a clipboard operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardResult {
    /// Operation succeeded.
    Success,
    /// Clipboard is not available on this platform.
    Unavailable,
    /// Permission denied.
    PermissionDenied,
    /// Other error.
    Error(String),
}

impl ClipboardResult {
    /// Check if the operation was successful.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Check if the operation failed.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !self.is_success()
    }
}

/// Injected clipboard capability.
pub trait Clipboard: Send + Sync {
    /// Write plain text to the clipboard.
    fn write_text(&mut self, text: &str) -> ClipboardResult;
}

/// Shared handle: lets a host keep a view on a clipboard it has handed to a
/// widget.
impl<C: Clipboard> Clipboard for std::sync::Arc<std::sync::Mutex<C>> {
    fn write_text(&mut self, text: &str) -> ClipboardResult {
        match self.lock() {
            Ok(mut inner) => inner.write_text(text),
            Err(_) => ClipboardResult::Error("clipboard lock poisoned".to_string()),
        }
    }
}

/// How an [`InMemoryClipboard`] responds to writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Availability {
    Available,
    Unavailable,
    PermissionDenied,
}

/// In-memory clipboard implementation.
///
/// Stores the last written text so callers (and tests) can observe writes.
/// The unavailable and permission-denied constructors simulate the platform
/// failure modes.
#[derive(Debug)]
pub struct InMemoryClipboard {
    contents: Option<String>,
    availability: Availability,
}

impl InMemoryClipboard {
    /// Create an available clipboard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            contents: None,
            availability: Availability::Available,
        }
    }

    /// Create a clipboard that reports [`ClipboardResult::Unavailable`].
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            contents: None,
            availability: Availability::Unavailable,
        }
    }

    /// Create a clipboard that reports [`ClipboardResult::PermissionDenied`].
    #[must_use]
    pub const fn permission_denied() -> Self {
        Self {
            contents: None,
            availability: Availability::PermissionDenied,
        }
    }

    /// Get the last written text, if any.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Default for InMemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for InMemoryClipboard {
    fn write_text(&mut self, text: &str) -> ClipboardResult {
        match self.availability {
            Availability::Available => {
                self.contents = Some(text.to_string());
                ClipboardResult::Success
            }
            Availability::Unavailable => ClipboardResult::Unavailable,
            Availability::PermissionDenied => ClipboardResult::PermissionDenied,
        }
    }
}
