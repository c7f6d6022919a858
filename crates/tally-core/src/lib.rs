//! Core types and state model for the Tally counter widget.
//!
//! This crate provides the foundations the widget crate builds on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with WCAG contrast calculations
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`]
//! - The Elm-style state model: [`CounterState`], [`CounterMessage`],
//!   [`Command`], [`Store`]
//! - Injected capabilities: [`Clipboard`] and [`Notifier`]

mod canvas;
mod clipboard;
mod color;
mod constraints;
mod event;
mod geometry;
mod notify;
mod state;
mod theme;
pub mod widget;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use clipboard::{Clipboard, ClipboardResult, InMemoryClipboard};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use notify::{Notification, NotificationKind, NotificationLog, Notifier, ToastOptions};
pub use state::{parse_step, Command, CounterMessage, CounterState, Sign, State, Store};
pub use theme::Theme;
pub use widget::{
    AccessibleRole, Canvas, FontStyle, FontWeight, LayoutResult, TextStyle, TypeId, Widget,
    WidgetId,
};
