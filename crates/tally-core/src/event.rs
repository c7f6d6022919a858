//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Mouse entered widget bounds
    MouseEnter,
    /// Mouse left widget bounds
    MouseLeave,
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Key released
    KeyUp {
        /// Key released
        key: Key,
    },
    /// Text input received
    TextInput {
        /// Input text
        text: String,
    },
    /// Widget gained focus
    FocusIn,
    /// Widget lost focus
    FocusOut,
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left button
    Left,
    /// Right button
    Right,
    /// Middle button (wheel)
    Middle,
}

/// Keyboard keys the widgets respond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Enter / Return
    Enter,
    /// Space bar
    Space,
    /// Tab
    Tab,
    /// Backspace
    Backspace,
    /// Delete
    Delete,
    /// Escape
    Escape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_down_carries_position() {
        let e = Event::MouseDown {
            position: Point::new(50.0, 60.0),
            button: MouseButton::Left,
        };
        if let Event::MouseDown { position, button } = e {
            assert_eq!(position, Point::new(50.0, 60.0));
            assert_eq!(button, MouseButton::Left);
        } else {
            panic!("Expected MouseDown event");
        }
    }

    #[test]
    fn test_text_input() {
        let e = Event::TextInput {
            text: "5".to_string(),
        };
        if let Event::TextInput { text } = e {
            assert_eq!(text, "5");
        } else {
            panic!("Expected TextInput event");
        }
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let e = Event::KeyDown { key: Key::Enter };
        let json = serde_json::to_string(&e).expect("serialize");
        let back: Event = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, e);
    }
}
