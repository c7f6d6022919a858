//! Numeric entry field for the step value.
//!
//! The field edits a raw text buffer and reports every edit uncoerced; the
//! state layer owns the falsy-to-one coercion, so the widget never decides
//! what a valid step is.

use serde::{Deserialize, Serialize};
use std::any::Any;
use tally_core::{
    widget::{AccessibleRole, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TypeId, Widget,
};

/// Message emitted on every edit, carrying the raw buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepEdited {
    /// Uncoerced field contents
    pub raw: String,
}

/// Numeric entry field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepInput {
    /// Current field contents
    value: String,
    /// Label shown above the field
    label: String,
    /// Text style
    text_style: TextStyle,
    /// Background color
    background: Color,
    /// Border color
    border_color: Color,
    /// Border color while focused
    focus_border_color: Color,
    /// Padding inside the field
    padding: f32,
    /// Whether focused
    #[serde(skip)]
    focused: bool,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for StepInput {
    fn default() -> Self {
        Self {
            value: "1".to_string(),
            label: "Step Value".to_string(),
            text_style: TextStyle::default(),
            background: Color::WHITE,
            border_color: Color::rgb(0.8, 0.8, 0.8),
            focus_border_color: Color::from_hex("#3b82f6").unwrap_or(Color::BLACK),
            padding: 8.0,
            focused: false,
            bounds: Rect::default(),
        }
    }
}

impl StepInput {
    /// Create a step input showing "1".
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Current field contents.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the field contents (the owner syncs the committed step back).
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Whether the field has keyboard focus.
    #[must_use]
    pub const fn focused(&self) -> bool {
        self.focused
    }

    /// Characters a numeric field accepts: digits anywhere, a minus sign
    /// only at the front.
    fn accepts(&self, ch: char) -> bool {
        ch.is_ascii_digit() || (ch == '-' && self.value.is_empty())
    }

    fn edited(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(StepEdited {
            raw: self.value.clone(),
        }))
    }
}

impl Widget for StepInput {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let label_height = self.text_style.size * 1.2 + 4.0;
        let field_height = self.text_style.size + self.padding * 2.0;
        constraints.constrain(Size::new(200.0, label_height + field_height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let label_height = self.text_style.size * 1.2 + 4.0;

        // Label row, e.g. "Step Value: 3"
        canvas.draw_text(
            &format!("{}: {}", self.label, self.value),
            Point::new(self.bounds.x, self.bounds.y),
            &self.text_style,
        );

        // Entry field below the label
        let field = Rect::new(
            self.bounds.x,
            self.bounds.y + label_height,
            self.bounds.width,
            (self.bounds.height - label_height).max(0.0),
        );
        canvas.fill_rect(field, self.background);
        let border = if self.focused {
            self.focus_border_color
        } else {
            self.border_color
        };
        canvas.stroke_rect(field, border, 1.0);
        canvas.draw_text(
            &self.value,
            Point::new(field.x + self.padding, field.y + self.padding),
            &self.text_style,
        );
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown { position, .. } => {
                self.focused = self.bounds.contains_point(position);
                None
            }
            Event::FocusIn => {
                self.focused = true;
                None
            }
            Event::FocusOut => {
                self.focused = false;
                None
            }
            Event::TextInput { text } if self.focused => {
                let mut changed = false;
                for ch in text.chars() {
                    if self.accepts(ch) {
                        self.value.push(ch);
                        changed = true;
                    }
                }
                if changed {
                    self.edited()
                } else {
                    None
                }
            }
            Event::KeyDown { key: Key::Backspace } if self.focused => {
                if self.value.pop().is_some() {
                    self.edited()
                } else {
                    None
                }
            }
            Event::KeyDown { key: Key::Delete } if self.focused => {
                if self.value.is_empty() {
                    None
                } else {
                    self.value.clear();
                    self.edited()
                }
            }
            _ => None,
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.label)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::TextInput
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
