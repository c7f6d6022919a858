//! Button widget for user interactions.

use serde::{Deserialize, Serialize};
use std::any::Any;
use tally_core::{
    widget::{AccessibleRole, FontWeight, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TypeId, Widget,
};

/// Message emitted when a button is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonClicked;

/// Button widget with label and click handling.
#[derive(Clone, Serialize, Deserialize)]
pub struct Button {
    /// Button label
    label: String,
    /// Background color (normal state)
    background: Color,
    /// Background color (hover state)
    background_hover: Color,
    /// Text color
    text_color: Color,
    /// Padding around the label
    padding: f32,
    /// Font size
    font_size: f32,
    /// Whether button is disabled
    disabled: bool,
    /// Test ID
    test_id_value: Option<String>,
    /// Current hover state
    #[serde(skip)]
    hovered: bool,
    /// Current pressed state
    #[serde(skip)]
    pressed: bool,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Button {
    /// Create a new button with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            background: Color::from_hex("#6b7280").unwrap_or(Color::BLACK),
            background_hover: Color::from_hex("#4b5563").unwrap_or(Color::BLACK),
            text_color: Color::WHITE,
            padding: 12.0,
            font_size: 14.0,
            disabled: false,
            test_id_value: None,
            hovered: false,
            pressed: false,
            bounds: Rect::default(),
        }
    }

    /// Set background color.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set hover background color.
    #[must_use]
    pub const fn background_hover(mut self, color: Color) -> Self {
        self.background_hover = color;
        self
    }

    /// Set text color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set padding.
    #[must_use]
    pub const fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Background color for the current interaction state.
    fn current_background(&self) -> Color {
        if self.disabled {
            let gray = (self.background.r + self.background.g + self.background.b) / 3.0;
            Color::rgb(gray, gray, gray)
        } else if self.hovered || self.pressed {
            self.background_hover
        } else {
            self.background
        }
    }

    /// Estimate label size.
    fn estimate_text_size(&self) -> Size {
        let char_width = self.font_size * 0.6;
        Size::new(
            self.label.chars().count() as f32 * char_width,
            self.font_size * 1.2,
        )
    }
}

impl Widget for Button {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let text_size = self.estimate_text_size();
        constraints.constrain(Size::new(
            text_size.width + self.padding * 2.0,
            text_size.height + self.padding * 2.0,
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.current_background());

        let text_size = self.estimate_text_size();
        let text_pos = Point::new(
            self.bounds.x + (self.bounds.width - text_size.width) / 2.0,
            self.bounds.y + (self.bounds.height - text_size.height) / 2.0,
        );
        let style = TextStyle {
            size: self.font_size,
            color: if self.disabled {
                Color::rgb(0.7, 0.7, 0.7)
            } else {
                self.text_color
            },
            weight: FontWeight::Medium,
            ..Default::default()
        };
        canvas.draw_text(&self.label, text_pos, &style);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }

        match event {
            Event::MouseEnter => {
                self.hovered = true;
                None
            }
            Event::MouseLeave => {
                self.hovered = false;
                self.pressed = false;
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.bounds.contains_point(position) {
                    self.pressed = true;
                }
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let was_pressed = self.pressed;
                self.pressed = false;

                if was_pressed && self.bounds.contains_point(position) {
                    Some(Box::new(ButtonClicked))
                } else {
                    None
                }
            }
            Event::KeyDown {
                key: Key::Enter | Key::Space,
            } => {
                self.pressed = true;
                None
            }
            Event::KeyUp {
                key: Key::Enter | Key::Space,
            } => {
                if self.pressed {
                    self.pressed = false;
                    Some(Box::new(ButtonClicked))
                } else {
                    None
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
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.label)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Button
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
