//! The large count readout.
//!
//! Shows the current count in the sign color; clicking the number requests a
//! copy to the clipboard, mirroring a copy-on-click readout.

use serde::{Deserialize, Serialize};
use std::any::Any;
use tally_core::{
    widget::{AccessibleRole, FontWeight, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, MouseButton, Point, Rect, Size, TypeId, Widget,
};

/// Message emitted when the readout is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyRequested;

/// Clickable count readout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterDisplay {
    /// Count being displayed
    value: i64,
    /// Display color (the sign color, set by the owner)
    color: Color,
    /// Font size
    font_size: f32,
    /// Current hover state (affordance for "click to copy")
    #[serde(skip)]
    hovered: bool,
    /// Current pressed state
    #[serde(skip)]
    pressed: bool,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for CounterDisplay {
    fn default() -> Self {
        Self {
            value: 0,
            color: Color::BLACK,
            font_size: 60.0,
            hovered: false,
            pressed: false,
            bounds: Rect::default(),
        }
    }
}

impl CounterDisplay {
    /// Create a readout showing zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the displayed value.
    pub fn set_value(&mut self, value: i64) {
        self.value = value;
    }

    /// Set the display color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Currently displayed value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Whether the pointer is over the readout.
    #[must_use]
    pub const fn hovered(&self) -> bool {
        self.hovered
    }

    fn display_text(&self) -> String {
        self.value.to_string()
    }

    fn estimate_size(&self) -> Size {
        let char_width = self.font_size * 0.6;
        Size::new(
            self.display_text().chars().count() as f32 * char_width,
            self.font_size * 1.2,
        )
    }
}

impl Widget for CounterDisplay {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.estimate_size())
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let text = self.display_text();
        let text_size = self.estimate_size();
        let position = Point::new(
            self.bounds.x + (self.bounds.width - text_size.width) / 2.0,
            self.bounds.y + (self.bounds.height - text_size.height) / 2.0,
        );
        let style = TextStyle {
            size: self.font_size,
            color: self.color,
            weight: FontWeight::Bold,
            ..Default::default()
        };
        canvas.draw_text(&text, position, &style);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
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
                    Some(Box::new(CopyRequested))
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
        true
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Button
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{DrawCommand, RecordingCanvas, Sign, Theme};

    fn click(display: &mut CounterDisplay, position: Point) -> Option<Box<dyn Any + Send>> {
        display.event(&Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        display.event(&Event::MouseUp {
            position,
            button: MouseButton::Left,
        })
    }

    #[test]
    fn test_click_requests_copy() {
        let mut display = CounterDisplay::new();
        display.layout(Rect::new(0.0, 0.0, 200.0, 80.0));

        let msg = click(&mut display, Point::new(100.0, 40.0));
        assert!(msg.is_some_and(|m| m.downcast_ref::<CopyRequested>().is_some()));
    }

    #[test]
    fn test_click_outside_does_nothing() {
        let mut display = CounterDisplay::new();
        display.layout(Rect::new(0.0, 0.0, 200.0, 80.0));

        assert!(click(&mut display, Point::new(300.0, 40.0)).is_none());
    }

    #[test]
    fn test_hover_tracking() {
        let mut display = CounterDisplay::new();
        display.event(&Event::MouseEnter);
        assert!(display.hovered());
        display.event(&Event::MouseLeave);
        assert!(!display.hovered());
    }

    #[test]
    fn test_paints_value_in_given_color() {
        let theme = Theme::default();
        let mut display = CounterDisplay::new();
        display.set_value(-3);
        display.set_color(theme.count_color(Sign::of(-3)));
        display.layout(Rect::new(0.0, 0.0, 200.0, 80.0));

        let mut canvas = RecordingCanvas::new();
        display.paint(&mut canvas);

        assert!(canvas.contains_text("-3"));
        let Some(DrawCommand::Text { style, .. }) = canvas.commands().first() else {
            panic!("Expected a text command");
        };
        assert_eq!(style.color, theme.negative);
    }

    #[test]
    fn test_measure_grows_with_digits() {
        let mut narrow = CounterDisplay::new();
        narrow.set_value(1);
        let mut wide = CounterDisplay::new();
        wide.set_value(-1_000_000);

        let constraints = Constraints::unbounded();
        assert!(wide.measure(constraints).width > narrow.measure(constraints).width);
    }
}
