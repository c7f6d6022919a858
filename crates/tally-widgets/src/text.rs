//! Static text widget for titles, captions, and hint items.

use serde::{Deserialize, Serialize};
use std::any::Any;
use tally_core::{
    widget::{AccessibleRole, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, FontWeight, Point, Rect, Size, TypeId, Widget,
};

/// Non-interactive text label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    content: String,
    /// Text style
    style: TextStyle,
    /// Accessible role (Heading for titles, Generic otherwise)
    role: AccessibleRole,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Text {
    /// Create a new text label.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::default(),
            role: AccessibleRole::Generic,
            bounds: Rect::default(),
        }
    }

    /// Create a heading label (bold, larger, Heading role).
    #[must_use]
    pub fn heading(content: impl Into<String>) -> Self {
        let mut text = Self::new(content);
        text.style.size = 30.0;
        text.style.weight = FontWeight::Bold;
        text.role = AccessibleRole::Heading;
        text
    }

    /// Set the font size.
    #[must_use]
    pub const fn font_size(mut self, size: f32) -> Self {
        self.style.size = size;
        self
    }

    /// Set the text color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    /// Set the font weight.
    #[must_use]
    pub const fn weight(mut self, weight: FontWeight) -> Self {
        self.style.weight = weight;
        self
    }

    /// Get the content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Estimate rendered size from content length.
    fn estimate_size(&self) -> Size {
        let char_width = self.style.size * 0.6;
        Size::new(
            self.content.chars().count() as f32 * char_width,
            self.style.size * 1.2,
        )
    }
}

impl Widget for Text {
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
        canvas.draw_text(
            &self.content,
            Point::new(self.bounds.x, self.bounds.y),
            &self.style,
        );
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.content)
    }

    fn accessible_role(&self) -> AccessibleRole {
        self.role
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::RecordingCanvas;

    #[test]
    fn test_text_new() {
        let t = Text::new("hello");
        assert_eq!(t.content(), "hello");
        assert_eq!(Widget::accessible_role(&t), AccessibleRole::Generic);
    }

    #[test]
    fn test_heading_style() {
        let t = Text::heading("Tally counter");
        assert_eq!(Widget::accessible_role(&t), AccessibleRole::Heading);
        assert_eq!(t.style.weight, FontWeight::Bold);
    }

    #[test]
    fn test_measure_scales_with_content() {
        let short = Text::new("ab");
        let long = Text::new("abcdefgh");
        let constraints = Constraints::unbounded();
        assert!(long.measure(constraints).width > short.measure(constraints).width);
    }

    #[test]
    fn test_paint_emits_content() {
        let mut t = Text::new("Step Value: 3");
        t.layout(Rect::new(0.0, 0.0, 100.0, 20.0));

        let mut canvas = RecordingCanvas::new();
        t.paint(&mut canvas);
        assert!(canvas.contains_text("Step Value: 3"));
    }

    #[test]
    fn test_events_ignored() {
        let mut t = Text::new("static");
        assert!(t.event(&Event::MouseEnter).is_none());
        assert!(!Widget::is_interactive(&t));
    }
}
