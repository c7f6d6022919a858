//! Collapsible hint section.
//!
//! A header row toggles visibility of a bullet list. The open flag is purely
//! presentational; it gates painting and nothing else.

use serde::{Deserialize, Serialize};
use std::any::Any;
use tally_core::{
    widget::{AccessibleRole, FontWeight, LayoutResult, TextStyle},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TypeId, Widget,
};

/// Message emitted when the header is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionToggled {
    /// The new open state
    pub open: bool,
}

/// Collapsible section with a header and a list of hint lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accordion {
    /// Header title
    title: String,
    /// Hint lines shown while open
    items: Vec<String>,
    /// Whether the section is expanded
    open: bool,
    /// Section background color
    background: Color,
    /// Header height
    header_height: f32,
    /// Height per hint line
    item_height: f32,
    /// Inner padding
    padding: f32,
    /// Text style for items
    item_style: TextStyle,
    /// Current pressed state of the header
    #[serde(skip)]
    pressed: bool,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for Accordion {
    fn default() -> Self {
        Self {
            title: String::new(),
            items: Vec::new(),
            open: false,
            background: Color::from_hex("#eff6ff").unwrap_or(Color::WHITE),
            header_height: 48.0,
            item_height: 20.0,
            padding: 16.0,
            item_style: TextStyle {
                size: 12.0,
                ..Default::default()
            },
            pressed: false,
            bounds: Rect::default(),
        }
    }
}

impl Accordion {
    /// Create a closed accordion with a header title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the hint lines.
    #[must_use]
    pub fn items(mut self, items: Vec<String>) -> Self {
        self.items = items;
        self
    }

    /// Add one hint line.
    #[must_use]
    pub fn item(mut self, item: impl Into<String>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Whether the section is expanded.
    #[must_use]
    pub const fn open(&self) -> bool {
        self.open
    }

    /// Set the open state (the owner syncs this from its store).
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// The hint lines.
    #[must_use]
    pub fn item_texts(&self) -> &[String] {
        &self.items
    }

    /// Header hit area: the top strip of the section.
    fn header_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.header_height,
        )
    }

    fn toggled(&mut self) -> Option<Box<dyn Any + Send>> {
        self.open = !self.open;
        Some(Box::new(AccordionToggled { open: self.open }))
    }
}

impl Widget for Accordion {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let body = if self.open {
            self.items.len() as f32 * self.item_height + self.padding
        } else {
            0.0
        };
        constraints.constrain(Size::new(
            constraints.max_width.min(400.0),
            self.header_height + body,
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.background);

        // Header: title left, expand/collapse indicator right.
        let header = self.header_rect();
        let title_style = TextStyle {
            size: 14.0,
            weight: FontWeight::Semibold,
            ..Default::default()
        };
        canvas.draw_text(
            &self.title,
            Point::new(header.x + self.padding, header.y + self.padding),
            &title_style,
        );
        let indicator = if self.open { "−" } else { "+" };
        canvas.draw_text(
            indicator,
            Point::new(
                header.x + header.width - self.padding - title_style.size,
                header.y + self.padding,
            ),
            &title_style,
        );

        if !self.open {
            return;
        }

        // Bullet list, only while open.
        for (i, item) in self.items.iter().enumerate() {
            let y = header.y + header.height + i as f32 * self.item_height;
            canvas.draw_text(
                &format!("• {item}"),
                Point::new(self.bounds.x + self.padding, y),
                &self.item_style,
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.header_rect().contains_point(position) {
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

                if was_pressed && self.header_rect().contains_point(position) {
                    self.toggled()
                } else {
                    None
                }
            }
            Event::MouseLeave => {
                self.pressed = false;
                None
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
                    self.toggled()
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

    fn is_focusable(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::List
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::RecordingCanvas;

    fn hint_accordion() -> Accordion {
        let mut accordion = Accordion::new("Hints (click to see)")
            .item("Click the counter number to copy it to the clipboard")
            .item("The step value controls how much is added or removed");
        accordion.layout(Rect::new(0.0, 0.0, 400.0, 48.0));
        accordion
    }

    fn click_header(accordion: &mut Accordion) -> Option<Box<dyn Any + Send>> {
        let position = Point::new(100.0, 24.0);
        accordion.event(&Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        accordion.event(&Event::MouseUp {
            position,
            button: MouseButton::Left,
        })
    }

    #[test]
    fn test_header_click_toggles_and_emits() {
        let mut accordion = hint_accordion();
        assert!(!accordion.open());

        let msg = click_header(&mut accordion);
        let toggled = msg.and_then(|m| m.downcast_ref::<AccordionToggled>().copied());
        assert_eq!(toggled, Some(AccordionToggled { open: true }));
        assert!(accordion.open());
    }

    #[test]
    fn test_double_toggle_is_involution() {
        let mut accordion = hint_accordion();
        click_header(&mut accordion);
        click_header(&mut accordion);
        assert!(!accordion.open());
    }

    #[test]
    fn test_click_below_header_does_not_toggle() {
        let mut accordion = hint_accordion();
        accordion.set_open(true);
        accordion.layout(Rect::new(0.0, 0.0, 400.0, 120.0));

        let position = Point::new(100.0, 80.0);
        accordion.event(&Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        assert!(accordion
            .event(&Event::MouseUp {
                position,
                button: MouseButton::Left,
            })
            .is_none());
        assert!(accordion.open());
    }

    #[test]
    fn test_items_painted_only_while_open() {
        let mut accordion = hint_accordion();

        let mut canvas = RecordingCanvas::new();
        accordion.paint(&mut canvas);
        assert!(!canvas
            .texts()
            .any(|text| text.contains("counter number")));
        assert!(canvas.contains_text("+"));

        accordion.set_open(true);
        canvas.clear();
        accordion.paint(&mut canvas);
        assert!(canvas.texts().any(|text| text.contains("counter number")));
        assert!(canvas.contains_text("−"));
    }

    #[test]
    fn test_measure_expands_when_open() {
        let accordion = hint_accordion();
        let closed = accordion.measure(Constraints::unbounded());

        let mut open = hint_accordion();
        open.set_open(true);
        let expanded = open.measure(Constraints::unbounded());

        assert!(expanded.height > closed.height);
    }
}
