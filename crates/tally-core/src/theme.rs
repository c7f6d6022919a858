//! Theme palette for the counter widget.

use crate::color::Color;
use crate::state::Sign;
use serde::{Deserialize, Serialize};

/// Colors used by the counter widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Count color when positive
    pub positive: Color,
    /// Count color when negative
    pub negative: Color,
    /// Count color at zero
    pub neutral: Color,
    /// Page background. Host-facing: the embedding page paints this behind
    /// the widget, which only paints its own surface.
    pub background: Color,
    /// Card surface behind the widget
    pub surface: Color,
    /// Increment button background
    pub increment: Color,
    /// Decrement button background
    pub decrement: Color,
    /// Reset button background
    pub reset: Color,
    /// Text color on buttons
    pub on_button: Color,
    /// Hint accordion background
    pub hint_background: Color,
    /// Hyperlink color. Host-facing: for links in the page chrome around the
    /// widget.
    pub link: Color,
}

impl Theme {
    /// The light palette.
    #[must_use]
    pub fn light() -> Self {
        let hex = |s| Color::from_hex(s).unwrap_or(Color::BLACK);
        Self {
            positive: hex("#16a34a"),
            negative: hex("#dc2626"),
            neutral: hex("#1f2937"),
            background: hex("#f9fafb"),
            surface: Color::WHITE,
            increment: hex("#22c55e"),
            decrement: hex("#ef4444"),
            reset: hex("#6b7280"),
            on_button: Color::WHITE,
            hint_background: hex("#eff6ff"),
            link: hex("#3b82f6"),
        }
    }

    /// Color for the count readout, derived from its sign.
    #[must_use]
    pub const fn count_color(&self, sign: Sign) -> Color {
        match sign {
            Sign::Negative => self.negative,
            Sign::Positive => self.positive,
            Sign::Neutral => self.neutral,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
