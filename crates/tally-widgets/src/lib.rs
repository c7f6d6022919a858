//! Widget implementations for the Tally counter.
//!
//! [`CounterWidget`] is the full single-page counter; the other widgets are
//! its building blocks and can be composed on their own.

pub mod accordion;
pub mod button;
pub mod counter;
pub mod counter_display;
pub mod step_input;
pub mod text;

pub use accordion::{Accordion, AccordionToggled};
pub use button::{Button, ButtonClicked};
pub use counter::CounterWidget;
pub use counter_display::{CopyRequested, CounterDisplay};
pub use step_input::{StepEdited, StepInput};
pub use text::Text;
