//! The composite counter widget.
//!
//! `CounterWidget` owns the store, the injected clipboard and notification
//! capabilities, and the child widgets. Child messages are translated into
//! [`CounterMessage`] dispatches; commands returned by the store are executed
//! here, synchronously, one event at a time.

use crate::accordion::{Accordion, AccordionToggled};
use crate::button::{Button, ButtonClicked};
use crate::counter_display::{CounterDisplay, CopyRequested};
use crate::step_input::{StepEdited, StepInput};
use crate::text::Text;
use std::any::Any;
use tally_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Clipboard, Command, Constraints, CounterMessage, CounterState, Event, Notifier, Rect,
    Sign, Size, Store, Theme, TypeId, Widget,
};

const PADDING: f32 = 16.0;
const GAP: f32 = 12.0;
const DISPLAY_HEIGHT: f32 = 72.0;
const BUTTON_HEIGHT: f32 = 40.0;

/// Default hint lines for the accordion.
fn default_hints() -> Vec<String> {
    [
        "Click the counter number to copy it to the clipboard",
        "If you accidentally reset, raise the step to climb back quickly",
        "If you clicked too many times, you can always decrement back",
        "The step value controls how much is incremented or decremented",
    ]
    .map(String::from)
    .to_vec()
}

/// Single-page counter: count readout, −/reset/+ buttons, step entry, and a
/// hint accordion.
///
/// # Examples
///
/// ```
/// use tally_core::{InMemoryClipboard, NotificationLog, Sign};
/// use tally_widgets::CounterWidget;
///
/// let mut counter = CounterWidget::new(InMemoryClipboard::new(), NotificationLog::new());
/// counter.set_step("3");
/// counter.decrement();
/// assert_eq!(counter.count(), -3);
/// assert_eq!(counter.sign(), Sign::Negative);
/// ```
pub struct CounterWidget {
    store: Store<CounterState>,
    theme: Theme,
    clipboard: Box<dyn Clipboard>,
    notifier: Box<dyn Notifier>,
    title: Text,
    display: CounterDisplay,
    decrement_button: Button,
    reset_button: Button,
    increment_button: Button,
    step_input: StepInput,
    hints: Accordion,
    bounds: Rect,
}

impl CounterWidget {
    /// Create a counter at zero with the light theme and default hints.
    #[must_use]
    pub fn new(clipboard: impl Clipboard + 'static, notifier: impl Notifier + 'static) -> Self {
        let theme = Theme::light();
        let mut widget = Self {
            store: Store::new(CounterState::default()),
            title: Text::heading("Tally counter"),
            display: CounterDisplay::new(),
            decrement_button: Button::new("- Decrement")
                .background(theme.decrement)
                .background_hover(theme.negative)
                .text_color(theme.on_button)
                .with_test_id("decrement"),
            reset_button: Button::new("Reset")
                .background(theme.reset)
                .text_color(theme.on_button)
                .with_test_id("reset"),
            increment_button: Button::new("+ Increment")
                .background(theme.increment)
                .background_hover(theme.positive)
                .text_color(theme.on_button)
                .with_test_id("increment"),
            step_input: StepInput::new(),
            hints: Accordion::new("Hint list (click to see hints)")
                .items(default_hints())
                .background(theme.hint_background),
            clipboard: Box::new(clipboard),
            notifier: Box::new(notifier),
            theme,
            bounds: Rect::default(),
        };
        widget.sync_children();
        widget
    }

    /// Replace the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self.sync_children();
        self
    }

    /// Replace the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Text::heading(title);
        self
    }

    /// Current count.
    #[must_use]
    pub const fn count(&self) -> i64 {
        self.store.state().count()
    }

    /// Current step.
    #[must_use]
    pub const fn step(&self) -> i64 {
        self.store.state().step()
    }

    /// Whether the hint accordion is expanded.
    #[must_use]
    pub const fn hints_open(&self) -> bool {
        self.store.state().hints_open()
    }

    /// Sign of the current count.
    #[must_use]
    pub const fn sign(&self) -> Sign {
        self.store.state().sign()
    }

    /// Current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &CounterState {
        self.store.state()
    }

    /// Subscribe to state changes (the rendering boundary: hosts re-render
    /// on every callback).
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&CounterState) + Send + Sync + 'static,
    {
        self.store.subscribe(callback);
    }

    /// Add the step to the count.
    pub fn increment(&mut self) {
        self.process(CounterMessage::Increment);
    }

    /// Subtract the step from the count.
    pub fn decrement(&mut self) {
        self.process(CounterMessage::Decrement);
    }

    /// Set the count back to zero.
    pub fn reset(&mut self) {
        self.process(CounterMessage::Reset);
    }

    /// Set the step from raw input. Zero and unparseable input become 1.
    pub fn set_step(&mut self, raw: &str) {
        self.process(CounterMessage::SetStep(raw.to_string()));
    }

    /// Expand or collapse the hint accordion.
    pub fn toggle_hints(&mut self) {
        self.process(CounterMessage::ToggleHints);
    }

    /// Copy the count to the clipboard and report the outcome through the
    /// notification sink. Failure never mutates state.
    pub fn copy_count(&mut self) {
        self.process(CounterMessage::CopyRequested);
    }

    /// Dispatch a message, run the resulting commands, and refresh children.
    fn process(&mut self, msg: CounterMessage) {
        let cmd = self.store.dispatch(msg);
        self.run_command(cmd);
        self.sync_children();
    }

    /// Execute a command against the injected capabilities. Clipboard
    /// outcomes feed back into the store as `CopyFinished`.
    fn run_command(&mut self, cmd: Command) {
        match cmd {
            Command::None => {}
            Command::Batch(cmds) => {
                for cmd in cmds {
                    self.run_command(cmd);
                }
            }
            Command::WriteClipboard { text } => {
                let result = self.clipboard.write_text(&text);
                let followup = self.store.dispatch(CounterMessage::CopyFinished { text, result });
                self.run_command(followup);
            }
            Command::Notify(notification) => self.notifier.notify(notification),
        }
    }

    /// Push state into the presentation children.
    fn sync_children(&mut self) {
        let state = self.store.state();
        self.display.set_value(state.count());
        self.display.set_color(self.theme.count_color(state.sign()));
        self.step_input.set_value(state.step().to_string());
        self.hints.set_open(state.hints_open());
    }
}

impl Widget for CounterWidget {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = constraints.max_width.min(448.0);
        let inner = Constraints::loose(Size::new(width - PADDING * 2.0, f32::INFINITY));

        let height = PADDING
            + self.title.measure(inner).height
            + GAP
            + DISPLAY_HEIGHT
            + GAP
            + BUTTON_HEIGHT
            + GAP
            + self.step_input.measure(inner).height
            + GAP
            + self.hints.measure(inner).height
            + PADDING;

        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;

        let x = bounds.x + PADDING;
        let width = (bounds.width - PADDING * 2.0).max(0.0);
        let inner = Constraints::loose(Size::new(width, f32::INFINITY));
        let mut y = bounds.y + PADDING;

        let title_height = self.title.measure(inner).height;
        self.title.layout(Rect::new(x, y, width, title_height));
        y += title_height + GAP;

        self.display.layout(Rect::new(x, y, width, DISPLAY_HEIGHT));
        y += DISPLAY_HEIGHT + GAP;

        // Three equal-width buttons sharing the row.
        let button_width = ((width - GAP * 2.0) / 3.0).max(0.0);
        self.decrement_button
            .layout(Rect::new(x, y, button_width, BUTTON_HEIGHT));
        self.reset_button.layout(Rect::new(
            x + button_width + GAP,
            y,
            button_width,
            BUTTON_HEIGHT,
        ));
        self.increment_button.layout(Rect::new(
            x + (button_width + GAP) * 2.0,
            y,
            button_width,
            BUTTON_HEIGHT,
        ));
        y += BUTTON_HEIGHT + GAP;

        let step_height = self.step_input.measure(inner).height;
        self.step_input.layout(Rect::new(x, y, width, step_height));
        y += step_height + GAP;

        let hints_height = self.hints.measure(inner).height;
        self.hints.layout(Rect::new(x, y, width, hints_height));
        y += hints_height + PADDING;

        LayoutResult {
            size: Size::new(bounds.width, y - bounds.y),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        // Card surface behind everything.
        canvas.fill_rect(self.bounds, self.theme.surface);

        self.title.paint(canvas);
        self.display.paint(canvas);
        self.decrement_button.paint(canvas);
        self.reset_button.paint(canvas);
        self.increment_button.paint(canvas);
        self.step_input.paint(canvas);
        self.hints.paint(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            // Keyboard and text go to the step field only; the buttons and
            // the accordion are activated by pointer through the composite.
            Event::KeyDown { .. } | Event::KeyUp { .. } | Event::TextInput { .. } => {
                if let Some(msg) = self.step_input.event(event) {
                    if let Some(edit) = msg.downcast_ref::<StepEdited>() {
                        let raw = edit.raw.clone();
                        self.set_step(&raw);
                    }
                }
            }
            _ => {
                if let Some(msg) = self.display.event(event) {
                    if msg.downcast_ref::<CopyRequested>().is_some() {
                        self.copy_count();
                    }
                }

                if Self::button_clicked(self.decrement_button.event(event)) {
                    self.decrement();
                }
                if Self::button_clicked(self.reset_button.event(event)) {
                    self.reset();
                }
                if Self::button_clicked(self.increment_button.event(event)) {
                    self.increment();
                }

                self.step_input.event(event);

                if let Some(msg) = self.hints.event(event) {
                    if msg.downcast_ref::<AccordionToggled>().is_some() {
                        self.toggle_hints();
                    }
                }
            }
        }

        None
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

    fn accessible_name(&self) -> Option<&str> {
        Some(self.title.content())
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl CounterWidget {
    fn button_clicked(msg: Option<Box<dyn Any + Send>>) -> bool {
        msg.is_some_and(|m| m.downcast_ref::<ButtonClicked>().is_some())
    }
}
