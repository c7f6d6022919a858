//! State management for the counter widget.
//!
//! This module implements the Elm Architecture pattern for predictable state
//! management: `State + Message → (State, Command)`. All mutation of the
//! counter goes through [`CounterState::update`]; side effects (the clipboard
//! write and notifications) come back to the caller as [`Command`] values, so
//! every update arm stays a pure, total function.
//!
//! # Examples
//!
//! ```
//! use tally_core::{CounterMessage, CounterState, Sign, State};
//!
//! let mut state = CounterState::default();
//! state.update(CounterMessage::SetStep("3".to_string()));
//! state.update(CounterMessage::Decrement);
//! assert_eq!(state.count(), -3);
//! assert_eq!(state.sign(), Sign::Negative);
//! ```

use crate::clipboard::ClipboardResult;
use crate::notify::Notification;
use serde::{Deserialize, Serialize};

/// Application state trait.
///
/// Implements the Elm Architecture: State + Message → (State, Command)
pub trait State: Clone + Serialize + for<'de> Deserialize<'de> + Send + Sync {
    /// Message type for state updates
    type Message: Send;

    /// Update state in response to a message.
    ///
    /// Returns a command describing side effects the caller must run.
    fn update(&mut self, msg: Self::Message) -> Command;
}

/// Commands for side effects.
///
/// A command is an instruction to the widget hosting the store; the state
/// itself never performs effects.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Command {
    /// No command
    #[default]
    None,
    /// Execute multiple commands
    Batch(Vec<Command>),
    /// Write text to the injected clipboard capability
    WriteClipboard {
        /// Text to place on the clipboard
        text: String,
    },
    /// Deliver a notification through the injected sink
    Notify(Notification),
}

impl Command {
    /// Create a batch of commands.
    pub fn batch(commands: impl IntoIterator<Item = Self>) -> Self {
        Self::Batch(commands.into_iter().collect())
    }

    /// Check if this is the none command.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Sign of the current count, driving the display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    /// Count is below zero
    Negative,
    /// Count is exactly zero
    Neutral,
    /// Count is above zero
    Positive,
}

impl Sign {
    /// Classify a count. Pure and total over all of `i64`.
    #[must_use]
    pub const fn of(count: i64) -> Self {
        if count < 0 {
            Self::Negative
        } else if count > 0 {
            Self::Positive
        } else {
            Self::Neutral
        }
    }
}

/// Parse raw step input.
///
/// Zero and anything that does not parse as an integer fall back to 1.
/// Negative values are accepted as-is: a negative step makes the increment
/// button count down and the decrement button count up.
#[must_use]
pub fn parse_step(raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => n,
    }
}

/// The counter widget's state: count, step, and hint visibility.
///
/// All three cells are private; reads go through accessors and writes go
/// through [`CounterState::update`]. State lives for one widget instance and
/// is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    /// Current count. Negative values are expected, not an error; arithmetic
    /// wraps at the `i64` boundary so updates stay total.
    count: i64,
    /// Amount added/subtracted per increment/decrement. Never zero.
    step: i64,
    /// Whether the hint accordion is expanded.
    hints_open: bool,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            count: 0,
            step: 1,
            hints_open: false,
        }
    }
}

impl CounterState {
    /// Create a counter at zero with step 1 and hints collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count.
    #[must_use]
    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Current step.
    #[must_use]
    pub const fn step(&self) -> i64 {
        self.step
    }

    /// Whether the hint accordion is expanded.
    #[must_use]
    pub const fn hints_open(&self) -> bool {
        self.hints_open
    }

    /// Sign of the current count, recomputed on every call.
    #[must_use]
    pub const fn sign(&self) -> Sign {
        Sign::of(self.count)
    }
}

/// Messages for the counter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterMessage {
    /// Add the step to the count
    Increment,
    /// Subtract the step from the count
    Decrement,
    /// Set the count back to zero
    Reset,
    /// Replace the step with the parsed form of raw input
    SetStep(String),
    /// Expand or collapse the hint accordion
    ToggleHints,
    /// Request that the count be copied to the clipboard
    CopyRequested,
    /// The clipboard write finished
    CopyFinished {
        /// Text that was written (the count at request time)
        text: String,
        /// Outcome reported by the clipboard capability
        result: ClipboardResult,
    },
}

impl State for CounterState {
    type Message = CounterMessage;

    fn update(&mut self, msg: Self::Message) -> Command {
        match msg {
            CounterMessage::Increment => {
                self.count = self.count.wrapping_add(self.step);
                Command::None
            }
            CounterMessage::Decrement => {
                self.count = self.count.wrapping_sub(self.step);
                Command::None
            }
            CounterMessage::Reset => {
                self.count = 0;
                Command::None
            }
            CounterMessage::SetStep(raw) => {
                self.step = parse_step(&raw);
                Command::None
            }
            CounterMessage::ToggleHints => {
                self.hints_open = !self.hints_open;
                Command::None
            }
            CounterMessage::CopyRequested => Command::WriteClipboard {
                text: self.count.to_string(),
            },
            CounterMessage::CopyFinished { text, result } => {
                if result.is_success() {
                    Command::Notify(Notification::success(format!(
                        "Copied \"{text}\" to clipboard!"
                    )))
                } else {
                    Command::Notify(Notification::error("Failed to copy to clipboard"))
                }
            }
        }
    }
}

/// Type alias for state change subscribers.
type Subscriber<S> = Box<dyn Fn(&S) + Send + Sync>;

/// Store manages the state lifecycle and tells the presentation layer when
/// to re-render.
pub struct Store<S: State> {
    state: S,
    subscribers: Vec<Subscriber<S>>,
}

impl<S: State> Store<S> {
    /// Create a new store with initial state.
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
        }
    }

    /// Get current state.
    pub const fn state(&self) -> &S {
        &self.state
    }

    /// Dispatch a message to update state.
    ///
    /// Subscribers are notified after every dispatch, before the returned
    /// command has been executed.
    pub fn dispatch(&mut self, msg: S::Message) -> Command {
        let cmd = self.state.update(msg);

        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }

        cmd
    }

    /// Subscribe to state changes.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_increment_adds_step() {
        let mut state = CounterState::default();
        state.update(CounterMessage::Increment);
        assert_eq!(state.count(), 1);

        state.update(CounterMessage::SetStep("5".to_string()));
        state.update(CounterMessage::Increment);
        assert_eq!(state.count(), 6);
    }

    #[test]
    fn test_decrement_may_go_negative() {
        let mut state = CounterState::default();
        state.update(CounterMessage::Decrement);
        assert_eq!(state.count(), -1);
        assert_eq!(state.sign(), Sign::Negative);
    }

    #[test]
    fn test_reset_only_touches_count() {
        let mut state = CounterState::default();
        state.update(CounterMessage::SetStep("7".to_string()));
        state.update(CounterMessage::ToggleHints);
        state.update(CounterMessage::Increment);

        state.update(CounterMessage::Reset);
        assert_eq!(state.count(), 0);
        assert_eq!(state.step(), 7);
        assert!(state.hints_open());
    }

    #[test]
    fn test_set_step_coerces_invalid_input_to_one() {
        for raw in ["0", "", "abc", "2.5", "1e3", "  "] {
            let mut state = CounterState::default();
            state.update(CounterMessage::SetStep(raw.to_string()));
            assert_eq!(state.step(), 1, "input {raw:?} should coerce to 1");
        }
    }

    #[test]
    fn test_set_step_accepts_negative_values() {
        let mut state = CounterState::default();
        state.update(CounterMessage::SetStep("-4".to_string()));
        assert_eq!(state.step(), -4);

        // A negative step reverses the buttons.
        state.update(CounterMessage::Increment);
        assert_eq!(state.count(), -4);
        state.update(CounterMessage::Decrement);
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn test_count_arithmetic_wraps_at_extremes() {
        let mut state = CounterState::default();
        state.update(CounterMessage::SetStep(i64::MAX.to_string()));

        state.update(CounterMessage::Increment);
        assert_eq!(state.count(), i64::MAX);
        state.update(CounterMessage::Increment);
        assert_eq!(state.count(), i64::MAX.wrapping_mul(2));

        // Decrementing back retraces the wrap exactly.
        state.update(CounterMessage::Decrement);
        state.update(CounterMessage::Decrement);
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn test_toggle_hints_involution() {
        let mut state = CounterState::default();
        assert!(!state.hints_open());
        state.update(CounterMessage::ToggleHints);
        assert!(state.hints_open());
        state.update(CounterMessage::ToggleHints);
        assert!(!state.hints_open());
    }

    #[test]
    fn test_sign_of() {
        assert_eq!(Sign::of(-1), Sign::Negative);
        assert_eq!(Sign::of(i64::MIN), Sign::Negative);
        assert_eq!(Sign::of(0), Sign::Neutral);
        assert_eq!(Sign::of(1), Sign::Positive);
        assert_eq!(Sign::of(i64::MAX), Sign::Positive);
    }

    #[test]
    fn test_copy_requested_mutates_nothing() {
        let mut state = CounterState::default();
        state.update(CounterMessage::SetStep("3".to_string()));
        state.update(CounterMessage::Increment);
        let before = state.clone();

        let cmd = state.update(CounterMessage::CopyRequested);
        assert_eq!(state, before);
        assert_eq!(
            cmd,
            Command::WriteClipboard {
                text: "3".to_string()
            }
        );
    }

    #[test]
    fn test_copy_finished_success_notifies_with_count() {
        let mut state = CounterState::default();
        let before = state.clone();

        let cmd = state.update(CounterMessage::CopyFinished {
            text: "42".to_string(),
            result: ClipboardResult::Success,
        });

        assert_eq!(state, before);
        assert_eq!(
            cmd,
            Command::Notify(Notification::success("Copied \"42\" to clipboard!"))
        );
    }

    #[test]
    fn test_copy_finished_failure_notifies_error() {
        for result in [
            ClipboardResult::Unavailable,
            ClipboardResult::PermissionDenied,
            ClipboardResult::Error("boom".to_string()),
        ] {
            let mut state = CounterState::default();
            let cmd = state.update(CounterMessage::CopyFinished {
                text: "42".to_string(),
                result,
            });
            assert_eq!(
                cmd,
                Command::Notify(Notification::error("Failed to copy to clipboard"))
            );
        }
    }

    #[test]
    fn test_command_batch() {
        let cmd = Command::batch([
            Command::WriteClipboard {
                text: "1".to_string(),
            },
            Command::None,
        ]);
        assert!(!cmd.is_none());
        if let Command::Batch(cmds) = cmd {
            assert_eq!(cmds.len(), 2);
        } else {
            panic!("Expected Batch command");
        }
    }

    #[test]
    fn test_state_serde_roundtrip() {
        let mut state = CounterState::default();
        state.update(CounterMessage::SetStep("3".to_string()));
        state.update(CounterMessage::Decrement);

        let json = serde_json::to_string(&state).expect("serialize");
        let loaded: CounterState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_store_dispatch_notifies_subscribers() {
        use std::sync::atomic::{AtomicI64, Ordering};
        use std::sync::Arc;

        let seen = Arc::new(AtomicI64::new(0));
        let seen_clone = seen.clone();

        let mut store = Store::new(CounterState::default());
        store.subscribe(move |state: &CounterState| {
            seen_clone.store(state.count(), Ordering::SeqCst);
        });

        store.dispatch(CounterMessage::Increment);
        store.dispatch(CounterMessage::Increment);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
        assert_eq!(store.state().count(), 2);
    }

    proptest! {
        #[test]
        fn prop_increment_then_decrement_is_identity(
            count in proptest::num::i64::ANY,
            step in proptest::num::i64::ANY
        ) {
            prop_assume!(step != 0);
            let mut state = CounterState {
                count,
                step,
                hints_open: false,
            };
            state.update(CounterMessage::Increment);
            state.update(CounterMessage::Decrement);
            prop_assert_eq!(state.count(), count);
        }

        #[test]
        fn prop_sign_partition_is_exhaustive(count in proptest::num::i64::ANY) {
            let sign = Sign::of(count);
            match sign {
                Sign::Negative => prop_assert!(count < 0),
                Sign::Neutral => prop_assert_eq!(count, 0),
                Sign::Positive => prop_assert!(count > 0),
            }
        }

        #[test]
        fn prop_parse_step_never_zero(raw in ".*") {
            prop_assert_ne!(parse_step(&raw), 0);
        }

        #[test]
        fn prop_parse_step_keeps_nonzero_integers(step in proptest::num::i64::ANY) {
            prop_assume!(step != 0);
            prop_assert_eq!(parse_step(&step.to_string()), step);
        }

        #[test]
        fn prop_reset_always_zero(count in proptest::num::i64::ANY) {
            let mut state = CounterState::default();
            state.update(CounterMessage::SetStep(count.to_string()));
            state.update(CounterMessage::Increment);
            state.update(CounterMessage::Reset);
            prop_assert_eq!(state.count(), 0);
        }
    }
}
