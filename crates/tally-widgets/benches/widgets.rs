//! Benchmark tests for counter operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tally_core::{
    parse_step, Constraints, CounterMessage, CounterState, InMemoryClipboard, NotificationLog,
    Sign, State, Widget,
};
use tally_widgets::{Button, CounterDisplay, CounterWidget, Text};

fn bench_state_update(c: &mut Criterion) {
    c.bench_function("counter_increment", |b| {
        let mut state = CounterState::default();
        b.iter(|| state.update(black_box(CounterMessage::Increment)))
    });

    c.bench_function("counter_set_step", |b| {
        let mut state = CounterState::default();
        b.iter(|| state.update(CounterMessage::SetStep(black_box("42".to_string()))))
    });
}

fn bench_parse_step(c: &mut Criterion) {
    c.bench_function("parse_step_valid", |b| {
        b.iter(|| parse_step(black_box("12345")))
    });

    c.bench_function("parse_step_invalid", |b| {
        b.iter(|| parse_step(black_box("not a number")))
    });
}

fn bench_sign_of(c: &mut Criterion) {
    c.bench_function("sign_of", |b| b.iter(|| Sign::of(black_box(-42))));
}

fn bench_button_measure(c: &mut Criterion) {
    let button = Button::new("+ Increment");
    let constraints = Constraints::new(0.0, 200.0, 0.0, 50.0);

    c.bench_function("button_measure", |b| {
        b.iter(|| button.measure(black_box(constraints)))
    });
}

fn bench_text_measure(c: &mut Criterion) {
    let text = Text::heading("Tally counter");
    let constraints = Constraints::new(0.0, 400.0, 0.0, 50.0);

    c.bench_function("text_measure", |b| {
        b.iter(|| text.measure(black_box(constraints)))
    });
}

fn bench_display_measure(c: &mut Criterion) {
    let mut display = CounterDisplay::new();
    display.set_value(-1_000_000);
    let constraints = Constraints::new(0.0, 400.0, 0.0, 100.0);

    c.bench_function("counter_display_measure", |b| {
        b.iter(|| display.measure(black_box(constraints)))
    });
}

fn bench_counter_widget_dispatch(c: &mut Criterion) {
    c.bench_function("counter_widget_increment", |b| {
        let mut counter = CounterWidget::new(InMemoryClipboard::new(), NotificationLog::new());
        b.iter(|| counter.increment())
    });

    c.bench_function("counter_widget_copy", |b| {
        let mut counter = CounterWidget::new(InMemoryClipboard::new(), NotificationLog::new());
        b.iter(|| counter.copy_count())
    });
}

criterion_group!(
    benches,
    bench_state_update,
    bench_parse_step,
    bench_sign_of,
    bench_button_measure,
    bench_text_measure,
    bench_display_measure,
    bench_counter_widget_dispatch,
);
criterion_main!(benches);
