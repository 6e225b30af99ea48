//! Tests for notification_render

use super::*;
use crate::clock::ManualClock;
use crate::notification::Severity;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::time::Duration;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn test_center() -> (NotificationCenter, ManualClock) {
    let clock = ManualClock::new();
    (NotificationCenter::with_clock(Box::new(clock.clone())), clock)
}

/// Render and return (screen text, close buttons)
fn render_to_string(
    center: &NotificationCenter,
    width: u16,
    height: u16,
) -> (String, Vec<(NotificationId, Rect)>, Terminal<TestBackend>) {
    let mut terminal = create_test_terminal(width, height);
    let mut buttons = Vec::new();
    terminal
        .draw(|f| buttons = render_notifications(f, center, Theme::Dark))
        .unwrap();
    let output = terminal.backend().to_string();
    (output, buttons, terminal)
}

fn row_of(output: &str, needle: &str) -> Option<usize> {
    output.lines().position(|line| line.contains(needle))
}

#[test]
fn test_renders_message_icon_and_close_button() {
    let (mut center, _) = test_center();
    center.info("Copied!");

    let (output, buttons, _) = render_to_string(&center, 80, 24);

    assert!(output.contains("ℹ Copied!"));
    assert!(output.contains("×"));
    assert_eq!(buttons.len(), 1);
}

#[test]
fn test_close_button_sits_at_right_edge_of_box() {
    let (mut center, _) = test_center();
    let id = center.info("Copied!");

    let (_, buttons, _) = render_to_string(&center, 80, 24);

    // Box is 15 wide at x=64; the close button is the last 3 inner columns
    assert_eq!(buttons, vec![(id, Rect::new(75, 2, 3, 1))]);
}

#[test]
fn test_nothing_rendered_without_region() {
    let (center, _) = test_center();

    let (output, buttons, _) = render_to_string(&center, 80, 24);

    assert!(buttons.is_empty());
    assert!(!output.contains("×"));
}

#[test]
fn test_notifications_stack_in_call_order() {
    let (mut center, _) = test_center();
    center.success("first");
    center.error("second");

    let (output, buttons, _) = render_to_string(&center, 80, 24);

    let first = row_of(&output, "first").unwrap();
    let second = row_of(&output, "second").unwrap();
    assert!(first < second);
    assert_eq!(buttons.len(), 2);
}

#[test]
fn test_overflowing_notifications_are_skipped() {
    let (mut center, _) = test_center();
    for n in 0..5 {
        center.notify(&format!("note {}", n), Severity::Info, Duration::ZERO);
    }

    // Room for two 3-row boxes below the 1-row margin
    let (output, buttons, _) = render_to_string(&center, 80, 8);

    assert_eq!(buttons.len(), 2);
    assert!(output.contains("note 1"));
    assert!(!output.contains("note 2"));
}

#[test]
fn test_long_message_wraps_within_region_width() {
    let (mut center, _) = test_center();
    let message = "duplicate title: a post with this title already exists on the site";
    center.error(message);

    let (output, buttons, _) = render_to_string(&center, 100, 24);

    let (_, close) = buttons[0];
    // Box is capped at 40 columns and anchored one column from the edge
    assert_eq!(close.x + CLOSE_WIDTH + 1, 99);
    assert!(output.contains("duplicate"));
    assert!(output.contains("exists"));
}

#[test]
fn test_word_wrapped_message_keeps_its_tail() {
    let (mut center, _) = test_center();
    // Fits 34 columns by character count in two rows, but needs three when
    // wrapped at word boundaries
    let word = "a".repeat(20);
    let message = format!("{word} {word} {}END", "a".repeat(17));
    center.notify(&message, Severity::Info, Duration::ZERO);

    let area = Rect::new(0, 0, 100, 20);
    let size = box_size(center.region().unwrap(), area, &center.active()[0]);
    assert_eq!(size, (40, 5));

    let (output, _, _) = render_to_string(&center, 100, 20);
    assert!(output.contains("END"));
}

#[test]
fn test_entering_is_dimmed_and_visible_is_not() {
    let (mut center, clock) = test_center();
    center.info("fade");

    let (_, buttons, terminal) = render_to_string(&center, 80, 24);
    let (_, close) = buttons[0];
    let cell = &terminal.backend().buffer()[(close.x + 1, close.y)];
    assert!(cell.modifier.contains(Modifier::DIM));

    clock.advance_ms(10);
    center.tick();

    let (_, buttons, terminal) = render_to_string(&center, 80, 24);
    let (_, close) = buttons[0];
    let cell = &terminal.backend().buffer()[(close.x + 1, close.y)];
    assert!(!cell.modifier.contains(Modifier::DIM));
}

#[test]
fn test_too_narrow_frame_draws_nothing() {
    let (mut center, _) = test_center();
    center.info("tight");

    let (_, buttons, _) = render_to_string(&center, 8, 10);

    assert!(buttons.is_empty());
}
