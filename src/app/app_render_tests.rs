//! Tests for app_render

use crate::publish::FormField;
use crate::test_utils::test_helpers::{render_app, test_app};

#[test]
fn test_home_renders_header_content_and_footer() {
    let (mut app, _) = test_app();

    let terminal = render_app(&mut app, 80, 24);
    let output = terminal.backend().to_string();

    assert!(output.contains("Doniai Blog"));
    assert!(output.contains("guest ▾"));
    assert!(output.contains("☾"));
    assert!(output.contains("Welcome to Doniai"));
    assert!(output.contains("Switch to light theme"));
}

#[test]
fn test_header_regions_are_recorded() {
    let (mut app, _) = test_app();

    render_app(&mut app, 80, 24);

    let trigger = app.layout_regions.menu_trigger.unwrap();
    let toggle = app.layout_regions.theme_toggle.unwrap();
    assert_eq!(trigger.y, 0);
    assert_eq!(trigger.x + trigger.width, 80);
    assert!(toggle.x + toggle.width < trigger.x);
    assert!(app.layout_regions.content.is_some());
}

#[test]
fn test_light_theme_shows_sun() {
    let (mut app, _) = test_app();
    app.toggle_theme();

    let terminal = render_app(&mut app, 80, 24);
    let output = terminal.backend().to_string();

    assert!(output.contains("☀"));
    assert!(output.contains("Switch to dark theme"));
}

#[test]
fn test_home_scroll_bounds_follow_viewport() {
    let (mut app, _) = test_app();

    render_app(&mut app, 80, 24);

    // Header and footer take one row each, the block border two more
    assert_eq!(app.home_scroll.viewport_height, 20);
    assert!(app.home_scroll.max_offset > 0);
}

#[test]
fn test_only_bottom_button_at_top_of_page() {
    let (mut app, _) = test_app();

    let terminal = render_app(&mut app, 80, 24);
    let output = terminal.backend().to_string();

    assert!(output.contains("↓ Bottom"));
    assert!(!output.contains("↑ Top"));
}

#[test]
fn test_publish_screen_renders_fields() {
    let (mut app, _) = test_app();
    app.open_publish();

    let terminal = render_app(&mut app, 80, 24);
    let output = terminal.backend().to_string();

    for field in FormField::ALL {
        assert!(output.contains(field.label()), "missing {}", field.label());
    }
    assert_eq!(app.layout_regions.form_fields.len(), 4);
    assert!(app.layout_regions.content.is_none());
}

#[test]
fn test_open_menu_is_drawn_and_recorded() {
    let (mut app, _) = test_app();
    app.dropdown.toggle();

    let terminal = render_app(&mut app, 80, 24);
    let output = terminal.backend().to_string();

    assert!(output.contains("Toggle theme"));
    assert!(app.layout_regions.menu.is_some());
}

#[test]
fn test_notifications_drawn_over_content() {
    let (mut app, clock) = test_app();
    app.notifications.success("Post published!");

    let terminal = render_app(&mut app, 80, 24);
    let output = terminal.backend().to_string();

    assert!(output.contains("Post published!"));
    assert_eq!(app.layout_regions.notification_closes.len(), 1);

    clock.advance_ms(3300);
    app.tick();
    assert_eq!(app.notifications.active().len(), 0);

    let terminal = render_app(&mut app, 80, 24);
    assert!(!terminal.backend().to_string().contains("Post published!"));
    assert!(app.layout_regions.notification_closes.is_empty());
}
