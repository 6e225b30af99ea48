//! Tests for mouse click handling

use ratatui::layout::Rect;

use super::*;
use crate::app::Screen;
use crate::app::mouse_events::handle_mouse_event;
use crate::notification::Phase;
use crate::publish::FormField;
use crate::test_utils::test_helpers::{left_click, render_app, test_app};
use crate::theme::Theme;

fn center_of(rect: Rect) -> (u16, u16) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

fn click(app: &mut App, rect: Rect) {
    let (x, y) = center_of(rect);
    handle_mouse_event(app, left_click(x, y));
}

#[test]
fn test_click_theme_toggle() {
    let (mut app, _) = test_app();
    render_app(&mut app, 80, 24);

    let toggle = app.layout_regions.theme_toggle.unwrap();
    click(&mut app, toggle);

    assert_eq!(app.current_theme(), Theme::Light);
}

#[test]
fn test_click_trigger_then_menu_item() {
    let (mut app, _) = test_app();
    render_app(&mut app, 80, 24);

    let trigger = app.layout_regions.menu_trigger.unwrap();
    click(&mut app, trigger);
    assert!(app.dropdown.is_open());

    render_app(&mut app, 80, 24);
    let menu = app.layout_regions.menu.unwrap();
    // Second entry, one row below the top border
    handle_mouse_event(&mut app, left_click(menu.x + 2, menu.y + 2));

    assert!(!app.dropdown.is_open());
    assert_eq!(app.screen, Screen::Publish);
}

#[test]
fn test_click_trigger_twice_closes_menu() {
    let (mut app, _) = test_app();
    render_app(&mut app, 80, 24);
    let trigger = app.layout_regions.menu_trigger.unwrap();

    click(&mut app, trigger);
    render_app(&mut app, 80, 24);
    click(&mut app, trigger);

    assert!(!app.dropdown.is_open());
}

#[test]
fn test_click_outside_menu_closes_it() {
    let (mut app, _) = test_app();
    app.dropdown.toggle();
    render_app(&mut app, 80, 24);

    handle_mouse_event(&mut app, left_click(5, 12));

    assert!(!app.dropdown.is_open());
    assert_eq!(app.screen, Screen::Home);
}

#[test]
fn test_click_menu_border_keeps_it_open() {
    let (mut app, _) = test_app();
    app.dropdown.toggle();
    render_app(&mut app, 80, 24);
    let menu = app.layout_regions.menu.unwrap();

    handle_mouse_event(&mut app, left_click(menu.x + 2, menu.y));

    assert!(app.dropdown.is_open());
}

#[test]
fn test_click_close_button_dismisses_notification() {
    let (mut app, _) = test_app();
    let id = app.notifications.info("Copied!");
    render_app(&mut app, 80, 24);

    let (_, close) = app.layout_regions.notification_closes[0];
    click(&mut app, close);

    assert_eq!(app.notifications.phase(id), Some(Phase::Dismissing));
}

#[test]
fn test_click_scroll_buttons() {
    let (mut app, _) = test_app();
    render_app(&mut app, 80, 24);
    assert!(app.layout_regions.scroll_top.is_none());

    let bottom = app.layout_regions.scroll_bottom.unwrap();
    click(&mut app, bottom);
    assert!(app.home_scroll.is_at_bottom());

    render_app(&mut app, 80, 24);
    assert!(app.layout_regions.scroll_bottom.is_none());
    let top = app.layout_regions.scroll_top.unwrap();
    click(&mut app, top);
    assert_eq!(app.home_scroll.offset, 0);
}

#[test]
fn test_click_form_field_focuses_it() {
    let (mut app, _) = test_app();
    app.open_publish();
    render_app(&mut app, 80, 24);

    let (_, tags) = app
        .layout_regions
        .form_fields
        .iter()
        .find(|(field, _)| *field == FormField::Tags)
        .copied()
        .unwrap();
    click(&mut app, tags);

    assert_eq!(app.form.focus(), FormField::Tags);
}

#[test]
fn test_click_on_nothing_is_harmless() {
    let (mut app, _) = test_app();

    handle_click(&mut app, None);

    assert_eq!(app.screen, Screen::Home);
    assert!(!app.should_quit());
}
