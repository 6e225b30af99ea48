//! Tests for region hit testing

use ratatui::layout::Rect;

use super::layout_hit_test::region_at;
use super::layout_regions::{LayoutRegions, Region};
use crate::notification::NotificationCenter;
use crate::publish::FormField;

fn create_test_regions() -> LayoutRegions {
    let mut regions = LayoutRegions::new();
    regions.content = Some(Rect::new(0, 1, 100, 38));
    regions.theme_toggle = Some(Rect::new(80, 0, 3, 1));
    regions.menu_trigger = Some(Rect::new(85, 0, 15, 1));
    regions.scroll_top = Some(Rect::new(88, 36, 10, 1));
    regions.scroll_bottom = Some(Rect::new(88, 37, 10, 1));
    regions
}

#[test]
fn test_hit_content() {
    let regions = create_test_regions();

    assert_eq!(region_at(&regions, 50, 20), Some(Region::Content));
    assert_eq!(region_at(&regions, 0, 1), Some(Region::Content));
}

#[test]
fn test_hit_header_buttons() {
    let regions = create_test_regions();

    assert_eq!(region_at(&regions, 81, 0), Some(Region::ThemeToggle));
    assert_eq!(region_at(&regions, 90, 0), Some(Region::MenuTrigger));
}

#[test]
fn test_scroll_buttons_win_over_content() {
    let regions = create_test_regions();

    assert_eq!(region_at(&regions, 90, 36), Some(Region::ScrollTopButton));
    assert_eq!(region_at(&regions, 90, 37), Some(Region::ScrollBottomButton));
}

#[test]
fn test_hit_outside_all_regions() {
    let regions = create_test_regions();

    assert_eq!(region_at(&regions, 10, 0), None);
    assert_eq!(region_at(&regions, 0, 45), None);
}

#[test]
fn test_menu_rows_map_to_items() {
    let mut regions = create_test_regions();
    regions.menu = Some(Rect::new(84, 1, 16, 6));

    assert_eq!(region_at(&regions, 90, 1), Some(Region::Menu));
    assert_eq!(region_at(&regions, 90, 2), Some(Region::MenuItem(0)));
    assert_eq!(region_at(&regions, 90, 5), Some(Region::MenuItem(3)));
    assert_eq!(region_at(&regions, 90, 6), Some(Region::Menu));
}

#[test]
fn test_notification_close_is_topmost() {
    let mut center = NotificationCenter::new();
    let id = center.info("x");

    let mut regions = create_test_regions();
    regions.menu = Some(Rect::new(84, 1, 16, 6));
    regions.notification_closes = vec![(id, Rect::new(88, 2, 3, 1))];

    assert_eq!(region_at(&regions, 89, 2), Some(Region::NotificationClose(id)));
    assert_eq!(region_at(&regions, 85, 2), Some(Region::MenuItem(0)));
}

#[test]
fn test_hit_form_field() {
    let mut regions = LayoutRegions::new();
    regions.content = Some(Rect::new(0, 1, 100, 38));
    regions.form_fields = vec![
        (FormField::Title, Rect::new(0, 1, 100, 3)),
        (FormField::Content, Rect::new(0, 10, 100, 20)),
    ];

    assert_eq!(region_at(&regions, 5, 2), Some(Region::FormField(FormField::Title)));
    assert_eq!(region_at(&regions, 5, 15), Some(Region::FormField(FormField::Content)));
    assert_eq!(region_at(&regions, 5, 35), Some(Region::Content));
}

#[test]
fn test_clear_resets_everything() {
    let mut regions = create_test_regions();
    regions.clear();

    assert_eq!(region_at(&regions, 50, 20), None);
    assert!(regions.notification_closes.is_empty());
}
