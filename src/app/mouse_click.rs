//! Mouse click handling

use super::app_state::App;
use crate::layout::Region;

/// Handle left mouse button click for the given region
///
/// Any click outside the user menu closes it before the click is handled.
pub fn handle_click(app: &mut App, region: Option<Region>) {
    let on_menu = matches!(
        region,
        Some(Region::Menu | Region::MenuItem(_) | Region::MenuTrigger)
    );
    if app.dropdown.is_open() && !on_menu {
        app.dropdown.close();
    }

    match region {
        Some(Region::NotificationClose(id)) => {
            app.notifications.dismiss(id);
        }
        Some(Region::ThemeToggle) => app.toggle_theme(),
        Some(Region::MenuTrigger) => app.dropdown.toggle(),
        Some(Region::MenuItem(index)) => {
            if let Some(item) = app.dropdown.choose(index) {
                app.select_menu_item(item);
            }
        }
        Some(Region::ScrollTopButton) => app.home_scroll.jump_to_top(),
        Some(Region::ScrollBottomButton) => app.home_scroll.jump_to_bottom(),
        Some(Region::FormField(field)) => app.form.set_focus(field),
        Some(Region::Menu) | Some(Region::Content) | None => {}
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
