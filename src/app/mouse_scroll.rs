//! Mouse scroll handling

use super::app_state::{App, Screen};
use crate::layout::Region;

/// Scroll direction for mouse wheel events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

const HOME_SCROLL_LINES: u16 = 3;

/// Handle scroll event for the given region
///
/// Only the home page scrolls. The wheel over the open menu moves its
/// selection instead.
pub fn handle_scroll(app: &mut App, region: Option<Region>, direction: ScrollDirection) {
    if matches!(region, Some(Region::Menu | Region::MenuItem(_))) {
        match direction {
            ScrollDirection::Up => app.dropdown.select_prev(),
            ScrollDirection::Down => app.dropdown.select_next(),
        }
        return;
    }

    if app.screen != Screen::Home {
        return;
    }

    match direction {
        ScrollDirection::Up => app.home_scroll.scroll_up(HOME_SCROLL_LINES),
        ScrollDirection::Down => app.home_scroll.scroll_down(HOME_SCROLL_LINES),
    }
}
