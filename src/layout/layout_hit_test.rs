//! Hit testing for layout regions

use ratatui::layout::{Position, Rect};

use super::layout_regions::{LayoutRegions, Region};

fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    rect.contains(Position::new(x, y))
}

/// Returns the topmost region containing the given point
///
/// Overlays are checked first in reverse render order: notifications are
/// drawn last, then the user menu. Returns `None` outside every region.
pub fn region_at(regions: &LayoutRegions, x: u16, y: u16) -> Option<Region> {
    if let Some((id, _)) = regions
        .notification_closes
        .iter()
        .find(|(_, rect)| contains(rect, x, y))
    {
        return Some(Region::NotificationClose(*id));
    }

    if let Some(menu) = &regions.menu
        && contains(menu, x, y)
    {
        // Entries start one row below the top border
        let row = y.saturating_sub(menu.y);
        let inside = row >= 1 && row + 1 < menu.height;
        return Some(if inside {
            Region::MenuItem((row - 1) as usize)
        } else {
            Region::Menu
        });
    }

    let buttons = [
        (&regions.theme_toggle, Region::ThemeToggle),
        (&regions.menu_trigger, Region::MenuTrigger),
        (&regions.scroll_top, Region::ScrollTopButton),
        (&regions.scroll_bottom, Region::ScrollBottomButton),
    ];
    for (rect, region) in buttons {
        if let Some(rect) = rect
            && contains(rect, x, y)
        {
            return Some(region);
        }
    }

    if let Some((field, _)) = regions
        .form_fields
        .iter()
        .find(|(_, rect)| contains(rect, x, y))
    {
        return Some(Region::FormField(*field));
    }

    if let Some(rect) = &regions.content
        && contains(rect, x, y)
    {
        return Some(Region::Content);
    }

    None
}
