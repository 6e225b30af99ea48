//! Layout regions tracking for UI components

use ratatui::layout::Rect;

use crate::notification::NotificationId;
use crate::publish::FormField;

/// Identifies a clickable UI component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Content,
    ThemeToggle,
    MenuTrigger,
    /// A user menu entry, by index
    MenuItem(usize),
    /// Menu border or padding
    Menu,
    ScrollTopButton,
    ScrollBottomButton,
    NotificationClose(NotificationId),
    FormField(FormField),
}

/// Tracks rendered areas of UI components
///
/// Rebuilt on each render pass. Regions are `None` (or empty) when the component
/// is not visible.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub content: Option<Rect>,
    pub theme_toggle: Option<Rect>,
    pub menu_trigger: Option<Rect>,
    pub menu: Option<Rect>,
    pub scroll_top: Option<Rect>,
    pub scroll_bottom: Option<Rect>,
    pub notification_closes: Vec<(NotificationId, Rect)>,
    pub form_fields: Vec<(FormField, Rect)>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
