//! Light and dark themes
//!
//! All colors are defined here. Render files ask for a [`Palette`] through
//! [`palette`] and never hardcode `Color::*` values themselves.
//!
//! The preferred theme is persisted by [`ThemeStore`].

mod preferences;
mod theme_store;

pub use preferences::{PreferenceFile, THEME_KEY};
pub use theme_store::ThemeStore;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::notification::Severity;

/// Selectable theme, persisted by its identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "dark-theme")]
    Dark,
    #[serde(rename = "light-theme")]
    Light,
}

impl Theme {
    pub fn id(self) -> &'static str {
        match self {
            Theme::Dark => "dark-theme",
            Theme::Light => "light-theme",
        }
    }

    pub fn from_id(id: &str) -> Option<Theme> {
        match id {
            "dark-theme" => Some(Theme::Dark),
            "light-theme" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Glyph shown on the toggle button
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "☾",
            Theme::Light => "☀",
        }
    }

    /// Hint for the toggle button, naming the theme it switches to
    pub fn toggle_hint(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light theme",
            Theme::Light => "Switch to dark theme",
        }
    }
}

/// Colors of one notification box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationColors {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

/// Every color used by the UI for one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub text_dim: Color,
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,
    pub highlight_bg: Color,
    pub info: NotificationColors,
    pub success: NotificationColors,
    pub warning: NotificationColors,
    pub error: NotificationColors,
}

impl Palette {
    pub fn notification(&self, severity: Severity) -> NotificationColors {
        match severity {
            Severity::Info => self.info,
            Severity::Success => self.success,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }
}

// Deep space blue background with purple/pink accents
const DARK: Palette = Palette {
    text: Color::Rgb(236, 236, 244),
    text_dim: Color::Rgb(130, 133, 158),
    background: Color::Rgb(26, 26, 46),
    surface: Color::Rgb(35, 35, 58),
    border: Color::Rgb(90, 92, 119),
    border_focused: Color::Rgb(0, 217, 255),
    accent: Color::Rgb(189, 147, 249),
    highlight_bg: Color::Rgb(55, 55, 85),
    info: NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(55, 55, 85),
        border: Color::Rgb(0, 217, 255),
    },
    success: NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(107, 203, 119),
        border: Color::Rgb(107, 203, 119),
    },
    warning: NotificationColors {
        fg: Color::Rgb(26, 26, 46),
        bg: Color::Rgb(255, 217, 61),
        border: Color::Rgb(255, 217, 61),
    },
    error: NotificationColors {
        fg: Color::Rgb(236, 236, 244),
        bg: Color::Rgb(224, 108, 117),
        border: Color::Rgb(255, 135, 145),
    },
};

// Paper white background with the same semantic hues, darkened for contrast
const LIGHT: Palette = Palette {
    text: Color::Rgb(40, 42, 54),
    text_dim: Color::Rgb(110, 112, 130),
    background: Color::Rgb(250, 250, 252),
    surface: Color::Rgb(238, 238, 244),
    border: Color::Rgb(180, 182, 196),
    border_focused: Color::Rgb(0, 122, 204),
    accent: Color::Rgb(124, 77, 200),
    highlight_bg: Color::Rgb(220, 220, 235),
    info: NotificationColors {
        fg: Color::Rgb(40, 42, 54),
        bg: Color::Rgb(225, 240, 255),
        border: Color::Rgb(0, 122, 204),
    },
    success: NotificationColors {
        fg: Color::Rgb(20, 70, 30),
        bg: Color::Rgb(212, 240, 216),
        border: Color::Rgb(46, 160, 67),
    },
    warning: NotificationColors {
        fg: Color::Rgb(90, 60, 0),
        bg: Color::Rgb(255, 243, 205),
        border: Color::Rgb(212, 160, 0),
    },
    error: NotificationColors {
        fg: Color::Rgb(110, 20, 28),
        bg: Color::Rgb(253, 222, 224),
        border: Color::Rgb(207, 34, 46),
    },
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}
