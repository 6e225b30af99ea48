//! Theme preference store
//!
//! Holds the current theme, persists changes, and notifies subscribers.

use std::fmt;

use super::Theme;
use super::preferences::PreferenceFile;
use crate::error::DoniaiError;

type ThemeListener = Box<dyn FnMut(Theme)>;

pub struct ThemeStore {
    current: Theme,
    file: PreferenceFile,
    listeners: Vec<ThemeListener>,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current)
            .field("file", &self.file)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ThemeStore {
    /// Load the stored preference, falling back to the default theme
    ///
    /// Returns a warning message when a stored value had to be ignored.
    pub fn load(file: PreferenceFile) -> (Self, Option<String>) {
        let (current, warning) = match file.load_theme() {
            Ok(theme) => (theme.unwrap_or_default(), None),
            Err(e) => {
                log::warn!("Ignoring stored theme preference: {}", e);
                (Theme::default(), Some(e.to_string()))
            }
        };

        let store = Self {
            current,
            file,
            listeners: Vec::new(),
        };
        (store, warning)
    }

    /// Store that never reads or writes the disk
    pub fn in_memory(theme: Theme) -> Self {
        Self {
            current: theme,
            file: PreferenceFile::in_memory(),
            listeners: Vec::new(),
        }
    }

    pub fn get_preference(&self) -> Theme {
        self.current
    }

    /// Apply and persist `theme`, then notify every listener
    ///
    /// The in-memory theme changes even when persisting fails; the error is
    /// returned so the caller can tell the user.
    pub fn set_preference(&mut self, theme: Theme) -> Result<(), DoniaiError> {
        self.current = theme;
        let saved = self.file.save_theme(theme);

        for listener in &mut self.listeners {
            listener(theme);
        }

        saved
    }

    /// Switch between dark and light
    pub fn toggle(&mut self) -> Result<Theme, DoniaiError> {
        let next = self.current.toggled();
        self.set_preference(next).map(|_| next)
    }

    /// Call `listener` after every preference change
    pub fn subscribe(&mut self, listener: impl FnMut(Theme) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

#[cfg(test)]
#[path = "theme_store_tests.rs"]
mod theme_store_tests;
