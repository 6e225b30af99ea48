//! Shared test utilities for doniai
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver, Sender};

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use crate::app::App;
    use crate::clock::ManualClock;
    use crate::config::Config;
    use crate::publish::{PublishJob, PublishOutcome};
    use crate::theme::{Theme, ThemeStore};

    /// App with default config, a manual clock and an in-memory theme store
    pub fn test_app() -> (App, ManualClock) {
        test_app_with_config(&Config::default())
    }

    pub fn test_app_with_config(config: &Config) -> (App, ManualClock) {
        let clock = ManualClock::new();
        let app = App::with_clock(
            config,
            ThemeStore::in_memory(Theme::Dark),
            Box::new(clock.clone()),
        );
        (app, clock)
    }

    /// Wire the app to channels the test drives in place of the worker
    pub fn connect_publish(app: &mut App) -> (Receiver<PublishJob>, Sender<PublishOutcome>) {
        let (job_tx, job_rx) = mpsc::channel();
        let (outcome_tx, outcome_rx) = mpsc::channel();
        app.publish.set_channels(job_tx, outcome_rx);
        (job_rx, outcome_tx)
    }

    /// Render once so layout regions are populated
    pub fn render_app(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }
}
