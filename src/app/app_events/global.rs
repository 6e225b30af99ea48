use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;

/// Keys that work on every screen
///
/// While the user menu is open it takes the navigation keys; anything else
/// closes it and falls through.
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.quit();
                return true;
            }
            KeyCode::Char('t') => {
                app.toggle_theme();
                return true;
            }
            KeyCode::Char('d') => {
                app.notifications.dismiss_newest();
                return true;
            }
            _ => {}
        }
    }

    if key.code == KeyCode::F(2) {
        app.dropdown.toggle();
        return true;
    }

    if app.dropdown.is_open() {
        return handle_menu_key(app, key);
    }

    false
}

fn handle_menu_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.dropdown.select_next();
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.dropdown.select_prev();
            true
        }
        KeyCode::Enter => {
            if let Some(item) = app.dropdown.confirm() {
                app.select_menu_item(item);
            }
            true
        }
        KeyCode::Esc => {
            app.dropdown.close();
            true
        }
        _ => {
            app.dropdown.close();
            false
        }
    }
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
