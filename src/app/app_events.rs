use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, Screen};
use super::mouse_events;

mod global;

/// Short enough that notification transitions advance without input
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

const LINE_SCROLL: u16 = 1;

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_paste_event(&mut self, text: String) {
        if self.screen == Screen::Publish {
            self.form.insert_str(&text);
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if global::handle_global_keys(self, key) {
            return;
        }

        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::Publish => self.handle_publish_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('p') => self.open_publish(),
            KeyCode::Char('j') | KeyCode::Down => self.home_scroll.scroll_down(LINE_SCROLL),
            KeyCode::Char('k') | KeyCode::Up => self.home_scroll.scroll_up(LINE_SCROLL),
            KeyCode::PageDown => self.home_scroll.page_down(),
            KeyCode::PageUp => self.home_scroll.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.home_scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.home_scroll.jump_to_bottom(),
            _ => {}
        }
    }

    fn handle_publish_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit_publish();
            return;
        }

        match key.code {
            KeyCode::Esc => self.go_home(),
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            _ => {
                self.form.handle_key(key);
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
