use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::{App, Screen};
use super::home_content::home_lines;
use crate::dropdown::render_dropdown;
use crate::notification::render_notifications;
use crate::publish::FormField;
use crate::theme::{self, Palette};
use crate::widgets::scrollbar;

const SITE_NAME: &str = " Doniai Blog";
const TOP_BUTTON: &str = " ↑ Top ";
const BOTTOM_BUTTON: &str = " ↓ Bottom ";
const BUTTON_MARGIN: u16 = 2;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let theme = self.current_theme();
        let palette = theme::palette(theme);

        frame.render_widget(
            Block::default().style(Style::default().fg(palette.text).bg(palette.background)),
            frame.area(),
        );

        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_header(frame, header_area, palette);

        match self.screen {
            Screen::Home => self.render_home(frame, body_area, palette),
            Screen::Publish => self.render_publish_form(frame, body_area, palette),
        }

        self.render_footer(frame, footer_area, palette);

        // Overlays last, notifications on top of everything
        if let Some(trigger) = self.layout_regions.menu_trigger
            && let Some(menu_rect) = render_dropdown(frame, &self.dropdown, trigger, theme)
        {
            self.layout_regions.menu = Some(menu_rect);
        }

        self.layout_regions.notification_closes =
            render_notifications(frame, &self.notifications, theme);
    }

    /// Site name on the left; theme toggle and user menu trigger on the right
    fn render_header(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.surface)),
            area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                SITE_NAME,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            area,
        );

        let trigger_line = Line::from(format!(" {} ▾ ", self.user_name));
        let trigger_width = (trigger_line.width() as u16).min(area.width);
        let trigger_rect = Rect {
            x: area.right().saturating_sub(trigger_width),
            width: trigger_width,
            ..area
        };

        let toggle_line = Line::from(format!(" {} ", self.current_theme().icon()));
        let toggle_width = toggle_line.width() as u16;
        let toggle_rect = Rect {
            x: trigger_rect.x.saturating_sub(toggle_width + 1),
            width: toggle_width.min(trigger_rect.x.saturating_sub(area.x)),
            ..area
        };

        let trigger_style = if self.dropdown.is_open() {
            Style::default()
                .fg(palette.accent)
                .bg(palette.highlight_bg)
        } else {
            Style::default().fg(palette.text)
        };
        frame.render_widget(Paragraph::new(trigger_line.style(trigger_style)), trigger_rect);
        frame.render_widget(
            Paragraph::new(toggle_line.style(Style::default().fg(palette.border_focused))),
            toggle_rect,
        );

        self.layout_regions.menu_trigger = Some(trigger_rect);
        self.layout_regions.theme_toggle = Some(toggle_rect);
    }

    fn render_home(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(" Home ");
        let inner = block.inner(area);

        let lines = home_lines(palette);
        self.home_scroll.update_bounds(lines.len() as u32, inner.height);

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .scroll((self.home_scroll.offset, 0)),
            area,
        );
        scrollbar::render_vertical_scrollbar(frame, area, &self.home_scroll, palette.border);

        self.layout_regions.content = Some(area);
        self.render_nav_buttons(frame, area, palette);
    }

    /// Top/Bottom buttons on the bottom border of the home page
    fn render_nav_buttons(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        if area.height < 3 {
            return;
        }

        let buttons = self.nav_buttons();
        let y = area.bottom() - 1;
        let mut right = area.right().saturating_sub(BUTTON_MARGIN);
        let style = Style::default()
            .fg(palette.background)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD);

        if buttons.top_visible
            && let Some(rect) = button_rect(TOP_BUTTON, right, y, area)
        {
            frame.render_widget(Paragraph::new(Span::styled(TOP_BUTTON, style)), rect);
            self.layout_regions.scroll_top = Some(rect);
            right = rect.x.saturating_sub(1);
        }

        if buttons.bottom_visible
            && let Some(rect) = button_rect(BOTTOM_BUTTON, right, y, area)
        {
            frame.render_widget(Paragraph::new(Span::styled(BOTTOM_BUTTON, style)), rect);
            self.layout_regions.scroll_bottom = Some(rect);
        }
    }

    fn render_publish_form(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let areas = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

        let focus = self.form.focus();
        let pending = self.publish.is_pending();

        for (field, rect) in FormField::ALL.into_iter().zip(areas.iter().copied()) {
            let focused = field == focus;
            let border_color = if focused {
                palette.border_focused
            } else {
                palette.border
            };

            let mut title = format!(" {} ", field.label());
            if pending && field == FormField::Content {
                title.push_str("· Publishing… ");
            }

            let textarea = self.form.field_mut(field);
            textarea.set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(title),
            );
            textarea.set_style(Style::default().fg(palette.text));
            textarea.set_cursor_style(if focused {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            });

            frame.render_widget(&*textarea, rect);
            self.layout_regions.form_fields.push((field, rect));
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let hints: &[(&str, &str)] = match self.screen {
            Screen::Home => &[("q", "quit"), ("p", "publish"), ("F2", "menu")],
            Screen::Publish => &[("Ctrl+S", "publish"), ("Tab", "next field"), ("Esc", "back")],
        };

        let mut spans = Vec::new();
        for (key, action) in hints {
            spans.push(Span::styled(
                format!(" {}", key),
                Style::default().fg(palette.border_focused),
            ));
            spans.push(Span::styled(
                format!(" {} ", action),
                Style::default().fg(palette.text_dim),
            ));
        }
        spans.push(Span::styled(
            " Ctrl+T",
            Style::default().fg(palette.border_focused),
        ));
        spans.push(Span::styled(
            format!(" {}", self.current_theme().toggle_hint()),
            Style::default().fg(palette.text_dim),
        ));

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.surface)),
            area,
        );
    }
}

/// Rect for a button ending at column `right`, if it fits inside `area`
fn button_rect(label: &str, right: u16, y: u16, area: Rect) -> Option<Rect> {
    let width = Line::from(label).width() as u16;
    let x = right.checked_sub(width)?;
    if x <= area.x {
        return None;
    }
    Some(Rect::new(x, y, width, 1))
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
