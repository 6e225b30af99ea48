//! Dropdown rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
};

use super::dropdown_state::{DropdownState, MenuItem};
use crate::theme::{self, Theme};
use crate::widgets::popup;

const MENU_PADDING: u16 = 4; // borders (2) + one space each side

/// Where the menu opens for a trigger at `trigger`
pub fn menu_area(trigger: Rect, frame_area: Rect) -> Rect {
    let label_width = MenuItem::ALL
        .iter()
        .map(|item| item.label().len() as u16)
        .max()
        .unwrap_or(0);
    let width = label_width + MENU_PADDING;
    let height = MenuItem::ALL.len() as u16 + 2;

    popup::popup_below_anchor(trigger, width, height, frame_area)
}

/// Render the open menu under the trigger; returns its area
pub fn render_dropdown(
    frame: &mut Frame,
    state: &DropdownState,
    trigger: Rect,
    theme: Theme,
) -> Option<Rect> {
    if !state.is_open() {
        return None;
    }

    let palette = theme::palette(theme);
    let area = menu_area(trigger, frame.area());
    popup::clear_area(frame, area);

    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == state.selected_index() {
                Style::default()
                    .fg(palette.accent)
                    .bg(palette.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            ListItem::new(Line::from(format!(" {} ", item.label()))).style(style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border_focused))
        .style(Style::default().bg(palette.surface));

    frame.render_widget(List::new(items).block(block), area);
    Some(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(state: &DropdownState, trigger: Rect) -> (String, Option<Rect>) {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut area = None;
        terminal
            .draw(|f| area = render_dropdown(f, state, trigger, Theme::Dark))
            .unwrap();
        (terminal.backend().to_string(), area)
    }

    #[test]
    fn test_closed_menu_renders_nothing() {
        let (output, area) = draw(&DropdownState::new(), Rect::new(50, 0, 10, 1));
        assert!(area.is_none());
        assert!(!output.contains("Publish"));
    }

    #[test]
    fn test_open_menu_lists_items_below_trigger() {
        let mut state = DropdownState::new();
        state.toggle();

        let (output, area) = draw(&state, Rect::new(50, 0, 10, 1));

        let area = area.unwrap();
        assert_eq!(area.y, 1);
        assert_eq!(area.x + area.width, 60);
        for item in MenuItem::ALL {
            assert!(output.contains(item.label()));
        }
    }

    #[test]
    fn test_menu_area_size() {
        let area = menu_area(Rect::new(40, 0, 10, 1), Rect::new(0, 0, 60, 20));
        // "Toggle theme" is the longest label
        assert_eq!(area.width, 12 + MENU_PADDING);
        assert_eq!(area.height, 6);
    }
}
