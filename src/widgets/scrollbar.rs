//! Vertical scrollbar on the right border of a scrollable pane

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::scroll::ScrollState;

/// Render a scrollbar for `scroll` on the right border of `area`
///
/// Nothing is drawn when the content fits in the viewport.
pub fn render_vertical_scrollbar(frame: &mut Frame, area: Rect, scroll: &ScrollState, color: Color) {
    if scroll.max_offset == 0 || scroll.viewport_height == 0 {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(color))
        .track_style(Style::default().fg(color));

    // Ratatui uses max_position = content_length - 1 for thumb positioning.
    // Passing max_offset + 1 lets the thumb reach the bottom at max scroll.
    let max_scroll = scroll.max_offset as usize;
    let mut state = ScrollbarState::new(max_scroll + 1)
        .position((scroll.offset as usize).min(max_scroll))
        .viewport_content_length(scroll.viewport_height as usize);

    frame.render_stateful_widget(scrollbar, area, &mut state);
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
