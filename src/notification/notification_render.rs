//! Notification rendering
//!
//! Draws the region's notifications stacked in the top-right corner. Boxes that
//! are still entering or already leaving are drawn dimmed; that is the
//! terminal's version of a fade.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::center::NotificationCenter;
use super::notification_state::{Notification, NotificationId};
use super::region::Region;
use crate::theme::{self, Theme};
use crate::widgets::popup;

const CLOSE_BUTTON: &str = " × ";
const CLOSE_WIDTH: u16 = 3;

/// Borders (2) + left padding (1) + close button
const CHROME_WIDTH: u16 = 2 + 1 + CLOSE_WIDTH;

/// Narrowest box worth drawing
const MIN_BOX_WIDTH: u16 = CHROME_WIDTH + 4;

/// Render every mounted notification on top of the frame
///
/// Call after the rest of the UI so notifications overlay it. Returns the
/// close button area of each drawn notification for click handling.
pub fn render_notifications(
    frame: &mut Frame,
    center: &NotificationCenter,
    theme: Theme,
) -> Vec<(NotificationId, Rect)> {
    let Some(region) = center.region() else {
        return Vec::new();
    };

    let area = frame.area();
    let sizes: Vec<(u16, u16)> = center
        .active()
        .iter()
        .map(|n| box_size(region, area, n))
        .collect();
    let rects = region.stack(area, &sizes);

    let mut close_buttons = Vec::new();
    for (notif, rect) in center.active().iter().zip(rects) {
        let Some(rect) = rect else {
            continue;
        };
        if rect.width < MIN_BOX_WIDTH {
            continue;
        }
        close_buttons.push((notif.id, render_box(frame, notif, rect, theme)));
    }
    close_buttons
}

fn body(notif: &Notification) -> Line<'_> {
    Line::from(vec![
        Span::styled(notif.severity.icon(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::raw(notif.message.as_str()),
    ])
}

/// Message paragraph, wrapped at word boundaries
fn body_paragraph(notif: &Notification) -> Paragraph<'_> {
    Paragraph::new(body(notif)).wrap(Wrap { trim: true })
}

/// Width and height of a notification box, wrapping long messages
///
/// The height comes from the same wrapping the paragraph is drawn with, so a
/// word pushed to the next row still gets a row.
fn box_size(region: &Region, area: Rect, notif: &Notification) -> (u16, u16) {
    let text_width = body(notif).width().min(u16::MAX as usize) as u16;
    let width = region.box_width(area, text_width.saturating_add(CHROME_WIDTH));
    let inner = width.saturating_sub(CHROME_WIDTH).max(1);
    let lines = body_paragraph(notif)
        .line_count(inner)
        .clamp(1, u16::MAX as usize - 2) as u16;
    (width, lines + 2)
}

fn render_box(frame: &mut Frame, notif: &Notification, rect: Rect, theme: Theme) -> Rect {
    let colors = theme::palette(theme).notification(notif.severity);

    let mut text_style = Style::default().fg(colors.fg).bg(colors.bg);
    let mut border_style = Style::default().fg(colors.border).bg(colors.bg);
    if !notif.phase.is_shown() {
        text_style = text_style.add_modifier(Modifier::DIM);
        border_style = border_style.add_modifier(Modifier::DIM);
    }

    popup::clear_area(frame, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(text_style);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let [text_area, close_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(CLOSE_WIDTH)]).areas(inner);
    let text_area = Rect {
        x: text_area.x + 1,
        width: text_area.width.saturating_sub(1),
        ..text_area
    };
    let close_area = Rect {
        height: close_area.height.min(1),
        ..close_area
    };

    frame.render_widget(
        body_paragraph(notif).style(text_style),
        text_area,
    );
    frame.render_widget(
        Paragraph::new(CLOSE_BUTTON).style(text_style.add_modifier(Modifier::BOLD)),
        close_area,
    );

    close_area
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
