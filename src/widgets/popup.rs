use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, right-aligned with it and kept inside `frame_area`
pub fn popup_below_anchor(anchor: Rect, width: u16, height: u16, frame_area: Rect) -> Rect {
    let frame_right = frame_area.x + frame_area.width;
    let frame_bottom = frame_area.y + frame_area.height;

    let popup_width = width.min(frame_area.width);
    let right = (anchor.x + anchor.width).min(frame_right);
    let popup_x = right.saturating_sub(popup_width).max(frame_area.x);
    let popup_y = (anchor.y + anchor.height).min(frame_bottom);

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: height.min(frame_bottom - popup_y),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
