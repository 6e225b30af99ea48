//! The on-screen container that stacks notifications
//!
//! Notifications are laid out top-down in the top-right corner of the frame,
//! in display order, until the frame runs out of rows.

use ratatui::layout::Rect;

/// Widest a notification box may grow, in columns
pub const REGION_MAX_WIDTH: u16 = 40;

/// Gap between the region and the frame edge
pub const REGION_MARGIN: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub max_width: u16,
    pub margin: u16,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            max_width: REGION_MAX_WIDTH,
            margin: REGION_MARGIN,
        }
    }
}

impl Region {
    /// Width available to a notification box inside `frame`
    pub fn box_width(&self, frame: Rect, content_width: u16) -> u16 {
        content_width
            .min(self.max_width)
            .min(frame.width.saturating_sub(self.margin * 2))
    }

    /// Stack boxes of the given heights from the top-right corner of `frame`
    ///
    /// Boxes that would fall off the bottom of the frame get no rectangle.
    pub fn stack(&self, frame: Rect, boxes: &[(u16, u16)]) -> Vec<Option<Rect>> {
        let mut y = frame.y + self.margin;
        let bottom = frame.y + frame.height;

        boxes
            .iter()
            .map(|&(width, height)| {
                if width == 0 || y + height > bottom {
                    return None;
                }
                let x = (frame.x + frame.width).saturating_sub(width + self.margin);
                let rect = Rect::new(x, y, width, height);
                y += height;
                Some(rect)
            })
            .collect()
    }
}
