//! Mouse input handling for the browser.
//!
//! Resolves a left click to the view under the pointer. Offsets are
//! relative to the view's own area, never to the screen.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::moments::MomentsLayout;
use crate::timeline::TrackGeometry;

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The timeline strip, `offset` cells from its left edge
    Timeline { offset: u16, width: u16 },
    /// A row of the key moments list
    Moment(usize),
    Elsewhere,
}

/// Screen position of a left button press, if this event is one.
pub fn left_click(mouse: &MouseEvent) -> Option<(u16, u16)> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((mouse.column, mouse.row)),
        _ => None,
    }
}

/// Resolve a screen position against the last drawn layout.
pub fn resolve_click(
    column: u16,
    row: u16,
    timeline: Option<TrackGeometry>,
    moments: Option<&MomentsLayout>,
) -> ClickTarget {
    if let Some(geometry) = timeline {
        if let Some(offset) = geometry.strip_offset(column, row) {
            return ClickTarget::Timeline {
                offset,
                width: geometry.strip.width,
            };
        }
    }
    if let Some(layout) = moments {
        if contains(layout.area, column, row) {
            if let Some(index) = layout.index_at(row) {
                return ClickTarget::Moment(index);
            }
        }
    }
    ClickTarget::Elsewhere
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
