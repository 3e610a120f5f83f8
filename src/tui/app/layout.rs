//! Screen layout for the browser.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows of the timeline widget: border, axis, three strip rows, legend, border.
pub const TIMELINE_HEIGHT: u16 = 7;

/// Rows of the player view.
pub const PLAYER_MIN_HEIGHT: u16 = 5;

/// Share of the width given to the player and timeline column.
const MAIN_COLUMN_PERCENT: u16 = 68;

/// Areas of the browser screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserLayout {
    pub header: Rect,
    pub player: Rect,
    pub timeline: Rect,
    pub moments: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Split the header, content, status line, and footer.
fn split_frame(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Header, intake panel, status line, and footer for the empty state.
pub fn build_intake_layout(area: Rect) -> [Rect; 4] {
    split_frame(area)
}

/// Full browser layout once a source is loaded.
///
/// Player and timeline stack on the left, key moments fill the right.
pub fn build_browser_layout(area: Rect) -> BrowserLayout {
    let [header, content, status, footer] = split_frame(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(MAIN_COLUMN_PERCENT),
            Constraint::Percentage(100 - MAIN_COLUMN_PERCENT),
        ])
        .split(content);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(PLAYER_MIN_HEIGHT),
            Constraint::Length(TIMELINE_HEIGHT),
        ])
        .split(columns[0]);

    BrowserLayout {
        header,
        player: left[0],
        timeline: left[1],
        moments: columns[1],
        status,
        footer,
    }
}
