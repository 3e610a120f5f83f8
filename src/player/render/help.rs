//! Help overlay rendering for the browser.
//!
//! Displays a centered help box with all available keyboard shortcuts.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::theme::Theme;

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  Playback",
    "    Space      Play / Pause",
    "    <-/->      Seek -/+ step",
    "    Home/End   Go to start / end",
    "",
    "  Key Moments",
    "    Tab        Focus moments list",
    "    Up/Down    Select moment",
    "    Enter      Jump to moment",
    "",
    "  Timeline",
    "    Click      Seek to position",
    "    Click mark Jump to key moment",
    "",
    "  Video",
    "    o          Open a video file",
    "    s          Load sample video",
    "",
    "  General",
    "    ?          Show this help",
    "    q          Quit",
    "",
    "       Press any key to close",
];

/// Width of the help box including borders.
pub const HELP_BOX_WIDTH: u16 = 40;

/// Centered area for the help box, clipped to `area`.
pub fn help_area(area: Rect) -> Rect {
    let height = (HELP_LINES.len() as u16 + 2).min(area.height);
    let width = HELP_BOX_WIDTH.min(area.width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// The help overlay widget.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let box_area = help_area(area);
        Clear.render(box_area, buf);

        let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();
        Paragraph::new(lines)
            .style(self.theme.accent_style())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.accent_style())
                    .title(" Video Timeline Browser Help "),
            )
            .render(box_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lines_fit_in_box() {
        for line in HELP_LINES {
            assert!(line.chars().count() <= (HELP_BOX_WIDTH - 2) as usize, "{}", line);
        }
    }

    #[test]
    fn help_lines_has_playback_section() {
        assert!(HELP_LINES.iter().any(|line| line.contains("Playback")));
        assert!(HELP_LINES.iter().any(|line| line.contains("Jump to moment")));
    }

    #[test]
    fn help_area_is_centered() {
        let area = help_area(Rect::new(0, 0, 100, 40));
        assert_eq!(area.width, HELP_BOX_WIDTH);
        assert_eq!(area.x, 30);
        assert_eq!(area.y, (40 - area.height) / 2);
    }

    #[test]
    fn help_area_clips_to_small_terminals() {
        let area = help_area(Rect::new(0, 0, 20, 10));
        assert_eq!(area, Rect::new(0, 0, 20, 10));
    }
}
