//! Intake panel shown while no video is loaded.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::theme::Theme;
use crate::tui::ui::{centered_rect, tail_ellipsis};

/// Intro text above the choices.
pub const INTAKE_HINT: &str = "Upload a video or use sample content to explore timeline features";

/// Supported formats line.
const FORMATS_HINT: &str = "Supports MP4, WebM, MOV and other video formats";

/// Choices for loading a video, plus the path prompt when open.
pub struct IntakePanel<'a> {
    theme: &'a Theme,
}

impl<'a> IntakePanel<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let theme = self.theme;
        vec![
            Line::from(""),
            Line::from(Span::styled(INTAKE_HINT, theme.text_style())),
            Line::from(""),
            Line::from(vec![
                Span::styled("o", theme.accent_bold_style()),
                Span::styled("  Choose a video file", theme.text_style()),
            ]),
            Line::from(vec![
                Span::styled("s", theme.accent_bold_style()),
                Span::styled("  Load sample video", theme.text_style()),
            ]),
            Line::from(""),
            Line::from(Span::styled(FORMATS_HINT, theme.text_secondary_style())),
        ]
    }
}

impl Widget for IntakePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.text_secondary_style())
                    .title(" Load a Video "),
            );
        panel.render(area, buf);
    }
}

/// Modal prompt for typing a file path.
pub struct PathPrompt<'a> {
    input: &'a str,
    theme: &'a Theme,
}

impl<'a> PathPrompt<'a> {
    pub fn new(input: &'a str, theme: &'a Theme) -> Self {
        Self { input, theme }
    }

    /// Area of the prompt box within `area`.
    pub fn area(area: Rect) -> Rect {
        let centered = centered_rect(70, 20, area);
        let height = 3.min(area.height);
        Rect::new(
            centered.x,
            centered.y + centered.height.saturating_sub(height) / 2,
            centered.width,
            height,
        )
    }
}

impl Widget for PathPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let prompt_area = Self::area(area);
        Clear.render(prompt_area, buf);

        // Leave room for the borders and the cursor cell
        let visible = prompt_area.width.saturating_sub(3) as usize;
        let line = Line::from(vec![
            Span::styled(tail_ellipsis(self.input, visible), self.theme.text_style()),
            Span::styled("█", self.theme.accent_style()),
        ]);
        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.accent_style())
                    .title(" Open video (Enter: load, Esc: cancel) "),
            )
            .render(prompt_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.bottom())
            .flat_map(|y| (area.x..area.right()).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect()
    }

    #[test]
    fn panel_lists_both_choices() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        IntakePanel::new(&theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Choose a video file"));
        assert!(text.contains("Load sample video"));
    }

    #[test]
    fn prompt_shows_input_and_cursor() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        PathPrompt::new("/videos/talk.mp4", &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("/videos/talk.mp4█"));
    }
}
