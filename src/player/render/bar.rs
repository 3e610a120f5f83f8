//! Player view: play state, source label, and the `MM:SS` clock.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::player::state::{PlaybackState, PlayerPhase};
use crate::theme::Theme;
use crate::timeline::format_clock;

const PLAY_ICON: &str = "▶";
const PAUSE_ICON: &str = "❚❚";

/// Label of the play/pause button for the current state.
pub fn button_label(state: &PlaybackState) -> &'static str {
    if state.is_playing {
        "Pause"
    } else {
        "Play"
    }
}

/// Clock text, e.g. `01:05 / 05:00`. Duration is omitted while unknown.
pub fn clock_text(state: &PlaybackState) -> String {
    if state.has_duration() {
        format!(
            "{} / {}",
            format_clock(state.current_time),
            format_clock(state.duration)
        )
    } else {
        format_clock(state.current_time)
    }
}

/// The player area above the timeline.
pub struct PlayerView<'a> {
    state: PlaybackState,
    phase: PlayerPhase,
    label: &'a str,
    pending: bool,
    theme: &'a Theme,
}

impl<'a> PlayerView<'a> {
    pub fn new(state: PlaybackState, phase: PlayerPhase, label: &'a str, theme: &'a Theme) -> Self {
        Self {
            state,
            phase,
            label,
            pending: false,
            theme,
        }
    }

    /// Show that a play request is waiting for the media element.
    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    fn screen_lines(&self) -> Vec<Line<'static>> {
        let theme = self.theme;
        let status = match self.phase {
            PlayerPhase::Empty => "No video loaded",
            PlayerPhase::Loading => "Loading video...",
            _ if self.pending => "Starting...",
            PlayerPhase::Paused => "Paused",
            PlayerPhase::Playing => "Playing",
        };
        let icon = if self.state.is_playing {
            PLAY_ICON
        } else {
            PAUSE_ICON
        };
        vec![
            Line::from(Span::styled(icon, theme.accent_bold_style())),
            Line::from(Span::styled(status.to_string(), theme.text_style())),
            Line::from(Span::styled(self.label.to_string(), theme.text_secondary_style())),
        ]
    }

    fn controls_line(&self) -> Line<'static> {
        let theme = self.theme;
        let icon = if self.state.is_playing {
            PAUSE_ICON
        } else {
            PLAY_ICON
        };
        Line::from(vec![
            Span::styled(
                format!(" {} {} ", icon, button_label(&self.state)),
                theme.accent_bold_style(),
            ),
            Span::raw("  "),
            Span::styled(clock_text(&self.state), theme.text_style()),
        ])
    }
}

impl Widget for PlayerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.text_secondary_style())
            .title(" Player ");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let screen = rows[0];
        let lines = self.screen_lines();
        let top = screen.y + screen.height.saturating_sub(lines.len() as u16) / 2;
        let height = (lines.len() as u16).min(screen.height);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(Rect::new(screen.x, top, screen.width, height), buf);

        self.controls_line().render(rows[1], buf);
    }
}
