//! Browser TUI application
//!
//! Wires the playback controller, media intake, and session data to the
//! player view, the timeline, and the key moments panel. All mutations go
//! through the controller; the views only read snapshots and emit requests.

use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::layout::{build_browser_layout, build_intake_layout};
use super::app::status_footer::{render_footer, render_status_line, StatusKind};
use super::app::App;
use super::widgets::{IntakePanel, PathPrompt, INTAKE_HINT};
use crate::data::SessionData;
use crate::intake::MediaIntake;
use crate::media::MediaElement;
use crate::moments::{MomentsLayout, MomentsPanel, MomentsWidget};
use crate::player::input::{key_action, left_click, resolve_click, ClickTarget, KeyAction};
use crate::player::render::{HelpOverlay, PlayerView};
use crate::player::{PlaybackController, PlayerPhase, Request};
use crate::theme::Theme;
use crate::timeline::{TimelineTrack, TimelineWidget, TrackGeometry};

/// Application title shown in the header.
pub const APP_TITLE: &str = "Video Timeline Browser";

/// Which panel receives selection keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Timeline,
    Moments,
}

/// UI mode for the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Typing a file path to open
    Prompt,
    /// Showing keyboard shortcuts
    Help,
}

/// Browser state independent of the terminal.
pub struct Browser<M: MediaElement> {
    controller: PlaybackController<M>,
    intake: MediaIntake,
    data: SessionData,
    panel: MomentsPanel,
    focus: Focus,
    mode: Mode,
    prompt: String,
    status: Option<(String, StatusKind)>,
    seek_step: f64,
    theme: Theme,
    /// Geometry of the last drawn frame, for mouse hit testing
    timeline_geometry: Option<TrackGeometry>,
    moments_layout: Option<MomentsLayout>,
    should_quit: bool,
}

impl<M: MediaElement> Browser<M> {
    pub fn new(
        controller: PlaybackController<M>,
        intake: MediaIntake,
        data: SessionData,
        theme: Theme,
        seek_step: f64,
    ) -> Self {
        Self {
            controller,
            intake,
            data,
            panel: MomentsPanel::new(),
            focus: Focus::default(),
            mode: Mode::default(),
            prompt: String::new(),
            status: None,
            seek_step,
            theme,
            timeline_geometry: None,
            moments_layout: None,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &PlaybackController<M> {
        &self.controller
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected_moment(&self) -> usize {
        self.panel.selected()
    }

    pub fn status(&self) -> Option<(&str, StatusKind)> {
        self.status.as_ref().map(|(text, kind)| (text.as_str(), *kind))
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply pending media events and surface controller notices.
    pub fn tick(&mut self) {
        self.controller.poll_media();
        if let Some(notice) = self.controller.take_notice() {
            self.status = Some((notice, StatusKind::Warning));
        }
    }

    /// Route a request to the controller, reporting intake rejections.
    pub fn dispatch(&mut self, request: Request) {
        let uploading = matches!(request, Request::Upload(_));
        match self.controller.handle_request(request, &self.intake) {
            Ok(()) => {
                if uploading {
                    let label = self
                        .controller
                        .source()
                        .map(|s| s.label())
                        .unwrap_or_default();
                    self.status = Some((format!("Loaded {}", label), StatusKind::Info));
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "File rejected");
                self.status = Some((e.to_string(), StatusKind::Warning));
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        match self.mode {
            Mode::Normal => {
                if let Some(action) = key_action(key) {
                    self.handle_action(action);
                }
            }
            Mode::Prompt => self.handle_prompt_key(key),
            // Any key closes help
            Mode::Help => self.mode = Mode::Normal,
        }
    }

    fn handle_action(&mut self, action: KeyAction) {
        let state = self.controller.snapshot();
        let moment_count = self.data.moments.len();
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::ToggleHelp => self.mode = Mode::Help,
            KeyAction::Cancel => self.status = None,
            KeyAction::TogglePlayback => self.dispatch(Request::TogglePlayback),
            KeyAction::StepBack => {
                self.dispatch(Request::Seek(state.current_time - self.seek_step))
            }
            KeyAction::StepForward => {
                self.dispatch(Request::Seek(state.current_time + self.seek_step))
            }
            KeyAction::JumpToStart => self.dispatch(Request::Seek(0.0)),
            KeyAction::JumpToEnd => self.dispatch(Request::Seek(state.duration)),
            KeyAction::CycleFocus => {
                self.focus = match self.focus {
                    Focus::Timeline => Focus::Moments,
                    Focus::Moments => Focus::Timeline,
                };
            }
            KeyAction::SelectPrev => {
                self.focus = Focus::Moments;
                self.panel.select_prev(moment_count);
            }
            KeyAction::SelectNext => {
                self.focus = Focus::Moments;
                self.panel.select_next(moment_count);
            }
            KeyAction::ActivateSelected => {
                if self.focus == Focus::Moments {
                    if let Some(request) = self.panel.activate_selected(&self.data.moments) {
                        self.dispatch(request);
                    }
                }
            }
            KeyAction::OpenFile => {
                self.prompt.clear();
                self.mode = Mode::Prompt;
            }
            KeyAction::LoadSample => {
                self.status = None;
                self.dispatch(Request::LoadSample);
            }
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.prompt.clear();
                self.mode = Mode::Normal;
            }
            KeyCode::Enter => {
                let path = self.prompt.trim().to_string();
                self.prompt.clear();
                self.mode = Mode::Normal;
                if !path.is_empty() {
                    self.dispatch(Request::Upload(PathBuf::from(path)));
                }
            }
            KeyCode::Backspace => {
                self.prompt.pop();
            }
            KeyCode::Char(c) => self.prompt.push(c),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.mode != Mode::Normal {
            return;
        }
        let Some((column, row)) = left_click(&mouse) else {
            return;
        };
        match resolve_click(
            column,
            row,
            self.timeline_geometry,
            self.moments_layout.as_ref(),
        ) {
            ClickTarget::Timeline { offset, width } => {
                self.focus = Focus::Timeline;
                let state = self.controller.snapshot();
                let track = TimelineTrack::new(
                    state.duration,
                    state.current_time,
                    &self.data.moments,
                    &self.data.segments,
                );
                if let Some(request) = track.pointer_down(offset, width) {
                    self.dispatch(request);
                }
            }
            ClickTarget::Moment(index) => {
                self.focus = Focus::Moments;
                if let Some(request) = self.panel.activate(&self.data.moments, index) {
                    self.dispatch(request);
                }
            }
            ClickTarget::Elsewhere => {}
        }
    }

    /// Draw the whole screen and remember hit-test geometry.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let phase = self.controller.phase();

        if phase == PlayerPhase::Empty {
            self.timeline_geometry = None;
            self.moments_layout = None;
            let [header, body, status, footer] = build_intake_layout(area);
            self.render_header(frame, header, INTAKE_HINT);
            frame.render_widget(IntakePanel::new(&self.theme), body);
            self.render_status(frame, status);
            render_footer(frame, footer, self.footer_keys(phase), &self.theme);
        } else {
            let layout = build_browser_layout(area);
            let state = self.controller.snapshot();
            let label = self
                .controller
                .source()
                .map(|s| s.label())
                .unwrap_or_default();

            self.render_header(frame, layout.header, &label);

            let player = PlayerView::new(state, phase, &label, &self.theme)
                .pending(self.controller.is_play_pending());
            frame.render_widget(player, layout.player);

            let track = TimelineTrack::new(
                state.duration,
                state.current_time,
                &self.data.moments,
                &self.data.segments,
            );
            let timeline = TimelineWidget::new(track, &self.theme)
                .focused(self.focus == Focus::Timeline);
            frame.render_widget(timeline, layout.timeline);
            self.timeline_geometry = Some(TrackGeometry::new(layout.timeline));

            let selected = self.panel.selected();
            let moments = MomentsWidget::new(&self.data.moments, state.current_time, &self.theme)
                .selected(selected)
                .focused(self.focus == Focus::Moments);
            frame.render_widget(moments, layout.moments);
            self.moments_layout = Some(MomentsLayout::new(
                layout.moments,
                selected,
                self.data.moments.len(),
            ));

            self.render_status(frame, layout.status);
            render_footer(frame, layout.footer, self.footer_keys(phase), &self.theme);
        }

        match self.mode {
            Mode::Help => frame.render_widget(HelpOverlay::new(&self.theme), area),
            Mode::Prompt => frame.render_widget(PathPrompt::new(&self.prompt, &self.theme), area),
            Mode::Normal => {}
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, subtitle: &str) {
        let lines = vec![
            Line::from(Span::styled(APP_TITLE, self.theme.accent_bold_style())),
            Line::from(Span::styled(
                subtitle.to_string(),
                self.theme.text_secondary_style(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let (text, kind) = self.status_text();
        render_status_line(frame, area, &text, kind, &self.theme);
    }

    /// Status message if one is set, otherwise a description of the track.
    fn status_text(&self) -> (String, StatusKind) {
        if let Some((text, kind)) = &self.status {
            return (text.clone(), *kind);
        }
        let state = self.controller.snapshot();
        let text = if state.has_duration() {
            TimelineTrack::new(
                state.duration,
                state.current_time,
                &self.data.moments,
                &self.data.segments,
            )
            .slider()
            .describe()
        } else {
            String::new()
        };
        (text, StatusKind::Info)
    }

    fn footer_keys(&self, phase: PlayerPhase) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            Mode::Prompt => &[("Enter", "load"), ("Esc", "cancel"), ("Backspace", "delete")],
            Mode::Help => &[("any key", "close help")],
            Mode::Normal if phase == PlayerPhase::Empty => {
                &[("o", "open file"), ("s", "sample"), ("?", "help"), ("q", "quit")]
            }
            Mode::Normal => &[
                ("Space", "play/pause"),
                ("\u{2190}/\u{2192}", "seek"),
                ("Tab", "focus"),
                ("Enter", "jump"),
                ("o", "open"),
                ("?", "help"),
                ("q", "quit"),
            ],
        }
    }

    /// Release the source before exit.
    pub fn shutdown(&mut self) {
        self.controller.teardown();
    }
}

/// Browser bound to a live terminal.
pub struct BrowserApp<M: MediaElement> {
    app: App,
    browser: Browser<M>,
}

impl<M: MediaElement> BrowserApp<M> {
    pub fn new(app: App, browser: Browser<M>) -> Self {
        Self { app, browser }
    }

    /// Run until the user quits.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();
        self.browser.shutdown();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.browser.should_quit() {
            self.browser.tick();
            let browser = &mut self.browser;
            self.app.draw(|frame| browser.render(frame))?;
            if let Some(event) = self.app.next_event()? {
                self.browser.handle_event(event);
            }
        }
        Ok(())
    }
}
