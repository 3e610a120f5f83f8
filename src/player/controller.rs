//! Playback controller.
//!
//! The single writer of [`PlaybackState`]. Views hold a snapshot and send
//! [`Request`]s; the controller applies them to the media element and
//! mirrors back what the element reports.

use crate::intake::{IntakeError, MediaIntake};
use crate::media::{is_valid_duration, MediaElement, MediaEvent, PlayOutcome, SourceHandle};
use crate::player::state::{PlaybackState, PlayerPhase, Request};

/// Orchestrates the media element, source handle, and playback state.
#[derive(Debug)]
pub struct PlaybackController<M: MediaElement> {
    media: M,
    source: Option<SourceHandle>,
    state: PlaybackState,
    /// A play request the element accepted but has not confirmed yet
    play_pending: bool,
    /// User-visible advisory from the last failure
    notice: Option<String>,
}

impl<M: MediaElement> PlaybackController<M> {
    pub fn new(media: M) -> Self {
        Self {
            media,
            source: None,
            state: PlaybackState::reset(),
            play_pending: false,
            notice: None,
        }
    }

    /// Read-only copy of the current state.
    pub fn snapshot(&self) -> PlaybackState {
        self.state
    }

    pub fn phase(&self) -> PlayerPhase {
        if self.source.is_none() {
            PlayerPhase::Empty
        } else if !self.state.has_duration() {
            PlayerPhase::Loading
        } else if self.state.is_playing {
            PlayerPhase::Playing
        } else {
            PlayerPhase::Paused
        }
    }

    pub fn source(&self) -> Option<&SourceHandle> {
        self.source.as_ref()
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    /// Whether a play request is waiting for confirmation.
    pub fn is_play_pending(&self) -> bool {
        self.play_pending
    }

    /// Take the pending user-visible advisory, if any.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Assign a new source, releasing the previous one.
    ///
    /// Position resets to 0 and playback stops; the controller is
    /// `Loading` until the element reports metadata.
    pub fn load_source(&mut self, source: SourceHandle) {
        self.media.pause();
        self.media.load(&source);
        tracing::info!(url = source.url(), "Source assigned");

        if let Some(previous) = self.source.replace(source) {
            tracing::debug!(url = previous.url(), "Releasing previous source");
        }
        self.state = PlaybackState::reset();
        self.play_pending = false;
    }

    /// Apply one notification from the media element.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        if self.source.is_none() {
            tracing::trace!(?event, "Ignoring media event without a source");
            return;
        }
        match event {
            MediaEvent::LoadedMetadata { duration } => {
                if is_valid_duration(duration) {
                    self.state.duration = duration;
                    self.state.current_time = self.state.current_time.clamp(0.0, duration);
                    tracing::info!(duration, "Metadata loaded");
                } else {
                    tracing::warn!(duration, "Ignoring unusable media duration");
                }
            }
            MediaEvent::TimeUpdate { time } => {
                self.state.current_time = self.clamp_time(time);
            }
            MediaEvent::Playing => {
                if self.play_pending {
                    self.play_pending = false;
                    self.state.is_playing = true;
                    tracing::debug!("Pending play confirmed");
                }
            }
            MediaEvent::PlayFailed { reason } => {
                self.play_pending = false;
                self.state.is_playing = false;
                tracing::warn!(%reason, "Playback failed");
                self.notice = Some(format!("Playback failed: {}", reason));
            }
            MediaEvent::Ended => {
                self.state.is_playing = false;
                self.state.current_time = self.state.duration;
                tracing::debug!("Playback ended");
            }
        }
    }

    /// Drain and apply everything the element reported since the last tick.
    pub fn poll_media(&mut self) {
        for event in self.media.poll_events() {
            self.handle_media_event(event);
        }
    }

    /// Seek to `time`. A no-op returning `false` until metadata is known.
    pub fn seek(&mut self, time: f64) -> bool {
        if !self.phase().is_ready() || !time.is_finite() {
            tracing::debug!(time, phase = ?self.phase(), "Seek ignored, not ready");
            return false;
        }
        let target = self.clamp_time(time);
        self.media.set_current_time(target);
        self.state.current_time = target;
        tracing::debug!(time = target, "Seek");
        true
    }

    /// Play if paused, pause if playing.
    ///
    /// Returns `false` when nothing changed: not ready, or a previous
    /// play request is still pending.
    pub fn toggle_playback(&mut self) -> bool {
        if !self.phase().is_ready() || self.play_pending {
            return false;
        }

        if self.state.is_playing {
            self.media.pause();
            self.state.current_time = self.clamp_time(self.media.current_time());
            self.state.is_playing = false;
            tracing::info!(time = self.state.current_time, "Paused");
            return true;
        }

        match self.media.play() {
            Ok(PlayOutcome::Started) => {
                self.state.is_playing = true;
                self.state.current_time = self.clamp_time(self.media.current_time());
                tracing::info!(time = self.state.current_time, "Playing");
                true
            }
            Ok(PlayOutcome::Pending) => {
                self.play_pending = true;
                tracing::debug!("Play requested, waiting for confirmation");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Play rejected");
                self.notice = Some(e.to_string());
                false
            }
        }
    }

    /// Apply a view request. Intake rejections leave the state untouched.
    pub fn handle_request(
        &mut self,
        request: Request,
        intake: &MediaIntake,
    ) -> Result<(), IntakeError> {
        match request {
            Request::Seek(time) => {
                self.seek(time);
            }
            Request::TogglePlayback => {
                self.toggle_playback();
            }
            Request::Upload(path) => {
                let source = intake.upload(&path)?;
                self.load_source(source);
            }
            Request::LoadSample => self.load_source(intake.sample()),
        }
        Ok(())
    }

    /// End the session: stop playback and release the source.
    pub fn teardown(&mut self) {
        if self.source.is_none() {
            return;
        }
        self.media.pause();
        self.media.unload();
        if let Some(source) = self.source.take() {
            tracing::info!(url = source.url(), "Session ended, releasing source");
        }
        self.state = PlaybackState::reset();
        self.play_pending = false;
    }

    fn clamp_time(&self, time: f64) -> f64 {
        if self.state.has_duration() {
            time.clamp(0.0, self.state.duration)
        } else {
            time.max(0.0)
        }
    }
}

impl<M: MediaElement> Drop for PlaybackController<M> {
    fn drop(&mut self) {
        self.teardown();
    }
}
