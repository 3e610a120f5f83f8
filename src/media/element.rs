//! The media element seam.
//!
//! The controller talks to playback only through [`MediaElement`]; the
//! element reports progress back as [`MediaEvent`]s drained once per tick.

use super::source::SourceHandle;

/// Longest duration accepted from a container or the config (100 hours).
pub const MAX_DURATION_SECS: f64 = 360_000.0;

/// Whether `duration` is usable as a media length.
pub fn is_valid_duration(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0 && duration <= MAX_DURATION_SECS
}

/// Notifications from the media element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Duration became known
    LoadedMetadata { duration: f64 },
    /// Periodic position report while playing
    TimeUpdate { time: f64 },
    /// A pending play request started
    Playing,
    /// A pending play request failed
    PlayFailed { reason: String },
    /// Playback reached the end and stopped
    Ended,
}

/// How a play request was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Playback is running now
    Started,
    /// Playback will start later; a `Playing` or `PlayFailed` event follows
    Pending,
}

/// Errors reported synchronously by a media element.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MediaError {
    #[error("No media source loaded")]
    NoSource,

    #[error("Playback was rejected: {0}")]
    Rejected(String),
}

/// Platform media resource driven by the playback controller.
pub trait MediaElement {
    /// Attach a new source. Position resets to 0; metadata arrives later.
    fn load(&mut self, source: &SourceHandle);

    /// Detach the current source.
    fn unload(&mut self);

    fn play(&mut self) -> Result<PlayOutcome, MediaError>;

    fn pause(&mut self);

    /// Move the playback position.
    fn set_current_time(&mut self, time: f64);

    fn current_time(&self) -> f64;

    /// Drain notifications produced since the last call.
    fn poll_events(&mut self) -> Vec<MediaEvent>;
}
