//! Player state types
//!
//! Contains the `PlaybackState` snapshot handed to every view, the phase
//! derived from it, and the `Request` type views use to ask for changes.

use std::path::PathBuf;

/// Snapshot of playback as seen by the views.
///
/// Only the controller writes these values; views receive a copy.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaybackState {
    /// Media duration in seconds; 0 while unknown
    pub duration: f64,
    /// Playback position in seconds, within `[0, duration]`
    pub current_time: f64,
    /// Whether the media is playing
    pub is_playing: bool,
}

impl PlaybackState {
    /// Fresh state for a newly assigned source.
    pub fn reset() -> Self {
        Self::default()
    }

    /// Duration is known, so seeking and playback are possible.
    pub fn has_duration(&self) -> bool {
        self.duration > 0.0
    }
}

/// Lifecycle phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerPhase {
    /// No source loaded
    Empty,
    /// Source assigned, waiting for metadata
    Loading,
    /// Ready and paused
    Paused,
    /// Ready and playing
    Playing,
}

impl PlayerPhase {
    /// Seeks and play/pause only apply in the ready phases.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Paused | Self::Playing)
    }
}

/// A change a view asks the controller to make.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Move the playback position (seconds)
    Seek(f64),
    /// Play if paused, pause if playing
    TogglePlayback,
    /// Load a user-provided file
    Upload(PathBuf),
    /// Load the built-in sample
    LoadSample,
}
