//! Media playback seam and source handles.
//!
//! - `element`: the [`MediaElement`] trait the controller drives
//! - `clock`: [`ClockMedia`], a real-time element that does not decode
//! - `probe`: ISO BMFF duration probe
//! - `source`: [`SourceHandle`] and revocable object URLs

mod clock;
mod element;
pub mod probe;
mod source;

pub use clock::{Clock, ClockMedia, DurationHints, ManualClock, SystemClock};
pub use element::{
    is_valid_duration, MediaElement, MediaError, MediaEvent, PlayOutcome, MAX_DURATION_SECS,
};
pub use source::{ObjectUrl, ObjectUrlRegistry, SourceHandle};
