//! Playback controller and player views
//!
//! Owns the authoritative playback state and mediates between the media
//! element and the views that display it.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: PlaybackState snapshot, PlayerPhase, and view Requests
//! - `controller`: PlaybackController, the single writer of the state
//! - `input/`: Keyboard and mouse input mapping
//! - `render/`: Player view and help overlay
//!
//! # Usage
//!
//! ```
//! use vtb::media::{ClockMedia, DurationHints, ManualClock, SourceHandle};
//! use vtb::player::{PlaybackController, PlayerPhase};
//!
//! let media = ClockMedia::with_clock(ManualClock::new(), DurationHints::default());
//! let mut controller = PlaybackController::new(media);
//! controller.load_source(SourceHandle::Sample { url: "sample://demo".into() });
//! assert_eq!(controller.phase(), PlayerPhase::Loading);
//!
//! controller.poll_media();
//! assert!(controller.seek(145.0));
//! assert_eq!(controller.snapshot().current_time, 145.0);
//! ```

mod controller;
pub mod input;
pub mod render;
pub mod state;

pub use controller::PlaybackController;
pub use state::{PlaybackState, PlayerPhase, Request};
