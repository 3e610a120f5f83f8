//! Timeline: time formatting, coordinate mapping, segments, and the track.
//!
//! # Architecture
//!
//! - `format`: `M:SS` / `MM:SS` display strings
//! - `mapping`: pure offset <-> time conversions and axis ticks
//! - `segment`: silent / highlighted time ranges
//! - `track`: hit testing, layout, and the ratatui widget

mod format;
mod mapping;
mod segment;
mod track;

pub use format::{format_clock, format_timestamp};
pub use mapping::{
    percentage_to_pixel, pixel_to_time, time_axis_ticks, time_to_column, time_to_percentage,
    AxisTick, AXIS_TICK_INTERVAL,
};
pub use segment::{SegmentKind, TimelineSegment};
pub use track::{
    Band, SliderState, TimelineTrack, TimelineWidget, TrackGeometry, TrackHit, TrackLayout,
    LOADING_PLACEHOLDER,
};
