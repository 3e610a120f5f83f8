//! Coordinate mapping between track offsets and playback time.
//!
//! All functions are pure. A duration of zero means the media has not
//! reported metadata yet and no position can be mapped.

use super::format::format_timestamp;

/// Interval between time axis labels, in seconds.
pub const AXIS_TICK_INTERVAL: f64 = 10.0;

/// A label on the time axis above the track.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Time the tick marks
    pub time: f64,
    /// Position along the track (0..=100)
    pub percentage: f64,
    /// `M:SS` label
    pub label: String,
}

/// Convert a horizontal offset inside the track into a playback time.
///
/// Returns `None` when the track is not ready (unknown duration) or has
/// no width. The result is always within `[0, duration]`.
pub fn pixel_to_time(click_x: f64, track_width: f64, duration: f64) -> Option<f64> {
    if duration <= 0.0 || track_width <= 0.0 || !click_x.is_finite() {
        return None;
    }
    Some((click_x / track_width * duration).clamp(0.0, duration))
}

/// Position of a time along the track as a percentage.
pub fn time_to_percentage(time: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 0.0;
    }
    time / duration * 100.0
}

/// Horizontal offset of a percentage along a track of the given width.
pub fn percentage_to_pixel(percentage: f64, track_width: f64) -> f64 {
    percentage / 100.0 * track_width
}

/// Cell column where a time is drawn on a track `width` cells wide.
///
/// Times at or past the end land on the last column.
pub fn time_to_column(time: f64, duration: f64, width: u16) -> Option<u16> {
    if duration <= 0.0 || width == 0 {
        return None;
    }
    let pixel = percentage_to_pixel(time_to_percentage(time, duration), width as f64);
    let col = pixel.floor().clamp(0.0, (width - 1) as f64);
    Some(col as u16)
}

/// Time axis ticks every [`AXIS_TICK_INTERVAL`] seconds from 0 up to and
/// including `duration`.
pub fn time_axis_ticks(duration: f64) -> Vec<AxisTick> {
    if duration <= 0.0 || !duration.is_finite() {
        return Vec::new();
    }
    let count = (duration / AXIS_TICK_INTERVAL).floor() as u64;
    (0..=count)
        .map(|i| {
            let time = i as f64 * AXIS_TICK_INTERVAL;
            AxisTick {
                time,
                percentage: time_to_percentage(time, duration),
                label: format_timestamp(time),
            }
        })
        .collect()
}
