//! Time formatting for the timeline, moments list, and player bar.

/// Split a seconds value into whole minutes and the remaining whole seconds.
///
/// Negative and non-finite input is treated as zero; fractional seconds
/// are truncated, never rounded.
fn split_minutes(seconds: f64) -> (u64, u64) {
    let total_secs = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    (total_secs / 60, total_secs % 60)
}

/// Format seconds as `M:SS` (minutes unpadded, seconds zero-padded).
///
/// # Examples
/// ```
/// use vtb::timeline::format_timestamp;
///
/// assert_eq!(format_timestamp(65.0), "1:05");
/// assert_eq!(format_timestamp(9.0), "0:09");
/// ```
pub fn format_timestamp(seconds: f64) -> String {
    let (mins, secs) = split_minutes(seconds);
    format!("{}:{:02}", mins, secs)
}

/// Format seconds as `MM:SS` for the player control bar.
pub fn format_clock(seconds: f64) -> String {
    let (mins, secs) = split_minutes(seconds);
    format!("{:02}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_timestamp_formats_correctly() {
        assert_eq!(format_timestamp(0.0), "0:00");
        assert_eq!(format_timestamp(9.0), "0:09");
        assert_eq!(format_timestamp(65.0), "1:05");
        assert_eq!(format_timestamp(600.0), "10:00");
        assert_eq!(format_timestamp(5999.0), "99:59");
    }

    #[test]
    fn format_timestamp_truncates_fractions() {
        assert_eq!(format_timestamp(0.9), "0:00");
        assert_eq!(format_timestamp(59.99), "0:59");
        assert_eq!(format_timestamp(119.5), "1:59");
    }

    #[test]
    fn format_timestamp_matches_floor_formula_over_range() {
        for t in 0..6000u64 {
            let expected = format!("{}:{:02}", t / 60, t % 60);
            assert_eq!(format_timestamp(t as f64), expected);
            assert_eq!(format_timestamp(t as f64 + 0.75), expected);
        }
    }

    #[test]
    fn negative_and_nan_treated_as_zero() {
        assert_eq!(format_timestamp(-5.0), "0:00");
        assert_eq!(format_timestamp(f64::NAN), "0:00");
        assert_eq!(format_clock(-1.0), "00:00");
    }

    #[test]
    fn format_clock_pads_minutes() {
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(65.0), "01:05");
        assert_eq!(format_clock(3661.0), "61:01");
    }
}
