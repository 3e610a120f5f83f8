//! Key moment and segment data for a browsing session.
//!
//! The built-in set mirrors a recorded talk: an introduction, a Q&A block,
//! and a conclusion. Either list can be replaced by a JSON file; once
//! loaded, the data is immutable for the rest of the session.

mod error;

pub use error::DataError;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::moments::KeyMoment;
use crate::timeline::{SegmentKind, TimelineSegment};

/// Moments and segments shown alongside the video.
#[derive(Debug, Clone, Default)]
pub struct SessionData {
    pub moments: Vec<KeyMoment>,
    pub segments: Vec<TimelineSegment>,
}

impl SessionData {
    /// The built-in data set.
    pub fn sample() -> Self {
        Self {
            moments: sample_moments(),
            segments: sample_segments(),
        }
    }

    /// Build session data, replacing the built-in lists with files when given.
    pub fn load(moments: Option<&Path>, segments: Option<&Path>) -> Result<Self, DataError> {
        let moments = match moments {
            Some(path) => load_moments(path)?,
            None => sample_moments(),
        };
        let segments = match segments {
            Some(path) => load_segments(path)?,
            None => sample_segments(),
        };
        Ok(Self { moments, segments })
    }
}

fn moment(id: &str, title: &str, description: &str, timestamp: f64, importance: u8) -> KeyMoment {
    KeyMoment {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        timestamp,
        importance,
    }
}

fn segment(id: &str, kind: SegmentKind, start: f64, end: f64, description: &str) -> TimelineSegment {
    TimelineSegment {
        id: id.to_string(),
        kind,
        start_time: start,
        end_time: end,
        description: Some(description.to_string()),
    }
}

/// Built-in key moments, ordered by timestamp.
pub fn sample_moments() -> Vec<KeyMoment> {
    vec![
        moment("1", "Introduction", "Speaker introduces the main topic and agenda", 15.0, 4),
        moment(
            "2",
            "Key Concept Explanation",
            "Detailed explanation of the core concept with visual aids",
            45.0,
            5,
        ),
        moment(
            "3",
            "First Example",
            "Practical example demonstrating the concept in action",
            78.0,
            4,
        ),
        moment(
            "4",
            "Q&A Session Begins",
            "Transition to audience questions and interactive discussion",
            120.0,
            3,
        ),
        moment(
            "5",
            "Important Question",
            "Audience asks about implementation challenges",
            145.0,
            4,
        ),
        moment(
            "6",
            "Technical Deep Dive",
            "Detailed technical explanation with code examples",
            180.0,
            5,
        ),
        moment(
            "7",
            "Best Practices",
            "Discussion of industry best practices and recommendations",
            220.0,
            4,
        ),
        moment("8", "Conclusion", "Summary of key points and next steps", 270.0, 3),
    ]
}

/// Built-in timeline segments.
pub fn sample_segments() -> Vec<TimelineSegment> {
    use SegmentKind::{Highlighted, Silent};

    vec![
        segment("s1", Silent, 0.0, 8.0, "Opening silence before presentation starts"),
        segment(
            "h1",
            Highlighted,
            15.0,
            65.0,
            "High engagement introduction and concept explanation",
        ),
        segment("s2", Silent, 95.0, 102.0, "Pause for slide transition"),
        segment(
            "h2",
            Highlighted,
            120.0,
            200.0,
            "Interactive Q&A session with high audience engagement",
        ),
        segment("s3", Silent, 250.0, 258.0, "Brief pause before conclusion"),
        segment("h3", Highlighted, 270.0, 290.0, "Strong conclusion with key takeaways"),
    ]
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load key moments from a JSON array, validating every entry.
///
/// File order is kept as the display order.
pub fn load_moments(path: &Path) -> Result<Vec<KeyMoment>, DataError> {
    let moments: Vec<KeyMoment> = read_json(path)?;
    for m in &moments {
        m.validate()?;
    }
    tracing::debug!(path = %path.display(), count = moments.len(), "Loaded key moments");
    Ok(moments)
}

/// Load timeline segments from a JSON array, validating every entry.
pub fn load_segments(path: &Path) -> Result<Vec<TimelineSegment>, DataError> {
    let segments: Vec<TimelineSegment> = read_json(path)?;
    for s in &segments {
        s.validate()?;
    }
    tracing::debug!(path = %path.display(), count = segments.len(), "Loaded timeline segments");
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn sample_data_is_valid() {
        let data = SessionData::sample();
        assert_eq!(data.moments.len(), 8);
        assert_eq!(data.segments.len(), 6);
        assert!(data.moments.iter().all(|m| m.validate().is_ok()));
        assert!(data.segments.iter().all(|s| s.validate().is_ok()));
    }

    #[test]
    fn sample_moments_are_ordered() {
        let moments = sample_moments();
        assert!(moments.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert_eq!(moments[4].title, "Important Question");
        assert_eq!(moments[4].timestamp, 145.0);
    }

    #[test]
    fn load_moments_reads_json_array() {
        let file = write_temp(
            r#"[{"id":"a","title":"Start","description":"d","timestamp":3,"importance":2}]"#,
        );
        let moments = load_moments(file.path()).unwrap();
        assert_eq!(moments.len(), 1);
        assert_eq!(moments[0].importance, 2);
    }

    #[test]
    fn load_moments_rejects_bad_importance() {
        let file = write_temp(
            r#"[{"id":"a","title":"t","description":"d","timestamp":3,"importance":9}]"#,
        );
        let err = load_moments(file.path()).unwrap_err();
        assert!(matches!(err, DataError::InvalidImportance { importance: 9, .. }));
    }

    #[test]
    fn load_segments_rejects_reversed_range() {
        let file = write_temp(r#"[{"id":"x","type":"silent","startTime":10,"endTime":4}]"#);
        assert!(matches!(
            load_segments(file.path()),
            Err(DataError::InvalidSegment { .. })
        ));
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let file = write_temp("not json");
        let err = load_moments(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON"));
    }

    #[test]
    fn session_data_load_falls_back_to_sample() {
        let data = SessionData::load(None, None).unwrap();
        assert_eq!(data.moments, sample_moments());
    }

    #[test]
    fn empty_moment_file_is_allowed() {
        let file = write_temp("[]");
        let data = SessionData::load(Some(file.path()), None).unwrap();
        assert!(data.moments.is_empty());
        assert_eq!(data.segments.len(), 6);
    }
}
