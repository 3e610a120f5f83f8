//! Labeled time ranges drawn as bands on the timeline.

use serde::{Deserialize, Serialize};

use crate::data::DataError;

/// Classification of a timeline segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Period with no speech or low audio
    Silent,
    /// Important or engaging content
    Highlighted,
}

impl SegmentKind {
    /// Lowercase name, as shown in tooltips and the legend.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Silent => "silent",
            Self::Highlighted => "highlighted",
        }
    }
}

/// A time range classified as silent or highlighted.
///
/// Segments may overlap; they are drawn in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSegment {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    pub start_time: f64,
    pub end_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TimelineSegment {
    /// Check `0 <= start_time < end_time`.
    pub fn validate(&self) -> Result<(), DataError> {
        let ordered = self.start_time.is_finite()
            && self.end_time.is_finite()
            && self.start_time >= 0.0
            && self.start_time < self.end_time;
        if ordered {
            Ok(())
        } else {
            Err(DataError::InvalidSegment {
                id: self.id.clone(),
                start: self.start_time,
                end: self.end_time,
            })
        }
    }

    /// Length of the segment in seconds.
    pub fn length(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Tooltip text, e.g. `silent segment: 0s - 8s`.
    pub fn summary(&self) -> String {
        format!(
            "{} segment: {}s - {}s",
            self.kind.name(),
            self.start_time,
            self.end_time
        )
    }
}
