//! Key moments and the panel that lists them.
//!
//! A moment is "active" while playback is within [`ACTIVE_WINDOW_SECS`] of
//! its timestamp. Several moments can be active at once when they sit close
//! together; no precedence is applied between them.

mod widget;

pub use widget::{importance_text, MomentsLayout, MomentsWidget, ITEM_HEIGHT};

use serde::{Deserialize, Serialize};

use crate::data::DataError;
use crate::player::Request;
use crate::timeline::format_timestamp;

/// Distance from a moment's timestamp (exclusive) within which it is active.
pub const ACTIVE_WINDOW_SECS: f64 = 2.0;

/// Number of cells in the importance indicator.
pub const IMPORTANCE_CELLS: usize = 5;

/// Placeholder shown when the session has no key moments.
pub const EMPTY_PLACEHOLDER: &str = "No key moments detected";

/// A curated, named timestamp of interest within a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMoment {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Position in seconds
    pub timestamp: f64,
    /// Rating from 1 to 5
    pub importance: u8,
}

impl KeyMoment {
    /// Check the timestamp is non-negative and importance is 1-5.
    pub fn validate(&self) -> Result<(), DataError> {
        if !(self.timestamp.is_finite() && self.timestamp >= 0.0) {
            return Err(DataError::InvalidTimestamp {
                id: self.id.clone(),
                timestamp: self.timestamp,
            });
        }
        if !(1..=IMPORTANCE_CELLS as u8).contains(&self.importance) {
            return Err(DataError::InvalidImportance {
                id: self.id.clone(),
                importance: self.importance,
            });
        }
        Ok(())
    }

    /// Whether playback at `current_time` is close enough to highlight this moment.
    pub fn is_active(&self, current_time: f64) -> bool {
        (current_time - self.timestamp).abs() < ACTIVE_WINDOW_SECS
    }

    /// Importance indicator: the first `importance` cells are filled.
    pub fn importance_cells(&self) -> [bool; IMPORTANCE_CELLS] {
        let mut cells = [false; IMPORTANCE_CELLS];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = i < self.importance as usize;
        }
        cells
    }
}

/// One row of the moments panel.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentItem<'a> {
    pub moment: &'a KeyMoment,
    pub timestamp_label: String,
    pub importance: [bool; IMPORTANCE_CELLS],
    pub active: bool,
}

/// Build the panel rows for the given playback position.
pub fn panel_items(moments: &[KeyMoment], current_time: f64) -> Vec<MomentItem<'_>> {
    moments
        .iter()
        .map(|moment| MomentItem {
            moment,
            timestamp_label: format_timestamp(moment.timestamp),
            importance: moment.importance_cells(),
            active: moment.is_active(current_time),
        })
        .collect()
}

/// Indices of every active moment, in list order.
pub fn active_indices(moments: &[KeyMoment], current_time: f64) -> Vec<usize> {
    moments
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is_active(current_time))
        .map(|(i, _)| i)
        .collect()
}

/// Keyboard selection state for the moments panel.
///
/// Holds only the cursor; the moments themselves are passed in on each
/// call so the panel never owns session data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MomentsPanel {
    selected: usize,
}

impl MomentsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the selected row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the cursor down, wrapping to the top.
    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn select_prev(&mut self, len: usize) {
        if len > 0 {
            self.selected = if self.selected == 0 {
                len - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Request a seek to the moment at `index`.
    ///
    /// The seek targets the exact timestamp and never goes through the
    /// track's coordinate mapping.
    pub fn activate(&mut self, moments: &[KeyMoment], index: usize) -> Option<Request> {
        let moment = moments.get(index)?;
        self.selected = index;
        Some(Request::Seek(moment.timestamp))
    }

    /// Request a seek to the selected moment.
    pub fn activate_selected(&mut self, moments: &[KeyMoment]) -> Option<Request> {
        self.activate(moments, self.selected)
    }
}
