//! Errors raised while loading moment and segment data.

use std::path::PathBuf;

/// Errors that can occur while loading or validating timeline data.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Key moment '{id}' has importance {importance} (expected 1-5)")]
    InvalidImportance { id: String, importance: u8 },

    #[error("Key moment '{id}' has negative timestamp {timestamp}")]
    InvalidTimestamp { id: String, timestamp: f64 },

    #[error("Segment '{id}' has invalid range {start}s - {end}s")]
    InvalidSegment { id: String, start: f64, end: f64 },
}
