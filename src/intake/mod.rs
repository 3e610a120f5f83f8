//! Media intake: turns a user file or the built-in sample into a source.
//!
//! A file is accepted only when its declared content type is `video/*`.
//! The declared type comes from the file extension, the same signal a
//! browser file picker provides.

mod error;

pub use error::IntakeError;

use std::path::Path;

use crate::media::{ObjectUrlRegistry, SourceHandle};

/// Well-known reference for the built-in sample video.
pub const DEFAULT_SAMPLE_SOURCE: &str = "sample://timeline-demo";

/// Content type used when the extension is unknown.
const OCTET_STREAM: &str = "application/octet-stream";

/// Extension to MIME type table.
const CONTENT_TYPES: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("mov", "video/quicktime"),
    ("webm", "video/webm"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
    ("ogv", "video/ogg"),
    ("mpeg", "video/mpeg"),
    ("mpg", "video/mpeg"),
    ("ts", "video/mp2t"),
    ("3gp", "video/3gpp"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("ogg", "audio/ogg"),
    ("txt", "text/plain"),
    ("json", "application/json"),
    ("pdf", "application/pdf"),
];

/// Declared content type for a path, from its extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    CONTENT_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(OCTET_STREAM)
}

/// Whether a content type denotes video.
pub fn is_video_type(content_type: &str) -> bool {
    content_type.starts_with("video/")
}

/// Produces source handles for the playback controller.
#[derive(Debug, Clone)]
pub struct MediaIntake {
    registry: ObjectUrlRegistry,
    sample_source: String,
}

impl MediaIntake {
    pub fn new(registry: ObjectUrlRegistry, sample_source: impl Into<String>) -> Self {
        Self {
            registry,
            sample_source: sample_source.into(),
        }
    }

    /// Registry holding the URLs this intake creates.
    pub fn registry(&self) -> &ObjectUrlRegistry {
        &self.registry
    }

    /// Accept a user-provided file.
    ///
    /// Non-video files are rejected before any URL is created.
    pub fn upload(&self, path: &Path) -> Result<SourceHandle, IntakeError> {
        let content_type = content_type_for(path);
        if !is_video_type(content_type) {
            tracing::warn!(path = %path.display(), content_type, "Rejected non-video file");
            return Err(IntakeError::NotVideo {
                path: path.to_path_buf(),
                content_type,
            });
        }

        let metadata = std::fs::metadata(path).map_err(|_| IntakeError::NotFound {
            path: path.to_path_buf(),
        })?;
        if !metadata.is_file() {
            return Err(IntakeError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let url = self.registry.create(path);
        tracing::info!(path = %path.display(), content_type, url = url.as_str(), "Accepted upload");
        Ok(SourceHandle::Upload {
            url,
            path: path.to_path_buf(),
            content_type,
        })
    }

    /// The fixed sample reference. No validation.
    pub fn sample(&self) -> SourceHandle {
        tracing::info!(url = %self.sample_source, "Loading sample video");
        SourceHandle::Sample {
            url: self.sample_source.clone(),
        }
    }
}
