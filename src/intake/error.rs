//! Media intake errors.

use std::path::PathBuf;

/// Reasons a file is refused by the media intake.
///
/// These never change playback state; the message is shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Please select a valid video file ({path} is {content_type})")]
    NotVideo {
        path: PathBuf,
        content_type: &'static str,
    },

    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Not a regular file: {path}")]
    NotAFile { path: PathBuf },
}
