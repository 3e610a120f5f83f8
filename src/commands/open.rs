//! Open command: start the interactive browser.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use vtb::data::SessionData;
use vtb::intake::MediaIntake;
use vtb::media::{ClockMedia, DurationHints, ObjectUrlRegistry};
use vtb::player::{PlaybackController, Request};
use vtb::theme::Theme;
use vtb::tui::{App, Browser, BrowserApp};
use vtb::Config;

/// Arguments shared by `vtb` and `vtb open`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OpenArgs {
    /// Video file to load on start
    #[arg(value_name = "FILE", conflicts_with = "sample")]
    pub file: Option<PathBuf>,

    /// Start with the built-in sample video
    #[arg(long)]
    pub sample: bool,

    /// JSON file with key moments (replaces the built-in list)
    #[arg(long, value_name = "PATH")]
    pub moments: Option<PathBuf>,

    /// JSON file with timeline segments (replaces the built-in list)
    #[arg(long, value_name = "PATH")]
    pub segments: Option<PathBuf>,
}

/// Run the browser until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: OpenArgs) -> Result<()> {
    let config = Config::load()?;
    let log_file = vtb::logging::init(&config.logging)?;

    let moments_file = args.moments.or(config.data.moments_file.clone());
    let segments_file = args.segments.or(config.data.segments_file.clone());
    let data = SessionData::load(moments_file.as_deref(), segments_file.as_deref())
        .context("Failed to load session data")?;
    tracing::info!(
        moments = data.moments.len(),
        segments = data.segments.len(),
        log_file = ?log_file,
        "Session data ready"
    );

    let playback = &config.playback;
    let intake = MediaIntake::new(ObjectUrlRegistry::new(), playback.sample_source.clone());
    let media = ClockMedia::new(DurationHints {
        sample: playback.sample_duration_secs,
        fallback: playback.fallback_duration_secs,
    });
    let mut controller = PlaybackController::new(media);

    // Reject a bad file before taking over the terminal
    if let Some(file) = args.file {
        controller.handle_request(Request::Upload(file), &intake)?;
    } else if args.sample {
        controller.handle_request(Request::LoadSample, &intake)?;
    }

    let browser = Browser::new(
        controller,
        intake,
        data,
        Theme::by_name(&config.ui.theme),
        playback.seek_step_secs,
    );
    let app = App::new(Duration::from_millis(playback.tick_rate_ms))?;
    BrowserApp::new(app, browser).run()
}
