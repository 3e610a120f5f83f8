//! Moments command: print the key moments list without the TUI.

use std::path::PathBuf;

use anyhow::Result;

use vtb::data::{load_moments, sample_moments};
use vtb::moments::{importance_text, panel_items, EMPTY_PLACEHOLDER};
use vtb::theme::current_theme;
use vtb::Config;

/// Print key moments, marking those active at `at`.
pub fn handle(moments_file: Option<PathBuf>, at: Option<f64>, json: bool) -> Result<()> {
    let config = Config::load()?;
    let moments = match moments_file.or(config.data.moments_file) {
        Some(path) => load_moments(&path)?,
        None => sample_moments(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&moments)?);
        return Ok(());
    }

    let theme = current_theme();
    if moments.is_empty() {
        println!("{}", theme.secondary_text(EMPTY_PLACEHOLDER));
        return Ok(());
    }

    let current_time = at.unwrap_or(-f64::INFINITY);
    for item in panel_items(&moments, current_time) {
        let marker = if item.active { "▶" } else { " " };
        println!(
            "{} {}  {}  {}",
            theme.accent_text(marker),
            theme.accent_text(&format!("{:>6}", item.timestamp_label)),
            theme.primary_text(&item.moment.title),
            theme.secondary_text(&importance_text(&item.importance)),
        );
        println!("           {}", theme.secondary_text(&item.moment.description));
    }
    Ok(())
}
