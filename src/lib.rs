//! Video Timeline Browser
//!
//! Load a video (or the built-in sample), see it laid out on a timeline
//! with silent and highlighted segments, and jump straight to key moments.

pub mod config;
pub mod data;
pub mod intake;
pub mod logging;
pub mod media;
pub mod moments;
pub mod player;
pub mod theme;
pub mod timeline;
pub mod tui;

pub use config::Config;
