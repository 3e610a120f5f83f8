//! Rendering for the player area and overlays.
//!
//! - `bar`: player view with play state and clock
//! - `help`: keyboard shortcut overlay

pub mod bar;
pub mod help;

pub use bar::{button_label, clock_text, PlayerView};
pub use help::{help_area, HelpOverlay, HELP_LINES};
