//! Reusable TUI widgets.

pub mod intake;

pub use intake::{IntakePanel, PathPrompt, INTAKE_HINT};
