//! Input handling for the browser.
//!
//! Translates crossterm keyboard and mouse events into actions and click
//! targets. Nothing here touches playback state.

mod keyboard;
mod mouse;

pub use keyboard::{key_action, KeyAction};
pub use mouse::{left_click, resolve_click, ClickTarget};
