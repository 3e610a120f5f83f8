//! TUI (Text User Interface) module for the browser
//!
//! This module provides terminal-based UI components using ratatui/crossterm.
//! The terminal stands in for the page: the player, the timeline, and the
//! key moments panel are drawn side by side and driven by keyboard and mouse.

pub mod app;
pub mod browser_app;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use browser_app::{Browser, BrowserApp};
