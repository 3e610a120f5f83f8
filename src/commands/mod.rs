//! Command handlers for the vtb binary.

pub mod config;
pub mod moments;
pub mod open;
