//! wowbank-tui - Terminal UI for the WowBank demo
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! update loop from wowbank-app and adds terminal rendering, event polling,
//! and widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod signals;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
