//! fontscope-tui - Terminal UI for fontscope
//!
//! Renders the shared [`fontscope_app::Engine`] state with ratatui and turns
//! key presses and bracketed pastes (how terminals deliver dropped files)
//! into messages.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
