//! Terminal UI module with ratatui
//!
//! This module provides the display surface for student-roster: a trait-based renderer, the
//! view state it draws, and the ratatui implementation.

pub mod renderer;
pub mod state;
pub mod terminal;
pub mod theme;

// Re-export public API
pub use crate::input::{InputAction, InputMode, InputService};
pub use ratatui::style::{Color, Style};
pub use renderer::UIRenderer;
pub use state::{Modal, StatusLine, ViewState};
pub use terminal::TerminalUI;
pub use theme::ColorTheme;

#[cfg(test)]
pub use renderer::tests::{MockUIRenderer, RenderSnapshot};
