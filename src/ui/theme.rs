//! Color theme and styling definitions using ratatui colors
//!
//! This module provides color themes for terminal rendering using ratatui's
//! color system directly to avoid unnecessary abstractions.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Table column headings
    pub header: Style,

    /// Selected table row
    pub selection: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,

    /// Key hint line
    pub hints: Style,

    /// Dialog border and title
    pub dialog_border: Style,

    /// Focused input field
    pub focused_field: Style,

    /// Read-only input field
    pub read_only_field: Style,

    /// Error alert border and text
    pub error_text: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            selection: Style::default().fg(Color::White).bg(Color::Blue),
            status_bg: Color::Blue,
            status_fg: Color::White,
            hints: Style::default().fg(Color::DarkGray),
            dialog_border: Style::default().fg(Color::Cyan),
            focused_field: Style::default().fg(Color::Black).bg(Color::Cyan),
            read_only_field: Style::default().fg(Color::DarkGray),
            error_text: Color::Red,
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            header: Style::default().add_modifier(Modifier::BOLD),
            selection: Style::default().add_modifier(Modifier::REVERSED),
            status_bg: Color::Black,
            status_fg: Color::White,
            hints: Style::default(),
            dialog_border: Style::default(),
            focused_field: Style::default().add_modifier(Modifier::REVERSED),
            read_only_field: Style::default().add_modifier(Modifier::DIM),
            error_text: Color::White,
        }
    }

    /// Create a high-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            header: Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            selection: Style::default().fg(Color::Black).bg(Color::LightYellow),
            status_bg: Color::White,
            status_fg: Color::Black,
            hints: Style::default().fg(Color::White),
            dialog_border: Style::default().fg(Color::LightYellow),
            focused_field: Style::default().fg(Color::Black).bg(Color::LightYellow),
            read_only_field: Style::default().fg(Color::Gray),
            error_text: Color::LightRed,
        }
    }

    /// Theme selected by configuration
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self::default(),
            ThemeName::Monochrome => Self::monochrome(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }
}
