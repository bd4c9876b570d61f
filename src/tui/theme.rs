//! Color scheme for the dashboard TUI.

use ratatui::style::Color;

/// Semantic colors for the dashboard.
///
/// The four metric colors mirror the badge palette of the hosted dashboard:
/// blue readability, yellow robustness, green efficiency, red security.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub primary: Color,
    pub accent: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,

    pub readability: Color,
    pub robustness: Color,
    pub efficiency: Color,
    pub security: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

const DARK: ColorScheme = ColorScheme {
    primary: Color::Cyan,
    accent: Color::Magenta,
    border: Color::DarkGray,
    text: Color::White,
    text_muted: Color::Gray,
    selection: Color::Indexed(237),

    readability: Color::Blue,
    robustness: Color::Yellow,
    efficiency: Color::Green,
    security: Color::Red,

    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
};

/// The active color scheme.
#[must_use]
pub const fn colors() -> &'static ColorScheme {
    &DARK
}
