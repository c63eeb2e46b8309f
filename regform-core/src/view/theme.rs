//! src/view/theme.rs
//! ============================================================================
//! # Theme Color Palette
//!
//! Color constants and style helpers for the registration form. The palette
//! is based on Catppuccin Mocha:
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const SURFACE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const CYAN: Color = Color::Rgb(137, 220, 235); // Sky
pub const GREEN: Color = Color::Rgb(166, 227, 161); // Green
pub const ORANGE: Color = Color::Rgb(250, 179, 135); // Peach
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const RED: Color = Color::Rgb(243, 139, 168); // Red
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow

pub fn label_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn required_style() -> Style {
    Style::default().fg(RED)
}

pub fn value_style() -> Style {
    Style::default().fg(FOREGROUND)
}

pub fn placeholder_style() -> Style {
    Style::default().fg(COMMENT).add_modifier(Modifier::ITALIC)
}

pub fn focused_style() -> Style {
    Style::default().bg(SURFACE).fg(CYAN)
}

pub fn checkbox_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(GREEN)
    } else {
        Style::default().fg(COMMENT)
    }
}

pub fn button_style(focused: bool, enabled: bool) -> Style {
    match (enabled, focused) {
        (false, _) => Style::default().fg(COMMENT).add_modifier(Modifier::DIM),
        (true, true) => Style::default()
            .bg(PURPLE)
            .fg(BACKGROUND)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(PURPLE),
    }
}

pub fn panel_border_style() -> Style {
    Style::default().fg(SURFACE)
}

pub fn title_style() -> Style {
    Style::default().fg(ORANGE).add_modifier(Modifier::BOLD)
}
