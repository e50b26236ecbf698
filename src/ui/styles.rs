//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Frame and layout
// =============================================================================

/// Site title in the header bar.
pub fn site_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Key hints in the header and status bar.
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Search and tips
// =============================================================================

/// Highlighted row in the suggestion and tips lists.
pub fn selected_item_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

pub fn content_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Fallback text shown when content could not be loaded.
pub fn content_error_style() -> Style {
    Style::default().fg(Color::Yellow)
}

// =============================================================================
// Inputs
// =============================================================================

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

// =============================================================================
// Assistant
// =============================================================================

pub fn user_speaker_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

pub fn bot_speaker_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

pub fn chat_text_style() -> Style {
    Style::default().fg(Color::White)
}
