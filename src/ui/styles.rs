//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Panel chrome
// =============================================================================

/// Border style for the panel that owns keyboard focus.
pub fn active_panel_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Border style for panels without focus.
pub fn inactive_panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for field labels like "Address:".
pub fn label_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for field values next to their labels.
pub fn value_style() -> Style {
    Style::default().fg(Color::White)
}

// =============================================================================
// Wallet panel
// =============================================================================

/// Style for the "Connected" session status.
pub fn connected_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Style for the "Disconnected" session status.
pub fn disconnected_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for a wallet connect failure reason.
pub fn session_error_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Style for the native balance value.
pub fn balance_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Badge color for a network name, keyed by chain id.
pub fn network_badge_style(chain_id: u64) -> Style {
    let color = match chain_id {
        1 => Color::Blue,
        11155111 => Color::Yellow,
        137 => Color::Magenta,
        10 => Color::Red,
        42161 | 8453 => Color::Blue,
        _ => Color::Gray,
    };
    Style::default().fg(color)
}

// =============================================================================
// Token list
// =============================================================================

/// Style for token ticker symbols.
pub fn token_symbol_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style for token display names.
pub fn token_name_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Board panel and banners
// =============================================================================

/// Style for the board message text.
pub fn message_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for the "No message available" placeholder.
pub fn message_missing_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for in-flight write progress ("Sending transaction...").
pub fn pending_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Style for transaction hashes.
pub fn tx_hash_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the error banner.
pub fn error_banner_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Style for the success notice banner.
pub fn notice_banner_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Style for one-shot flash notes ("Address copied").
pub fn flash_style() -> Style {
    Style::default().fg(Color::Yellow)
}

// =============================================================================
// Draft input
// =============================================================================

/// Style for the "> " prompt before the draft text.
pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Style for the draft text itself.
pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for input placeholder and hint text.
pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
