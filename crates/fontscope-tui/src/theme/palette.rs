//! Color palette for the Cyber-Glass theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const POPUP_BG: Color = Color::DarkGray; // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Success/selected file
pub const STATUS_RED: Color = Color::Red; // Errors
pub const STATUS_YELLOW: Color = Color::Yellow; // Warnings/in-flight
pub const STATUS_BLUE: Color = Color::Blue; // Progress

// --- Report blocks ---
pub const WARNING_FG: Color = Color::LightRed; // OCR error block
pub const SUBHEADING_FG: Color = Color::LightCyan; // Page headings
pub const TABLE_HEADER_FG: Color = Color::Yellow;
