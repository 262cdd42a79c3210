//! Semantic style builders for the Cyber-Glass theme.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

fn bold(color: Color) -> Style {
    fg(color).add_modifier(Modifier::BOLD)
}

// --- Text styles ---
pub fn text_primary() -> Style {
    fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    bold(palette::TEXT_BRIGHT)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    bold(palette::ACCENT)
}

// --- Status styles ---
pub fn status_green() -> Style {
    fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    fg(palette::STATUS_YELLOW)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - the highlighted variant button
pub fn focused_selected() -> Style {
    bold(palette::CONTRAST_FG).bg(palette::ACCENT)
}

/// Buttons that cannot be pressed right now
pub fn disabled() -> Style {
    fg(palette::TEXT_MUTED).add_modifier(Modifier::DIM)
}

// --- Report blocks ---
pub fn warning_block() -> Style {
    bold(palette::WARNING_FG)
}

pub fn subheading() -> Style {
    bold(palette::SUBHEADING_FG)
}

pub fn table_header() -> Style {
    bold(palette::TABLE_HEADER_FG)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_focused_selected_is_inverted() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_disabled_is_dimmed() {
        assert!(disabled().add_modifier.contains(Modifier::DIM));
    }
}
