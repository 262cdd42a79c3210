//! Key event handlers for different UI modes

use fontscope_core::AnalysisVariant;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::PathInput => handle_key_path_input(key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
    }
}

fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // File intake
        InputKey::Char('o' | '/') => Some(Message::OpenPathInput),
        InputKey::Char('c') => Some(Message::ClearSelection),

        // Variant bar
        InputKey::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            AnalysisVariant::from_index(index).map(|variant| Message::Analyze { variant })
        }
        InputKey::Right | InputKey::Tab | InputKey::Char('l') => Some(Message::NextVariant),
        InputKey::Left | InputKey::BackTab | InputKey::Char('h') => Some(Message::PrevVariant),
        InputKey::Enter => Some(Message::AnalyzeSelected),

        // Results
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        _ => None,
    }
}

fn handle_key_path_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelPathInput),
        InputKey::Enter => Some(Message::SubmitPathInput),
        InputKey::Backspace => Some(Message::PathInputBackspace),
        InputKey::CharCtrl('u') => Some(Message::PathInputClear),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::PathInputChar(c)),
        _ => None,
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        // 'q' allows double-tap "qq" as quick quit shortcut
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
