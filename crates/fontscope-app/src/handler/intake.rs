//! File intake handlers
//!
//! Drops, pastes and the path prompt all end in `handle_files_dropped`.

use std::path::PathBuf;

use fontscope_core::FileCandidate;
use tracing::{debug, warn};

use crate::message::Message;
use crate::paste;
use crate::session::DropOutcome;
use crate::state::{AppState, UiMode};

use super::UpdateResult;

/// Offer files to the session. Only the first path is considered.
pub fn handle_files_dropped(state: &mut AppState, paths: Vec<PathBuf>) -> UpdateResult {
    let Some(path) = paths.into_iter().next() else {
        return UpdateResult::none();
    };

    let candidate = match FileCandidate::from_path(&path) {
        Ok(candidate) => candidate,
        Err(e) => {
            warn!("Cannot select {}: {}", path.display(), e);
            state.session.set_error(e.to_string());
            return UpdateResult::none();
        }
    };

    let previews = state
        .settings
        .ui
        .show_preview
        .then_some(&state.previews);
    if state.session.handle_drop([candidate], previews) == DropOutcome::Accepted {
        state.result_view.reset();
    }
    UpdateResult::none()
}

/// Pasted text: file paths in normal mode, literal text in the path prompt
pub fn handle_paste(state: &mut AppState, text: String) -> UpdateResult {
    match state.ui_mode {
        UiMode::Normal => {
            let paths = paste::parse_paths(&text);
            if paths.is_empty() {
                debug!("Paste contained no paths");
                return UpdateResult::none();
            }
            UpdateResult::message(Message::FilesDropped { paths })
        }
        UiMode::PathInput => {
            state
                .path_input
                .extend(text.chars().filter(|c| *c != '\n' && *c != '\r'));
            UpdateResult::none()
        }
        UiMode::ConfirmDialog => UpdateResult::none(),
    }
}

pub fn handle_clear_selection(state: &mut AppState) -> UpdateResult {
    state.session.clear();
    state.result_view.reset();
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Path prompt
// ─────────────────────────────────────────────────────────

pub fn handle_open_path_input(state: &mut AppState) -> UpdateResult {
    state.open_path_input();
    UpdateResult::none()
}

pub fn handle_path_input_char(state: &mut AppState, c: char) -> UpdateResult {
    state.path_input.push(c);
    UpdateResult::none()
}

pub fn handle_path_input_backspace(state: &mut AppState) -> UpdateResult {
    state.path_input.pop();
    UpdateResult::none()
}

pub fn handle_path_input_clear(state: &mut AppState) -> UpdateResult {
    state.path_input.clear();
    UpdateResult::none()
}

pub fn handle_submit_path_input(state: &mut AppState) -> UpdateResult {
    let path = paste::parse_single_path(&state.path_input);
    state.close_path_input();

    match path {
        Some(path) => UpdateResult::message(Message::FilesDropped { paths: vec![path] }),
        None => UpdateResult::none(),
    }
}

pub fn handle_cancel_path_input(state: &mut AppState) -> UpdateResult {
    state.close_path_input();
    UpdateResult::none()
}
