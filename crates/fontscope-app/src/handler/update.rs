//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{analysis, intake, keys::handle_key, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste(text) => intake::handle_paste(state, text),

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // File Intake
        // ─────────────────────────────────────────────────────────
        Message::FilesDropped { paths } => intake::handle_files_dropped(state, paths),
        Message::ClearSelection => intake::handle_clear_selection(state),

        Message::OpenPathInput => intake::handle_open_path_input(state),
        Message::PathInputChar(c) => intake::handle_path_input_char(state, c),
        Message::PathInputBackspace => intake::handle_path_input_backspace(state),
        Message::PathInputClear => intake::handle_path_input_clear(state),
        Message::SubmitPathInput => intake::handle_submit_path_input(state),
        Message::CancelPathInput => intake::handle_cancel_path_input(state),

        // ─────────────────────────────────────────────────────────
        // Analysis
        // ─────────────────────────────────────────────────────────
        Message::SelectVariant(variant) => analysis::handle_select_variant(state, variant),
        Message::NextVariant => analysis::handle_next_variant(state),
        Message::PrevVariant => analysis::handle_prev_variant(state),

        Message::Analyze { variant } => analysis::handle_analyze(state, variant),
        Message::AnalyzeSelected => analysis::handle_analyze_selected(state),
        Message::UploadProgress {
            generation,
            percent,
        } => analysis::handle_upload_progress(state, generation, percent),
        Message::AnalysisCompleted {
            generation,
            variant,
            result,
        } => analysis::handle_analysis_completed(state, generation, variant, result),
        Message::AnalysisFailed {
            generation,
            variant,
            message,
        } => analysis::handle_analysis_failed(state, generation, variant, message),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
    }
}
