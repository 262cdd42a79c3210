//! Analysis lifecycle handlers
//!
//! Submitting produces an `UpdateAction::RunAnalysis`; the background task
//! reports back with messages tagged by the request's generation.

use fontscope_core::{AnalysisResult, AnalysisVariant};
use tracing::{debug, info, warn};

use crate::session::SubmitRejection;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_analyze(state: &mut AppState, variant: AnalysisVariant) -> UpdateResult {
    state.selected_variant = variant;

    match state.session.begin_request(variant) {
        Ok(ticket) => {
            info!(
                "Starting {} for {} (generation {})",
                variant, ticket.file.name, ticket.generation
            );
            UpdateResult::action(UpdateAction::RunAnalysis(ticket))
        }
        Err(SubmitRejection::NoFile) => {
            debug!("{} requested without a file", variant);
            UpdateResult::none()
        }
        Err(SubmitRejection::Busy) => {
            debug!("{} ignored, a request is already in flight", variant);
            UpdateResult::none()
        }
    }
}

pub fn handle_analyze_selected(state: &mut AppState) -> UpdateResult {
    let variant = state.selected_variant;
    handle_analyze(state, variant)
}

pub fn handle_upload_progress(state: &mut AppState, generation: u64, percent: u8) -> UpdateResult {
    state.session.apply_progress(generation, percent);
    UpdateResult::none()
}

pub fn handle_analysis_completed(
    state: &mut AppState,
    generation: u64,
    variant: AnalysisVariant,
    result: AnalysisResult,
) -> UpdateResult {
    if state.session.complete(generation, result) {
        info!("{} completed (generation {})", variant, generation);
        state.result_view.reset();
    }
    UpdateResult::none()
}

pub fn handle_analysis_failed(
    state: &mut AppState,
    generation: u64,
    variant: AnalysisVariant,
    message: String,
) -> UpdateResult {
    warn!("{} failed (generation {}): {}", variant, generation, message);
    state.session.fail(generation, message);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Variant bar
// ─────────────────────────────────────────────────────────

pub fn handle_select_variant(state: &mut AppState, variant: AnalysisVariant) -> UpdateResult {
    state.selected_variant = variant;
    UpdateResult::none()
}

pub fn handle_next_variant(state: &mut AppState) -> UpdateResult {
    state.selected_variant = state.selected_variant.next();
    UpdateResult::none()
}

pub fn handle_prev_variant(state: &mut AppState) -> UpdateResult {
    state.selected_variant = state.selected_variant.prev();
    UpdateResult::none()
}
