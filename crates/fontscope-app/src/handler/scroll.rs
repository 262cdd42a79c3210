//! Scroll message handlers for the results panel

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.result_view.scroll_up(1);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.result_view.scroll_down(1);
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.result_view.scroll_to_top();
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.result_view.scroll_to_bottom();
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.result_view.page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.result_view.page_down();
    UpdateResult::none()
}
