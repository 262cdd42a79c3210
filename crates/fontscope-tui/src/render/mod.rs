//! Main render/view function (View in TEA pattern)


use fontscope_app::state::{AppState, UiMode};
use fontscope_core::render_report;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Pure apart from the result view bounds, which record the rendered report
/// height so scrolling can clamp against it.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let session = &state.session;
    let in_flight = session.is_in_flight();

    frame.render_widget(
        widgets::MainHeader::new(&state.settings.api.base_url).busy(in_flight),
        areas.header,
    );

    frame.render_widget(
        widgets::IntakePanel::new(session.selected_file()),
        areas.intake,
    );

    frame.render_widget(
        widgets::VariantBar::new(state.selected_variant)
            .has_file(session.selected_file().is_some())
            .running(session.in_flight_variant()),
        areas.actions,
    );

    frame.render_widget(
        widgets::StatusLine::new(in_flight, session.upload_progress(), session.last_error()),
        areas.status,
    );

    // Results
    let inner = widgets::ResultsPanel::inner(areas.results);
    let lines = render_report(session.analysis_result())
        .map(|report| widgets::report_lines(&report, inner.width))
        .unwrap_or_default();
    state
        .result_view
        .update_bounds(lines.len(), usize::from(inner.height));
    frame.render_widget(
        widgets::ResultsPanel::new(&lines)
            .offset(state.result_view.offset)
            .scrollable(state.result_view.is_scrollable()),
        areas.results,
    );

    render_footer(frame, areas.footer, state);

    // Render modal overlays based on UI mode
    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::PathInput => {
            widgets::modal_overlay::dim_background(frame.buffer_mut(), area);
            frame.render_widget(widgets::PathInput::new(&state.path_input), area);
        }
        UiMode::ConfirmDialog => {
            if let Some(dialog_state) = &state.confirm_dialog_state {
                widgets::modal_overlay::dim_background(frame.buffer_mut(), area);
                frame.render_widget(widgets::ConfirmDialog::new(dialog_state), area);
            }
        }
    }
}

/// Key hints for the current mode
fn render_footer(frame: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let hints: &[(&str, &str)] = match state.ui_mode {
        UiMode::Normal if state.session.analysis_result().is_some() => &[
            ("o", "open"),
            ("1-4", "analyze"),
            ("←→", "variant"),
            ("↑↓", "scroll"),
            ("c", "clear"),
            ("q", "quit"),
        ],
        UiMode::Normal => &[
            ("o", "open"),
            ("1-4", "analyze"),
            ("←→", "variant"),
            ("Enter", "run"),
            ("c", "clear"),
            ("q", "quit"),
        ],
        UiMode::PathInput => &[("Enter", "open"), ("Esc", "cancel")],
        UiMode::ConfirmDialog => &[("y", "quit"), ("n", "cancel")],
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints {
        spans.push(Span::styled(*key, styles::keybinding()));
        spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
    }
    frame
        .buffer_mut()
        .set_line(area.x, area.y, &Line::from(spans), area.width);
}
