//! Confirmation dialog widget for the quit prompt

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use fontscope_app::confirm_dialog::ConfirmDialogState;

use super::modal_overlay;
use crate::theme::styles;

const MODAL_WIDTH: u16 = 50;
const MODAL_HEIGHT: u16 = 7;

/// Key shown next to each dialog option, in order
const OPTION_KEYS: [&str; 2] = ["y", "n"];

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn buttons(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for (i, ((label, _), key)) in self.state.options.iter().zip(OPTION_KEYS).enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let key_style = if i == 0 {
                styles::status_green()
            } else {
                styles::status_red()
            };
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled("] ", styles::text_muted()));
            spans.push(Span::styled(label.as_str(), styles::text_primary()));
        }
        Line::from(spans)
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::clear_area(buf, modal_area);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(styles::status_yellow())
            .render(chunks[1], buf);

        Paragraph::new(self.buttons())
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}
