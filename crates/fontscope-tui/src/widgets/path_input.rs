//! Path prompt
//!
//! Modal text input for typing or pasting the path of a PDF.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::modal_overlay;
use crate::theme::styles;

const MODAL_WIDTH: u16 = 70;
const MODAL_HEIGHT: u16 = 6;
const CURSOR: &str = "█";

pub struct PathInput<'a> {
    input: &'a str,
}

impl<'a> PathInput<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Tail of the input that fits in `width` columns alongside the cursor
    fn visible_input(&self, width: usize) -> &'a str {
        let room = width.saturating_sub(CURSOR.width());
        let mut start = 0;
        for (i, _) in self.input.char_indices() {
            if self.input[i..].width() <= room {
                start = i;
                break;
            }
            start = self.input.len();
        }
        &self.input[start..]
    }
}

impl Widget for PathInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::clear_area(buf, modal_area);

        let block = styles::modal_block(" Open PDF ");
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let field_width = usize::from(inner.width - 2);
        let lines = vec![
            Line::from(Span::styled("Path to a PDF file:", styles::text_secondary())),
            Line::from(vec![
                Span::raw(" "),
                Span::styled(self.visible_input(field_width), styles::text_bright_bold()),
                Span::styled(CURSOR, styles::accent()),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" open  ", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled(" cancel  ", styles::text_muted()),
                Span::styled("Ctrl+U", styles::keybinding()),
                Span::styled(" clear", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
