//! Header bar widget
//!
//! Shows the application title and the analysis service address.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub const APP_TITLE: &str = "PDF Font Identifier";

/// Main header showing the title, the service address and a busy dot
pub struct MainHeader<'a> {
    api_url: &'a str,
    busy: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(api_url: &'a str) -> Self {
        Self {
            api_url,
            busy: false,
        }
    }

    /// Mark an analysis as running
    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::DEEPEST_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (dot, dot_style) = if self.busy {
            ("●", styles::status_yellow())
        } else {
            ("○", styles::text_muted())
        };

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(dot, dot_style),
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled("fontscope", styles::text_secondary()),
        ]);
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Service address on the right, when it fits
        let right = Line::from(vec![
            Span::styled("API ", styles::text_muted()),
            Span::styled(self.api_url, styles::text_secondary()),
            Span::raw(" "),
        ]);
        let right_width = right.width() as u16;
        if left_width + right_width + 2 <= inner.width {
            let x = inner.x + inner.width - right_width;
            buf.set_line(x, inner.y, &right, right_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_shows_title_and_api() {
        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, 80, 3);

        term.render_widget(MainHeader::new("http://localhost:5000"), area);

        assert!(term.buffer_contains("PDF Font Identifier"));
        assert!(term.buffer_contains("http://localhost:5000"));
    }

    #[test]
    fn test_header_drops_api_when_narrow() {
        let mut term = TestTerminal::with_size(40, 3);

        term.render_widget(MainHeader::new("http://localhost:5000"), term.area());

        assert!(term.buffer_contains("PDF Font Identifier"));
        assert!(!term.buffer_contains("localhost"));
    }
}
