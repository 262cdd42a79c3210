//! Status line: upload progress while a request runs, otherwise the
//! current error message

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Widget},
};

use crate::theme::{palette, styles};

pub enum StatusLine<'a> {
    Progress(u8),
    Error(&'a str),
    Idle,
}

impl<'a> StatusLine<'a> {
    pub fn new(in_flight: bool, progress: u8, error: Option<&'a str>) -> Self {
        if in_flight {
            StatusLine::Progress(progress)
        } else if let Some(error) = error {
            StatusLine::Error(error)
        } else {
            StatusLine::Idle
        }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        match self {
            StatusLine::Progress(percent) => {
                let percent = percent.min(100);
                let label = if percent < 100 {
                    format!("Uploading {}%", percent)
                } else {
                    "Upload complete, waiting for analysis...".to_string()
                };
                Gauge::default()
                    .gauge_style(
                        Style::default()
                            .fg(palette::STATUS_BLUE)
                            .bg(palette::DEEPEST_BG),
                    )
                    .percent(u16::from(percent))
                    .label(Span::styled(label, styles::text_bright_bold()))
                    .render(area, buf);
            }
            StatusLine::Error(message) => {
                let line = Line::from(vec![
                    Span::styled(" ✗ ", styles::status_red()),
                    Span::styled(message, styles::status_red()),
                ]);
                buf.set_line(area.x, area.y, &line, area.width);
            }
            StatusLine::Idle => {}
        }
    }
}
