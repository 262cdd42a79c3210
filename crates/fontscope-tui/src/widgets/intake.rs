//! File intake panel
//!
//! Shows the selected file with its size and preview, or how to pick one.

use fontscope_app::session::SelectedFile;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub const DROP_HINT: &str = "Drop a PDF file here, or press o to browse";

pub struct IntakePanel<'a> {
    selected: Option<&'a SelectedFile>,
}

impl<'a> IntakePanel<'a> {
    pub fn new(selected: Option<&'a SelectedFile>) -> Self {
        Self { selected }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let Some(selected) = self.selected else {
            return vec![
                Line::from(Span::styled(DROP_HINT, styles::text_primary())),
                Line::from(Span::styled(
                    "Paste or type a path; only PDF files are accepted",
                    styles::text_muted(),
                )),
            ];
        };

        let file = &selected.candidate;
        let mut lines = vec![Line::from(vec![
            Span::styled("Selected file: ", styles::text_secondary()),
            Span::styled(file.name.as_str(), styles::text_bright_bold()),
            Span::styled(format!(" ({})", file.display_size()), styles::text_secondary()),
        ])];

        if let Some(preview) = selected.preview() {
            lines.push(Line::from(vec![
                Span::styled("Preview: ", styles::text_muted()),
                Span::styled(preview.info().summary(), styles::status_green()),
            ]));
        } else if let Some(error) = selected.preview_error() {
            lines.push(Line::from(Span::styled(error, styles::status_red())));
        }

        lines.push(Line::from(Span::styled(
            file.path.display().to_string(),
            styles::text_muted(),
        )));
        lines
    }
}

impl Widget for IntakePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.selected.is_some()).title(" Select PDF File ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(self.lines()).render(inner, buf);
    }
}
