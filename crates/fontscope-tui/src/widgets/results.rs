//! Results panel
//!
//! Lays a [`Report`] out as terminal lines, wrapped to the panel width,
//! and renders a scrolled window of them.

use fontscope_core::{Report, ReportBlock};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::styles;

const EMPTY_HINT: &str = "Select a PDF and run an analysis to see its fonts here.";

/// Lay out a report for a panel `width` columns wide
pub fn report_lines(report: &Report, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let mut lines = vec![Line::from(Span::styled(
        report.title.clone(),
        styles::accent_bold(),
    ))];

    if let Some(filename) = &report.filename {
        lines.push(Line::from(vec![
            Span::styled("File: ", styles::text_bright_bold()),
            Span::styled(filename.clone(), styles::text_primary()),
        ]));
    }

    for section in &report.sections {
        lines.push(Line::default());
        if let Some(heading) = &section.heading {
            lines.push(Line::from(Span::styled(
                heading.clone(),
                styles::text_bright_bold().add_modifier(Modifier::UNDERLINED),
            )));
        }
        for block in &section.blocks {
            push_block(&mut lines, block, width);
        }
    }

    lines
}

fn push_block(lines: &mut Vec<Line<'static>>, block: &ReportBlock, width: usize) {
    match block {
        ReportBlock::Warning(text) => push_wrapped(lines, text, width, "⚠ ", styles::warning_block()),
        ReportBlock::Subheading(text) => {
            lines.push(Line::from(Span::styled(text.clone(), styles::subheading())));
        }
        ReportBlock::Preformatted(text) => {
            for source_line in text.lines() {
                push_wrapped(lines, source_line, width, "  ", styles::text_primary());
            }
        }
        ReportBlock::Note(text) => push_wrapped(lines, text, width, "", styles::text_primary()),
        ReportBlock::Muted(text) => push_wrapped(lines, text, width, "", styles::text_muted()),
        ReportBlock::Item(text) => push_wrapped(lines, text, width, "• ", styles::text_primary()),
        ReportBlock::Fields(fields) => {
            let mut spans = vec![Span::styled("• ", styles::text_muted())];
            for (i, (label, value)) in fields.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" | ", styles::text_muted()));
                }
                spans.push(Span::styled(format!("{}: ", label), styles::text_secondary()));
                spans.push(Span::styled(value.clone(), styles::text_primary()));
            }
            lines.push(Line::from(spans));
        }
        ReportBlock::Table { headers, rows } => push_table(lines, headers, rows),
    }
}

fn push_table(lines: &mut Vec<Line<'static>>, headers: &[String], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.width());
            }
        }
    }

    let format_row = |cells: &[String], style: Style| -> Line<'static> {
        let mut spans = Vec::new();
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let padding = width.saturating_sub(cell.width());
            spans.push(Span::styled(format!("{}{}", cell, " ".repeat(padding)), style));
        }
        Line::from(spans)
    };

    lines.push(format_row(headers, styles::table_header()));
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    lines.push(Line::from(Span::styled(rule.join("─┼─"), styles::text_muted())));
    for row in rows {
        lines.push(format_row(row, styles::text_primary()));
    }
}

/// Word-wrap `text` into lines of at most `width` columns, the first line
/// starting with `prefix` and the rest indented to match
fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    width: usize,
    prefix: &str,
    style: Style,
) {
    let indent = " ".repeat(prefix.width());
    let available = width.saturating_sub(prefix.width()).max(1);

    for (i, chunk) in wrap(text, available).into_iter().enumerate() {
        let lead = if i == 0 { prefix.to_string() } else { indent.clone() };
        lines.push(Line::from(vec![
            Span::styled(lead, style),
            Span::styled(chunk, style),
        ]));
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split(' ') {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
            continue;
        }

        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
            current_width = 0;
        }

        // Hard-split words wider than the line
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > width && !current.is_empty() {
                out.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
    }

    out.push(current);
    out
}

/// Scrollable results panel
pub struct ResultsPanel<'a> {
    lines: &'a [Line<'static>],
    offset: usize,
    scrollable: bool,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(lines: &'a [Line<'static>]) -> Self {
        Self {
            lines,
            offset: 0,
            scrollable: false,
        }
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Show the scroll position in the border
    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    /// Inner area the lines are laid out in
    pub fn inner(area: Rect) -> Rect {
        styles::glass_block(false).inner(area)
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(!self.lines.is_empty()).title(" Results ");
        if self.scrollable {
            let end = (self.offset + usize::from(Self::inner(area).height)).min(self.lines.len());
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" {}-{}/{} ", self.offset + 1, end, self.lines.len()),
                    styles::text_muted(),
                ))
                .right_aligned(),
            );
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.lines.is_empty() {
            Paragraph::new(Span::styled(EMPTY_HINT, styles::text_muted())).render(inner, buf);
            return;
        }

        let visible: Vec<Line> = self
            .lines
            .iter()
            .skip(self.offset)
            .take(usize::from(inner.height))
            .cloned()
            .collect();
        Paragraph::new(visible).render(inner, buf);
    }
}
