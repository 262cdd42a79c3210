//! Variant action bar
//!
//! One button per analysis variant plus Clear. Buttons render disabled
//! while nothing is selected or a request is outstanding.

use fontscope_core::AnalysisVariant;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub const ANALYZING_LABEL: &str = "Analyzing...";

pub struct VariantBar {
    highlighted: AnalysisVariant,
    has_file: bool,
    running: Option<AnalysisVariant>,
}

impl VariantBar {
    pub fn new(highlighted: AnalysisVariant) -> Self {
        Self {
            highlighted,
            has_file: false,
            running: None,
        }
    }

    pub fn has_file(mut self, has_file: bool) -> Self {
        self.has_file = has_file;
        self
    }

    /// The variant currently in flight, if any
    pub fn running(mut self, running: Option<AnalysisVariant>) -> Self {
        self.running = running;
        self
    }

    fn enabled(&self) -> bool {
        self.has_file && self.running.is_none()
    }

    fn button(&self, variant: AnalysisVariant) -> Vec<Span<'static>> {
        let label = if self.running == Some(variant) {
            ANALYZING_LABEL
        } else {
            variant.label()
        };
        let text = format!(" {} {} ", variant.index() + 1, label);

        let style = if self.running == Some(variant) {
            styles::status_yellow()
        } else if !self.enabled() {
            styles::disabled()
        } else if variant == self.highlighted {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };

        vec![Span::styled(text, style), Span::raw(" ")]
    }
}

impl Widget for VariantBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.enabled());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for variant in AnalysisVariant::ALL {
            spans.extend(self.button(variant));
        }
        spans.push(Span::styled(" c Clear ", styles::text_secondary()));

        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(bar: VariantBar) -> TestTerminal {
        let mut term = TestTerminal::with_size(120, 3);
        let area = term.area();
        term.render_widget(bar, area);
        term
    }

    #[test]
    fn test_all_variants_listed() {
        let term = render(VariantBar::new(AnalysisVariant::Basic).has_file(true));

        assert!(term.buffer_contains("1 Basic Analysis"));
        assert!(term.buffer_contains("2 Detailed Analysis"));
        assert!(term.buffer_contains("3 Advanced Analysis"));
        assert!(term.buffer_contains("4 OCR Analysis"));
        assert!(term.buffer_contains("c Clear"));
    }

    #[test]
    fn test_running_variant_shows_analyzing() {
        let term = render(
            VariantBar::new(AnalysisVariant::Basic)
                .has_file(true)
                .running(Some(AnalysisVariant::Advanced)),
        );

        assert!(term.buffer_contains("3 Analyzing..."));
        assert!(!term.buffer_contains("Advanced Analysis"));
    }

    #[test]
    fn test_highlighted_button_style() {
        let bar = VariantBar::new(AnalysisVariant::Detailed).has_file(true);

        assert_eq!(
            bar.button(AnalysisVariant::Detailed)[0].style,
            styles::focused_selected()
        );
        assert_eq!(
            bar.button(AnalysisVariant::Basic)[0].style,
            styles::text_primary()
        );
    }

    #[test]
    fn test_buttons_disabled_without_file() {
        let bar = VariantBar::new(AnalysisVariant::Basic);

        assert_eq!(bar.button(AnalysisVariant::Basic)[0].style, styles::disabled());
    }

    #[test]
    fn test_buttons_disabled_while_in_flight() {
        let bar = VariantBar::new(AnalysisVariant::Basic)
            .has_file(true)
            .running(Some(AnalysisVariant::Ocr));

        assert_eq!(bar.button(AnalysisVariant::Basic)[0].style, styles::disabled());
        assert_eq!(bar.button(AnalysisVariant::Ocr)[0].style, styles::status_yellow());
    }
}
