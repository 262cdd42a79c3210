//! Rendering helpers for widget and full-screen tests
//!
//! Wraps a ratatui `TestBackend` terminal and exposes its buffer as text.

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// A terminal that renders into memory
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.terminal.backend().buffer().area
    }

    /// Render one widget into `area`
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("render widget");
    }

    /// Draw a whole frame, e.g. with `render::view`
    pub fn draw_with<F: FnOnce(&mut Frame)>(&mut self, f: F) {
        self.terminal.draw(f).expect("draw frame");
    }

    /// Text of row `y`, one symbol per cell
    pub fn row(&self, y: u16) -> String {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    /// Every row, newline separated
    pub fn content(&self) -> String {
        let height = self.terminal.backend().buffer().area.height;
        (0..height)
            .map(|y| self.row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
