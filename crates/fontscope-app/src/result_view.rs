//! Result view state - scroll position and viewport bounds.
//!
//! Shared by the handler layer (scroll commands) and the TUI layer, which
//! records the rendered content height and viewport height on every frame.

/// Scroll state of the results panel
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultViewState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Total number of rendered lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl ResultViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the rendered size and clamp the offset to it
    pub fn update_bounds(&mut self, total_lines: usize, visible_lines: usize) {
        self.total_lines = total_lines;
        self.visible_lines = visible_lines;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.page_size());
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.page_size());
    }

    /// Back to the top, e.g. when a new result arrives
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Whether content extends past the viewport
    pub fn is_scrollable(&self) -> bool {
        self.total_lines > self.visible_lines
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    fn page_size(&self) -> usize {
        self.visible_lines.saturating_sub(2).max(1)
    }
}
