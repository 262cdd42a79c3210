//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar
    pub header: Rect,

    /// Selected file, preview and intake hints
    pub intake: Rect,

    /// Variant buttons
    pub actions: Rect,

    /// Upload progress or the current error
    pub status: Rect,

    /// Rendered report (scrollable)
    pub results: Rect,

    /// Key hints
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Length(5), // Intake panel: border + 3 rows
        Constraint::Length(3), // Variant bar
        Constraint::Length(1), // Status line
        Constraint::Min(3),    // Results
        Constraint::Length(1), // Footer
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        intake: chunks[1],
        actions: chunks[2],
        status: chunks[3],
        results: chunks[4],
        footer: chunks[5],
    }
}
