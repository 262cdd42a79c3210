//! Shared modal overlay utilities.
//!
//! Centering, background dimming and clearing for the path prompt and the
//! quit confirmation.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
///
/// ```
/// use ratatui::layout::Rect;
/// use fontscope_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let modal = centered_rect(40, 10, area);
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area so the modal stands out
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Clear an area before drawing a modal into it
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_basic() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 20, 6);
        assert_eq!(centered_rect(60, 10, area), area);
    }

    #[test]
    fn test_dim_background_sets_style() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);

        dim_background(&mut buf, area);

        let cell = &buf[(3, 1)];
        assert_eq!(cell.fg, palette::TEXT_MUTED);
        assert_eq!(cell.bg, palette::DEEPEST_BG);
    }

    #[test]
    fn test_clear_area_resets_symbols() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "abcd", Style::default());

        clear_area(&mut buf, area);

        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
