//! Terminal geometry for the display.
//!
//! Text is positioned with 1-based anchors. Negative values count from the
//! opposite edge: `x = -1` right-aligns the text one column in from the
//! edge, `y = -1` is the last line.

use ratatui::layout::{Rect, Size};

/// Size of the terminal the display draws on.
///
/// Refreshed before every draw so a resized terminal is picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct DisplayContext {
    cols: u16,
    rows: u16,
}

impl DisplayContext {
    /// Number of columns.
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// The whole drawable area.
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.cols, self.rows)
    }

    /// Resolves an anchor for text `width` cells wide into a one-line area.
    ///
    /// The result is clipped to the terminal; text that starts off-screen is
    /// moved to the nearest edge.
    pub fn place(&self, x: i32, y: i32, width: u16) -> Rect {
        if self.cols == 0 || self.rows == 0 {
            return Rect::default();
        }

        let cols = i32::from(self.cols);
        let rows = i32::from(self.rows);
        let x = if x < 0 { cols - i32::from(width) + x + 1 } else { x };
        let y = if y < 0 { rows + y + 1 } else { y };

        // Both bounds are positive here, so the casts cannot wrap.
        let col = (x - 1).clamp(0, cols - 1) as u16;
        let row = (y - 1).clamp(0, rows - 1) as u16;
        let width = width.min(self.cols - col);

        Rect::new(col, row, width, 1)
    }

    /// First row of a block `height` rows tall drawn around mid-screen.
    ///
    /// Keeps the block clear of the three header rows and the prompt line
    /// whenever the terminal is tall enough.
    pub fn block_top(&self, height: u16) -> u16 {
        let lowest = self.rows.saturating_sub(height + 1);
        (self.rows / 2).min(lowest).max(3.min(lowest))
    }
}

impl From<Size> for DisplayContext {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

impl From<Rect> for DisplayContext {
    fn from(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }
}
