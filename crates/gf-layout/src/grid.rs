//! Heatmap grid geometry.

use gf_core::{Point, Rect};

/// Binning geometry for the density heatmap: a fixed `cols × rows` grid
/// covering the terminal bounding box.
///
/// Cell sizes are derived once at construction (`terminal extent / count`);
/// binning a point is two subtractions, two divisions, and a bounds check.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    pub cols: u32,
    pub rows: u32,
    pub cell_width: f32,
    pub cell_height: f32,
    /// Top-left corner of cell (0, 0) — the terminal's top-left corner.
    pub origin: Point,
}

impl GridSpec {
    /// Divide `bounds` into a `cols × rows` grid.
    ///
    /// Callers are expected to pass non-zero dimensions
    /// ([`TerminalLayoutBuilder`](crate::TerminalLayoutBuilder) enforces
    /// this); a zero count yields non-finite cell sizes, which
    /// [`cell_of`](Self::cell_of) rejects rather than misbinning.
    pub fn over(bounds: Rect, cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            cell_width: bounds.width / cols as f32,
            cell_height: bounds.height / rows as f32,
            origin: Point::new(bounds.x, bounds.y),
        }
    }

    /// The `(row, col)` cell containing `p`, or `None` if `p` falls outside
    /// the grid.
    ///
    /// Out-of-bounds points are dropped by design — particles mid-curve can
    /// briefly leave the terminal box (gates sit outside it) and must not
    /// wrap into a wrong cell.
    pub fn cell_of(&self, p: Point) -> Option<(u32, u32)> {
        let col = ((p.x - self.origin.x) / self.cell_width).floor();
        let row = ((p.y - self.origin.y) / self.cell_height).floor();
        if !col.is_finite() || !row.is_finite() {
            return None;
        }
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some((row as u32, col as u32))
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Bounds of cell `(row, col)` on the terminal plane, for renderers.
    pub fn cell_bounds(&self, row: u32, col: u32) -> Rect {
        Rect::new(
            self.origin.x + col as f32 * self.cell_width,
            self.origin.y + row as f32 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }
}
