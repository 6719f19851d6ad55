//! Grid extent and 8-connected neighbourhood.

use scout_core::{Direction, Position};
use smallvec::SmallVec;

use crate::error::GridError;

/// A `cols × rows` rectangle anchored at `(0, 0)`.
///
/// Edges absorb: cells outside the rectangle are never neighbours, so
/// corner cells have 3 neighbours and edge cells 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridBounds {
    cols: u32,
    rows: u32,
}

impl GridBounds {
    /// Largest accepted dimension. Perception is stored densely, so this
    /// caps a grid at 2^28 cells.
    pub const MAX_DIM: u32 = 1 << 14;

    /// Side length of the default square grid.
    pub const DEFAULT_SIDE: u32 = 100;

    /// Create bounds of `cols × rows` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    pub fn new(cols: u32, rows: u32) -> Result<Self, GridError> {
        if cols == 0 || rows == 0 {
            return Err(GridError::EmptyGrid);
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { cols, rows })
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    /// Whether `p` lies inside the rectangle.
    pub fn contains(&self, p: Position) -> bool {
        p.col >= 0 && p.row >= 0 && (p.col as u32) < self.cols && (p.row as u32) < self.rows
    }

    /// Row-major flat index of `p`, or `None` if out of bounds.
    pub fn index(&self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row as usize) * (self.cols as usize) + (p.col as usize))
    }

    /// Inverse of [`index`](Self::index).
    pub fn position(&self, index: usize) -> Option<Position> {
        if index >= self.cell_count() {
            return None;
        }
        let cols = self.cols as usize;
        Some(Position::new((index % cols) as i32, (index / cols) as i32))
    }

    /// In-bounds 8-connected neighbours of `p`, in [`Direction::MOVES`] order.
    pub fn neighbours(&self, p: Position) -> SmallVec<[Position; 8]> {
        Direction::MOVES
            .iter()
            .map(|&d| p.step(d))
            .filter(|n| self.contains(*n))
            .collect()
    }

    /// In-bounds cells of the square window of Chebyshev `radius` around
    /// `center`, row-major. Includes `center` itself when in bounds.
    pub fn window(&self, center: Position, radius: u32) -> impl Iterator<Item = Position> + '_ {
        let r = radius.min(Self::MAX_DIM) as i32;
        // Clip to the grid before enumerating; a far-off centre yields nothing.
        let rows = center.row.saturating_sub(r).max(0)
            ..=center.row.saturating_add(r).min(self.rows as i32 - 1);
        let cols = center.col.saturating_sub(r).max(0)
            ..=center.col.saturating_add(r).min(self.cols as i32 - 1);
        rows.flat_map(move |row| cols.clone().map(move |col| Position::new(col, row)))
    }

    /// Every cell, row-major.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cell_count()).filter_map(move |i| self.position(i))
    }
}

impl Default for GridBounds {
    /// The 100 × 100 grid (coordinates `0..=99` on both axes).
    fn default() -> Self {
        Self {
            cols: Self::DEFAULT_SIDE,
            rows: Self::DEFAULT_SIDE,
        }
    }
}
