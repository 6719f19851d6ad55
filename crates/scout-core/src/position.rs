//! Integer grid positions.

use std::fmt;

use crate::direction::Direction;

/// A cell address on the grid as `(column, row)`.
///
/// Rows grow downwards: [`Direction::North`] decreases `row`. Positions are
/// plain coordinates and may lie outside any particular grid; bounds are
/// checked by `scout_grid::GridBounds`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column (x axis).
    pub col: i32,
    /// Row (y axis).
    pub row: i32,
}

impl Position {
    /// Create a position from a column and a row.
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The position one unit step away in `direction`.
    ///
    /// [`Direction::Stay`] returns `self`. Coordinates saturate at the
    /// `i32` limits.
    pub fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.delta();
        Self::new(self.col.saturating_add(dc), self.row.saturating_add(dr))
    }

    /// Chebyshev (L-inf) distance: the minimum number of 8-directional
    /// unit steps between two cells, ignoring obstacles.
    pub fn chebyshev(self, other: Position) -> u32 {
        self.col.abs_diff(other.col).max(self.row.abs_diff(other.row))
    }

    /// Whether `other` is one of the eight cells surrounding `self`.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.chebyshev(other) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
