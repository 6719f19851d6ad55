//! The nine move directions: eight compass points plus "stay".

use std::fmt;

use crate::position::Position;

/// A single-tick move for one agent.
///
/// Each direction maps to a unit `(column, row)` delta in `{-1, 0, 1}²`.
/// North is `row - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Do not move.
    Stay = 0,
    /// `(0, -1)`.
    North = 1,
    /// `(1, -1)`.
    NorthEast = 2,
    /// `(1, 0)`.
    East = 3,
    /// `(1, 1)`.
    SouthEast = 4,
    /// `(0, 1)`.
    South = 5,
    /// `(-1, 1)`.
    SouthWest = 6,
    /// `(-1, 0)`.
    West = 7,
    /// `(-1, -1)`.
    NorthWest = 8,
}

/// Lookup from `(drow + 1) * 3 + (dcol + 1)` to direction.
const BY_DELTA: [Direction; 9] = [
    Direction::NorthWest,
    Direction::North,
    Direction::NorthEast,
    Direction::West,
    Direction::Stay,
    Direction::East,
    Direction::SouthWest,
    Direction::South,
    Direction::SouthEast,
];

impl Direction {
    /// The eight moving directions, clockwise from north.
    pub const MOVES: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// All nine directions, `Stay` first.
    pub const ALL: [Direction; 9] = [
        Direction::Stay,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The `(column, row)` delta of this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Stay => (0, 0),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Resolve a unit delta back to a direction.
    ///
    /// Returns `None` if either component lies outside `{-1, 0, 1}`.
    /// `(0, 0)` resolves to [`Direction::Stay`].
    pub fn from_delta(dcol: i32, drow: i32) -> Option<Self> {
        if !(-1..=1).contains(&dcol) || !(-1..=1).contains(&drow) {
            return None;
        }
        Some(BY_DELTA[((drow + 1) * 3 + (dcol + 1)) as usize])
    }

    /// The moving direction that takes `from` to the adjacent cell `to`.
    ///
    /// Returns `None` when `to` is not one of the eight neighbours of
    /// `from`, including `to == from`.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let dcol = to.col.checked_sub(from.col)?;
        let drow = to.row.checked_sub(from.row)?;
        Self::from_delta(dcol, drow).filter(|d| !d.is_stay())
    }

    /// Whether this is [`Direction::Stay`].
    pub fn is_stay(self) -> bool {
        self == Direction::Stay
    }

    /// Compass abbreviation (`"N"`, `"SE"`, ...; `"-"` for stay).
    pub fn abbrev(self) -> &'static str {
        match self {
            Direction::Stay => "-",
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}
