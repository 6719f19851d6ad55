//! Cell classifications.

use std::fmt;

/// What is known about a single grid cell.
///
/// `Start` and `Finish` are land-like: `Start` can be walked across by
/// either search, `Finish` is only ever entered as a target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Never observed.
    #[default]
    Unknown,
    /// Open, walkable terrain.
    Land,
    /// Impassable terrain.
    Water,
    /// The fleet's shared starting cell.
    Start,
    /// The goal cell.
    Finish,
}

impl CellState {
    /// Single-character rendering: `' '`, `'+'`, `'.'`, `'S'`, `'F'`.
    pub fn glyph(self) -> char {
        match self {
            CellState::Unknown => ' ',
            CellState::Land => '+',
            CellState::Water => '.',
            CellState::Start => 'S',
            CellState::Finish => 'F',
        }
    }

    /// Inverse of [`glyph`](Self::glyph). Returns `None` for any other character.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            ' ' => Some(CellState::Unknown),
            '+' => Some(CellState::Land),
            '.' => Some(CellState::Water),
            'S' => Some(CellState::Start),
            'F' => Some(CellState::Finish),
            _ => None,
        }
    }

    /// Any classification other than `Unknown`.
    pub fn is_known(self) -> bool {
        self != CellState::Unknown
    }

    /// Cells a search may expand through.
    pub fn is_traversable(self) -> bool {
        matches!(self, CellState::Land | CellState::Start)
    }

    /// Cells that may be registered as unvisited frontier.
    pub fn is_frontier_candidate(self) -> bool {
        matches!(self, CellState::Land | CellState::Finish)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellState::Unknown => "unknown",
            CellState::Land => "land",
            CellState::Water => "water",
            CellState::Start => "start",
            CellState::Finish => "finish",
        };
        f.write_str(name)
    }
}
