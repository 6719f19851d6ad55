//! Ground-truth terrain fixtures.
//!
//! Three ways to build one:
//!
//! - [`Terrain::open_field`]: all land, explicit start and optional finish.
//! - [`Terrain::parse`]: from rows of cell glyphs (`+ . S F`).
//! - [`Terrain::random`]: seeded water scatter on land.

use std::fmt;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use scout_core::{CellState, Position};
use scout_grid::{GridBounds, GridError, Observation, PerceptionGrid};

/// Errors from [`Terrain::parse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerrainError {
    /// Grid dimensions rejected by [`GridBounds::new`].
    Bounds(GridError),
    /// A row's width differs from the first row.
    RaggedRow { row: usize, expected: usize, found: usize },
    /// Unrecognised glyph.
    BadGlyph { col: usize, row: usize, glyph: char },
    /// More than one `S` or `F`.
    Duplicate { state: CellState },
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounds(e) => write!(f, "bounds: {e}"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::BadGlyph { col, row, glyph } => {
                write!(f, "unrecognised glyph {glyph:?} at ({col}, {row})")
            }
            Self::Duplicate { state } => write!(f, "more than one {state} cell"),
        }
    }
}

impl std::error::Error for TerrainError {}

/// The complete, hidden classification of every cell.
#[derive(Clone, Debug)]
pub struct Terrain {
    bounds: GridBounds,
    cells: Vec<CellState>,
    start: Option<Position>,
    finish: Option<Position>,
}

impl Terrain {
    /// All land. `start` and `finish` are stamped if in bounds.
    pub fn open_field(bounds: GridBounds, start: Position, finish: Option<Position>) -> Self {
        let mut t = Self {
            bounds,
            cells: vec![CellState::Land; bounds.cell_count()],
            start: None,
            finish: None,
        };
        t.set(start, CellState::Start);
        if let Some(f) = finish {
            t.set(f, CellState::Finish);
        }
        t
    }

    /// Parse rows of glyphs, top row first. Leading and trailing blank
    /// lines are ignored; unknown (`' '`) cells are kept as unknown.
    pub fn parse(text: &str) -> Result<Self, TerrainError> {
        let lines: Vec<&str> = text.lines().collect();
        let first = lines
            .iter()
            .position(|l| !l.trim().is_empty())
            .unwrap_or(lines.len());
        let last = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(first, |i| i + 1);
        let rows = &lines[first..last];
        let width = rows.first().map_or(0, |r| r.chars().count());
        let bounds =
            GridBounds::new(width as u32, rows.len() as u32).map_err(TerrainError::Bounds)?;
        let mut t = Self {
            bounds,
            cells: vec![CellState::Unknown; bounds.cell_count()],
            start: None,
            finish: None,
        };
        for (r, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(TerrainError::RaggedRow {
                    row: r,
                    expected: width,
                    found,
                });
            }
            for (c, glyph) in line.chars().enumerate() {
                let state = CellState::from_glyph(glyph)
                    .ok_or(TerrainError::BadGlyph { col: c, row: r, glyph })?;
                let p = Position::new(c as i32, r as i32);
                let taken = match state {
                    CellState::Start => t.start.is_some(),
                    CellState::Finish => t.finish.is_some(),
                    _ => false,
                };
                if taken {
                    return Err(TerrainError::Duplicate { state });
                }
                t.set(p, state);
            }
        }
        Ok(t)
    }

    /// Land with each cell independently turned to water with probability
    /// `water_ratio`, from a seeded ChaCha8 stream. No start or finish.
    pub fn random(bounds: GridBounds, water_ratio: f64, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let p = water_ratio.clamp(0.0, 1.0);
        let cells = (0..bounds.cell_count())
            .map(|_| {
                if rng.random_bool(p) {
                    CellState::Water
                } else {
                    CellState::Land
                }
            })
            .collect();
        Self {
            bounds,
            cells,
            start: None,
            finish: None,
        }
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn finish(&self) -> Option<Position> {
        self.finish
    }

    pub fn get(&self, p: Position) -> CellState {
        self.bounds
            .index(p)
            .map_or(CellState::Unknown, |i| self.cells[i])
    }

    /// Overwrite one cell. Stamping `Start` or `Finish` moves the marker,
    /// demoting any previous one to land. Out-of-bounds writes are ignored.
    pub fn set(&mut self, p: Position, state: CellState) {
        let Some(i) = self.bounds.index(p) else {
            return;
        };
        let marker = match state {
            CellState::Start => Some(&mut self.start),
            CellState::Finish => Some(&mut self.finish),
            _ => None,
        };
        if let Some(slot) = marker {
            if let Some(old) = slot.replace(p) {
                if let Some(j) = self.bounds.index(old) {
                    self.cells[j] = CellState::Land;
                }
            }
        }
        if self.start == Some(p) && state != CellState::Start {
            self.start = None;
        }
        if self.finish == Some(p) && state != CellState::Finish {
            self.finish = None;
        }
        self.cells[i] = state;
    }

    /// What an agent standing at `center` sees with the given radius.
    pub fn observe(&self, center: Position, radius: u32) -> Observation {
        Observation::window(&self.bounds, center, radius, |p| self.get(p))
    }

    /// Every cell at once.
    pub fn full_observation(&self) -> Observation {
        self.bounds.iter().map(|p| (p, self.get(p))).collect()
    }

    /// A perception grid with complete knowledge of this terrain.
    pub fn perception(&self) -> PerceptionGrid {
        let mut grid = PerceptionGrid::new(self.bounds);
        grid.merge(&self.full_observation());
        grid
    }
}
