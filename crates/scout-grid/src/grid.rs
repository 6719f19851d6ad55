//! The shared, monotonic perception grid.

use std::fmt;

use log::trace;
use scout_core::{CellState, Position};
use smallvec::SmallVec;

use crate::bounds::GridBounds;
use crate::observation::Observation;

/// Outcome of one [`PerceptionGrid::merge`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Cells that went from `Unknown` to a known classification.
    pub newly_classified: usize,
    /// Entries that reported `Unknown` and were skipped.
    pub ignored_unknown: usize,
    /// Entries outside the grid bounds.
    pub out_of_bounds: usize,
    /// Entries contradicting an earlier classification (ignored).
    pub conflicting: usize,
}

impl MergeStats {
    /// Whether the merge left the grid unchanged.
    pub fn is_noop(&self) -> bool {
        self.newly_classified == 0
    }
}

/// Cumulative cell classification assembled from partial observations.
///
/// The grid is monotonic: a known cell never changes classification and
/// never reverts to `Unknown`. Merging the same snapshot twice gives the
/// same grid as merging it once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PerceptionGrid {
    bounds: GridBounds,
    cells: Vec<CellState>,
    known: usize,
}

impl PerceptionGrid {
    /// A grid covering `bounds` with every cell `Unknown`.
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            cells: vec![CellState::Unknown; bounds.cell_count()],
            known: 0,
        }
    }

    /// The grid extent.
    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Classification of `p`. Out-of-bounds cells read as `Unknown`.
    pub fn get(&self, p: Position) -> CellState {
        self.bounds
            .index(p)
            .map_or(CellState::Unknown, |i| self.cells[i])
    }

    /// Whether a search may expand through `p`.
    pub fn is_traversable(&self, p: Position) -> bool {
        self.get(p).is_traversable()
    }

    /// Number of cells with a known classification.
    pub fn known_count(&self) -> usize {
        self.known
    }

    /// In-bounds 8-connected neighbours of `p`.
    pub fn neighbours(&self, p: Position) -> SmallVec<[Position; 8]> {
        self.bounds.neighbours(p)
    }

    /// Fold a snapshot into the grid.
    pub fn merge(&mut self, observation: &Observation) -> MergeStats {
        let mut stats = MergeStats::default();
        for (p, state) in observation.iter() {
            let Some(i) = self.bounds.index(p) else {
                stats.out_of_bounds += 1;
                continue;
            };
            if !state.is_known() {
                stats.ignored_unknown += 1;
                continue;
            }
            let current = self.cells[i];
            if current == state {
                continue;
            }
            if current.is_known() {
                trace!("[Perception] keeping {current} at {p}, ignoring {state}");
                stats.conflicting += 1;
                continue;
            }
            self.cells[i] = state;
            self.known += 1;
            stats.newly_classified += 1;
        }
        stats
    }

    /// Positions currently classified as `state`, row-major.
    pub fn cells_with(&self, state: CellState) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, s)| **s == state)
            .filter_map(|(i, _)| self.bounds.position(i))
    }
}

impl fmt::Display for PerceptionGrid {
    /// One line of glyphs per row, top row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.bounds.cols() as usize;
        for (r, row) in self.cells.chunks(cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}
