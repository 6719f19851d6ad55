//! Partial-observation snapshots supplied by the host.

use indexmap::IndexMap;
use scout_core::{CellState, Position};

use crate::bounds::GridBounds;

/// One tick's partial view of the world, keyed by position.
///
/// Insertion order is preserved so that merging is deterministic. A
/// snapshot may mention a cell as `Unknown`; merging such an entry is a
/// no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Observation {
    cells: IndexMap<Position, CellState>,
}

impl Observation {
    /// An empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the square window of Chebyshev `radius` around `center`,
    /// clipped to `bounds`, classifying each cell with `classify`.
    pub fn window(
        bounds: &GridBounds,
        center: Position,
        radius: u32,
        mut classify: impl FnMut(Position) -> CellState,
    ) -> Self {
        bounds
            .window(center, radius)
            .map(|p| (p, classify(p)))
            .collect()
    }

    /// Record `state` for `position`, returning any previous entry.
    pub fn insert(&mut self, position: Position, state: CellState) -> Option<CellState> {
        self.cells.insert(position, state)
    }

    /// The entry for `position`, if the snapshot covers it.
    pub fn get(&self, position: Position) -> Option<CellState> {
        self.cells.get(&position).copied()
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the snapshot covers no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells.iter().map(|(p, s)| (*p, *s))
    }
}

impl FromIterator<(Position, CellState)> for Observation {
    fn from_iter<I: IntoIterator<Item = (Position, CellState)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Position, CellState)> for Observation {
    fn extend<I: IntoIterator<Item = (Position, CellState)>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_classifies_each_cell() {
        let bounds = GridBounds::new(10, 10).unwrap();
        let obs = Observation::window(&bounds, Position::new(0, 5), 1, |p| {
            if p.col == 0 {
                CellState::Water
            } else {
                CellState::Land
            }
        });
        assert_eq!(obs.len(), 6);
        assert_eq!(obs.get(Position::new(0, 4)), Some(CellState::Water));
        assert_eq!(obs.get(Position::new(1, 6)), Some(CellState::Land));
        assert_eq!(obs.get(Position::new(2, 5)), None);
    }

    #[test]
    fn window_far_outside_bounds_is_empty() {
        let bounds = GridBounds::new(10, 10).unwrap();
        let obs = Observation::window(&bounds, Position::new(i32::MAX, i32::MIN), 2, |_| {
            CellState::Land
        });
        assert!(obs.is_empty());
    }

    #[test]
    fn later_insert_replaces_within_snapshot() {
        let mut obs = Observation::new();
        assert_eq!(obs.insert(Position::new(1, 1), CellState::Land), None);
        assert_eq!(
            obs.insert(Position::new(1, 1), CellState::Water),
            Some(CellState::Land)
        );
        assert_eq!(obs.len(), 1);
    }
}
