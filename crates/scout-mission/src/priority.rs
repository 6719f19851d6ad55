//! Exploration priority tables.
//!
//! Each agent tries its neighbours in a fixed order. Giving every agent a
//! different leading direction makes a fleet that starts on one cell fan
//! out instead of moving as a block.

use scout_core::Direction;
use scout_core::Direction::{
    East as E, North as N, NorthEast as NE, NorthWest as NW, South as S, SouthEast as SE,
    SouthWest as SW, West as W,
};

/// The seven-agent fan-out table.
pub const DEFAULT_PRIORITIES: [[Direction; 8]; 7] = [
    [N, NW, NE, W, E, SW, SE, S],
    [NW, N, W, NE, SW, E, S, SE],
    [W, SW, NW, S, N, SE, NE, E],
    [SW, S, W, SE, NW, E, N, NE],
    [NE, N, E, NW, SE, W, S, SW],
    [SE, S, E, SW, NE, W, N, NW],
    [S, SE, SW, E, W, NE, NW, N],
];

/// Whether `row` lists each of the eight moving directions exactly once.
pub fn is_permutation(row: &[Direction; 8]) -> bool {
    let mut seen = [false; 9];
    for d in row {
        let slot = &mut seen[*d as usize];
        if d.is_stay() || *slot {
            return false;
        }
        *slot = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rows_are_permutations() {
        assert!(DEFAULT_PRIORITIES.iter().all(is_permutation));
    }

    #[test]
    fn default_rows_lead_differently() {
        let mut leads: Vec<_> = DEFAULT_PRIORITIES.iter().map(|r| r[0]).collect();
        leads.sort_by_key(|d| *d as u8);
        leads.dedup();
        assert_eq!(leads.len(), DEFAULT_PRIORITIES.len());
    }

    #[test]
    fn rejects_repeats_and_stay() {
        assert!(!is_permutation(&[N, N, NE, W, E, SW, SE, S]));
        assert!(!is_permutation(&[Direction::Stay, NW, NE, W, E, SW, SE, S]));
        assert!(is_permutation(&Direction::MOVES));
    }
}
