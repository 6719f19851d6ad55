//! Brute-force shortest-path oracle.
//!
//! Deliberately naive: repeated full-grid relaxation until a fixpoint,
//! sharing no code with the searches under test.

use scout_core::Position;
use scout_grid::PerceptionGrid;

/// Fewest 8-connected unit steps from `origin` to any cell accepted by
/// `is_target`.
///
/// Steps may enter traversable cells or target cells; only `origin` and
/// traversable non-target cells are stepped out of. Returns `None` when no
/// target is reachable. If `origin` itself is a target the answer is `0`.
pub fn shortest_distance(
    grid: &PerceptionGrid,
    origin: Position,
    is_target: impl Fn(Position) -> bool,
) -> Option<usize> {
    let bounds = *grid.bounds();
    let n = bounds.cell_count();
    let start = bounds.index(origin)?;
    let mut dist = vec![usize::MAX; n];
    dist[start] = 0;

    let mut changed = true;
    while changed {
        changed = false;
        for i in 0..n {
            if dist[i] == usize::MAX {
                continue;
            }
            let Some(p) = bounds.position(i) else {
                continue;
            };
            let expandable = i == start || (grid.is_traversable(p) && !is_target(p));
            if !expandable {
                continue;
            }
            for q in grid.neighbours(p) {
                if !(grid.is_traversable(q) || is_target(q)) {
                    continue;
                }
                let Some(j) = bounds.index(q) else {
                    continue;
                };
                if dist[i] + 1 < dist[j] {
                    dist[j] = dist[i] + 1;
                    changed = true;
                }
            }
        }
    }

    bounds
        .iter()
        .filter(|p| is_target(*p))
        .filter_map(|p| bounds.index(p))
        .map(|i| dist[i])
        .filter(|d| *d != usize::MAX)
        .min()
}
