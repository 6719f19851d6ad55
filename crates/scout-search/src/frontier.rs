//! Breadth-first search for the nearest frontier cell.

use std::collections::VecDeque;

use indexmap::IndexSet;
use log::{debug, trace};
use scout_core::{Position, SearchError};
use scout_grid::PerceptionGrid;

use crate::node::NodeArena;
use crate::SearchOutcome;

/// Find a minimum-step route from `origin` to any cell in `frontier`.
///
/// Expansion runs over traversable cells only; frontier cells are queued
/// whatever their class and the search stops when the first one is
/// dequeued. An origin that is itself a frontier cell yields an empty
/// route.
///
/// # Errors
///
/// [`SearchError::UnreachableFrontier`] when the reachable space is
/// exhausted (or `origin` is out of bounds) before any frontier cell is
/// dequeued.
pub fn nearest_frontier(
    grid: &PerceptionGrid,
    origin: Position,
    frontier: &IndexSet<Position>,
) -> Result<SearchOutcome, SearchError> {
    nearest_frontier_avoiding(grid, origin, frontier, |_| false)
}

/// [`nearest_frontier`], additionally never entering cells for which
/// `blocked` returns `true`.
pub fn nearest_frontier_avoiding(
    grid: &PerceptionGrid,
    origin: Position,
    frontier: &IndexSet<Position>,
    blocked: impl Fn(Position) -> bool,
) -> Result<SearchOutcome, SearchError> {
    let bounds = grid.bounds();
    let Some(origin_index) = bounds.index(origin) else {
        debug!("[Frontier] origin {origin} out of bounds");
        return Err(SearchError::UnreachableFrontier {
            origin,
            explored: 0,
        });
    };
    debug!(
        "[Frontier] searching from {origin} for {} frontier cells",
        frontier.len()
    );

    let mut arena = NodeArena::new();
    let mut seen = vec![false; bounds.cell_count()];
    let mut queue = VecDeque::new();
    seen[origin_index] = true;
    queue.push_back(arena.root(origin, 0));

    let mut expanded = 0;
    while let Some(id) = queue.pop_front() {
        let node = *arena.get(id);
        if frontier.contains(&node.position) {
            let route = arena.trace(id);
            debug!(
                "[Frontier] reached {} in {} steps, expanded {expanded}",
                node.position, node.g
            );
            return Ok(SearchOutcome {
                route,
                nodes_expanded: expanded,
            });
        }

        expanded += 1;
        trace!("[Frontier] expand {} g={}", node.position, node.g);
        for next in grid.neighbours(node.position) {
            let Some(index) = bounds.index(next) else {
                continue;
            };
            if seen[index] || blocked(next) {
                continue;
            }
            if frontier.contains(&next) || grid.is_traversable(next) {
                seen[index] = true;
                queue.push_back(arena.child(id, next, 0));
            }
        }
    }

    debug!("[Frontier] exhausted from {origin} after {expanded} expansions");
    Err(SearchError::UnreachableFrontier {
        origin,
        explored: expanded,
    })
}
