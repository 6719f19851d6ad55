//! A* search to a known goal.
//!
//! The open list is a binary heap with lazy reinsertion: when a cheaper
//! path to a queued cell turns up, a fresh entry is pushed under its new
//! score and the outdated one is dropped when it surfaces. A cell is
//! closed the first time its best entry is popped and never reopened,
//! which is sound because the Chebyshev heuristic is consistent for
//! unit-cost 8-way movement.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};
use scout_core::{Position, SearchError};
use scout_grid::PerceptionGrid;

use crate::node::{NodeArena, NodeId};
use crate::SearchOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenEntry {
    f: u32,
    g: u32,
    seq: u64,
    node: NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap: lowest f first, deeper g on ties, then FIFO.
        other
            .f
            .cmp(&self.f)
            .then_with(|| self.g.cmp(&other.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a shortest route from `origin` to `goal` over known traversable
/// cells.
///
/// The goal itself need not be traversable; the search ends as soon as
/// it is generated as a successor. `origin == goal` yields an empty route.
///
/// # Errors
///
/// [`SearchError::UnreachableGoal`] when the open list empties first, or
/// when `origin` is out of bounds.
pub fn shortest_path_to_goal(
    grid: &PerceptionGrid,
    origin: Position,
    goal: Position,
) -> Result<SearchOutcome, SearchError> {
    let bounds = grid.bounds();
    let unreachable = |explored| SearchError::UnreachableGoal {
        origin,
        goal,
        explored,
    };
    let Some(origin_index) = bounds.index(origin) else {
        debug!("[AStar] origin {origin} out of bounds");
        return Err(unreachable(0));
    };
    if origin == goal {
        return Ok(SearchOutcome {
            route: Default::default(),
            nodes_expanded: 0,
        });
    }
    debug!("[AStar] searching {origin} -> {goal}");

    let cells = bounds.cell_count();
    let mut arena = NodeArena::with_capacity(64);
    let mut best_g: Vec<Option<u32>> = vec![None; cells];
    let mut closed = vec![false; cells];
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;

    let root = arena.root(origin, origin.chebyshev(goal));
    best_g[origin_index] = Some(0);
    open.push(OpenEntry {
        f: arena.get(root).f(),
        g: 0,
        seq,
        node: root,
    });

    let mut expanded = 0;
    while let Some(entry) = open.pop() {
        let current = *arena.get(entry.node);
        let Some(index) = bounds.index(current.position) else {
            continue;
        };
        if closed[index] || best_g[index] != Some(entry.g) {
            continue;
        }
        closed[index] = true;
        expanded += 1;
        trace!(
            "[AStar] expand {} g={} f={}",
            current.position,
            current.g,
            entry.f
        );

        for next in grid.neighbours(current.position) {
            if next == goal {
                let leaf = arena.child(entry.node, next, 0);
                let route = arena.trace(leaf);
                debug!(
                    "[AStar] reached {goal} in {} steps, expanded {expanded}",
                    route.len()
                );
                return Ok(SearchOutcome {
                    route,
                    nodes_expanded: expanded,
                });
            }
            let Some(next_index) = bounds.index(next) else {
                continue;
            };
            if closed[next_index] || !grid.is_traversable(next) {
                continue;
            }
            let g = current.g + 1;
            if best_g[next_index].is_some_and(|known| known <= g) {
                continue;
            }
            best_g[next_index] = Some(g);
            let child = arena.child(entry.node, next, next.chebyshev(goal));
            seq += 1;
            open.push(OpenEntry {
                f: arena.get(child).f(),
                g,
                seq,
                node: child,
            });
        }
    }

    debug!("[AStar] {goal} unreachable from {origin} after {expanded} expansions");
    Err(unreachable(expanded))
}
