//! Path searches over the perception grid.
//!
//! Two searches share one arena-backed search tree ([`NodeArena`]):
//!
//! - [`nearest_frontier`]: breadth-first, unit costs, stops at the first
//!   frontier cell dequeued.
//! - [`shortest_path_to_goal`]: A* keyed on `f = g + h` with the Chebyshev
//!   heuristic, stops as soon as the goal is generated.
//!
//! Both return a [`SearchOutcome`] whose [`Route`] excludes the origin and
//! ends at the target, or a typed [`SearchError`](scout_core::SearchError).
//! Searches only read the grid and frontier set; committing membership
//! changes is the caller's job.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod frontier;
pub mod goal;
pub mod node;
pub mod route;

pub use frontier::{nearest_frontier, nearest_frontier_avoiding};
pub use goal::shortest_path_to_goal;
pub use node::{NodeArena, NodeId, SearchNode};
pub use route::Route;

/// A successful search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Waypoints from the first step to the target.
    pub route: Route,
    /// Nodes taken off the open list and expanded.
    pub nodes_expanded: usize,
}

impl SearchOutcome {
    /// Path cost in unit steps.
    pub fn cost(&self) -> usize {
        self.route.len()
    }
}
