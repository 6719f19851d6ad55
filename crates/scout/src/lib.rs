//! Scout: cooperative fleet exploration and goal convergence on partially
//! observed grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Scout sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use scout::prelude::*;
//!
//! let start = Position::new(50, 50);
//! let mut mission = MissionController::new(MissionConfig::default(), start)?;
//!
//! // The host supplies what agent 0 can see from the start cell.
//! let bounds = GridBounds::default();
//! let seen = Observation::window(&bounds, start, 1, |p| {
//!     if p == start { CellState::Start } else { CellState::Land }
//! });
//!
//! // Agent 0 leads with north.
//! let direction = mission.decide(AgentId(0), &seen)?;
//! assert_eq!(direction, Direction::North);
//! assert_eq!(mission.state(), MissionState::Exploring);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `scout-core` | Positions, directions, cell classes, agent IDs, search errors |
//! | [`grid`] | `scout-grid` | Bounds, observations, the perception grid |
//! | [`search`] | `scout-search` | Search arena, routes, frontier BFS, goal A* |
//! | [`mission`] | `scout-mission` | Agents, configuration, the mission controller |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`scout-core`).
pub use scout_core as types;

/// Grid bounds, observations and perception (`scout-grid`).
///
/// [`grid::PerceptionGrid`] accumulates [`grid::Observation`]s monotonically.
pub use scout_grid as grid;

/// Path searches (`scout-search`).
///
/// [`search::nearest_frontier`] for exploration,
/// [`search::shortest_path_to_goal`] for convergence.
pub use scout_search as search;

/// Mission control (`scout-mission`).
///
/// [`mission::MissionController`] is the single decision entry point.
pub use scout_mission as mission;

/// Common imports for hosting a mission.
pub mod prelude {
    // Core types
    pub use scout_core::{AgentId, CellState, Direction, Position, SearchError};

    // Grid
    pub use scout_grid::{GridBounds, GridError, Observation, PerceptionGrid};

    // Search
    pub use scout_search::Route;

    // Mission
    pub use scout_mission::{
        ConfigError, MissionConfig, MissionController, MissionError, MissionMetrics,
        MissionState,
    };
}
