//! Host harness, profiles and benchmark helpers for Scout.
//!
//! - [`Expedition`]: plays the host, driving a [`MissionController`] over
//!   a ground-truth [`Terrain`] and checking every returned move.
//! - [`open_field_profile`]: 100x100 land, finish 30 cells from start.
//! - [`islands_profile`]: 100x100 with seeded water scatter.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod expedition;

pub use expedition::{Expedition, ExpeditionError};

use scout_core::Position;
use scout_grid::GridBounds;
use scout_mission::MissionConfig;
use scout_test_utils::Terrain;

/// Shared start of both profiles.
pub const PROFILE_START: Position = Position::new(50, 50);

/// All-land 100x100 grid with the default seven-agent fleet.
///
/// The finish sits at (80, 35), well outside the start's view.
pub fn open_field_profile() -> (Terrain, MissionConfig) {
    let config = MissionConfig::default();
    let terrain = Terrain::open_field(config.bounds, PROFILE_START, Some(Position::new(80, 35)));
    (terrain, config)
}

/// 100x100 grid, 20% water, start and finish stamped onto land.
///
/// The start's 3x3 neighbourhood is cleared so the fleet can fan out.
/// Reachability of the finish is not guaranteed for every seed.
pub fn islands_profile(seed: u64) -> (Terrain, MissionConfig) {
    use scout_core::CellState;

    let config = MissionConfig::default();
    let mut terrain = Terrain::random(GridBounds::default(), 0.2, seed);
    for p in config.bounds.window(PROFILE_START, 1).collect::<Vec<_>>() {
        terrain.set(p, CellState::Land);
    }
    terrain.set(PROFILE_START, CellState::Start);
    terrain.set(Position::new(20, 75), CellState::Finish);
    (terrain, config)
}
