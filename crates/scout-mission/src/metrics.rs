//! Cumulative mission counters.

/// Counters accumulated over a mission's lifetime.
///
/// Updated by the controller on every decision; read them through
/// [`MissionController::metrics`](crate::MissionController::metrics).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MissionMetrics {
    /// Decisions requested, including failed ones.
    pub decisions: u64,
    /// Moves chosen from the immediate neighbourhood without a search.
    pub direct_moves: u64,
    /// Nearest-frontier searches run.
    pub frontier_searches: u64,
    /// Goal searches run (one per agent at convergence).
    pub goal_searches: u64,
    /// Route waypoints consumed.
    pub route_steps: u64,
    /// Decisions degraded to `Stay` because the target cell was occupied.
    pub collision_stays: u64,
    /// Nodes expanded across all searches.
    pub nodes_expanded: u64,
}
