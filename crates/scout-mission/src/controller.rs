//! The per-tick decision engine.

use indexmap::IndexSet;
use log::{debug, info, trace};
use scout_core::{AgentId, CellState, Direction, Position};
use scout_grid::{Observation, PerceptionGrid};
use scout_search::{
    nearest_frontier, nearest_frontier_avoiding, shortest_path_to_goal, Route, SearchOutcome,
};

use crate::agent::Agent;
use crate::config::{ConfigError, MissionConfig};
use crate::error::MissionError;
use crate::metrics::MissionMetrics;
use crate::state::MissionState;

/// Owns the shared mission state and answers one decision at a time.
///
/// The host calls [`decide`](Self::decide) once per agent per tick and
/// then applies the returned direction. The controller applies the same
/// move to its own copy of the fleet, so the next decision sees it.
///
/// Every returned direction leads to an in-bounds cell that no other agent
/// occupies at the moment of the decision, except the goal, which any
/// number of agents may share. Agents still waiting on the shared start
/// cell may share it too.
#[derive(Debug)]
pub struct MissionController {
    config: MissionConfig,
    start: Position,
    state: MissionState,
    grid: PerceptionGrid,
    fleet: Vec<Agent>,
    visited: IndexSet<Position>,
    frontier: IndexSet<Position>,
    metrics: MissionMetrics,
}

impl MissionController {
    /// Validate `config` and prepare a mission starting at `start`.
    ///
    /// The fleet is created by the first call to [`decide`](Self::decide).
    pub fn new(config: MissionConfig, start: Position) -> Result<Self, ConfigError> {
        config.validate_start(start)?;
        Ok(Self {
            grid: PerceptionGrid::new(config.bounds),
            config,
            start,
            state: MissionState::default(),
            fleet: Vec::new(),
            visited: IndexSet::new(),
            frontier: IndexSet::new(),
            metrics: MissionMetrics::default(),
        })
    }

    // ── Decision ───────────────────────────────────────────────────

    /// Choose the next move for `agent` given what it currently sees.
    ///
    /// # Errors
    ///
    /// - [`MissionError::InvalidAgentIndex`] when `agent` is outside the
    ///   fleet. Nothing is changed.
    /// - [`MissionError::Search`] when a frontier or goal search fails.
    /// - [`MissionError::IllegalMoveAttempt`] when a route holds a step
    ///   that is not a unit move.
    pub fn decide(
        &mut self,
        agent: AgentId,
        observation: &Observation,
    ) -> Result<Direction, MissionError> {
        let index = agent.index();
        if index >= self.fleet_size() {
            return Err(MissionError::InvalidAgentIndex {
                index,
                fleet_size: self.fleet_size(),
            });
        }
        self.metrics.decisions += 1;

        if self.state == MissionState::Initializing {
            self.initialize();
        }
        let direction = match self.state {
            MissionState::Initializing | MissionState::Exploring => {
                self.explore(index, observation)?
            }
            MissionState::GoalFound { goal } => {
                self.plan_convergence(goal)?;
                self.follow_route(index)?
            }
            MissionState::Converging { .. } => self.follow_route(index)?,
        };
        trace!(
            "[Mission] agent {agent} -> {direction} now at {}",
            self.fleet[index].position()
        );
        Ok(direction)
    }

    fn initialize(&mut self) {
        self.fleet = self
            .config
            .priorities
            .iter()
            .enumerate()
            .map(|(i, row)| Agent::new(AgentId(i), self.start, *row))
            .collect();
        self.state = MissionState::Exploring;
        info!(
            "[Mission] {} agents exploring from {}",
            self.fleet.len(),
            self.start
        );
    }

    fn explore(&mut self, index: usize, observation: &Observation) -> Result<Direction, MissionError> {
        let stats = self.grid.merge(observation);
        if !stats.is_noop() {
            trace!("[Mission] merged {stats:?}");
        }

        let here = self.fleet[index].position();
        self.visited.insert(here);
        self.frontier.swap_remove(&here);
        self.register_frontier(here);

        if let Some(goal) = self.find_finish(index) {
            self.state = MissionState::GoalFound { goal };
            info!("[Mission] agent {index} found the goal at {goal}");
            let direction = Direction::between(here, goal).unwrap_or(Direction::Stay);
            if !direction.is_stay() {
                self.fleet[index].apply(direction);
                self.metrics.direct_moves += 1;
            }
            return Ok(direction);
        }

        if self.fleet[index].has_route() {
            return self.follow_exploration_route(index);
        }

        let bounds = *self.grid.bounds();
        let candidate = self.fleet[index]
            .neighbours(&bounds)
            .into_iter()
            .find(|(_, p)| self.frontier.contains(p));
        if let Some((direction, target)) = candidate {
            if !self.is_free(target, index) {
                self.metrics.collision_stays += 1;
                trace!("[Mission] agent {index} blocked at {target}, staying");
                return Ok(Direction::Stay);
            }
            self.fleet[index].apply(direction);
            self.metrics.direct_moves += 1;
            return Ok(direction);
        }

        let outcome = self.search_frontier(index, here)?;
        self.assign_route(index, outcome.route)?;
        self.follow_exploration_route(index)
    }

    /// Nearest frontier, routing around other agents where possible.
    fn search_frontier(
        &mut self,
        index: usize,
        here: Position,
    ) -> Result<SearchOutcome, MissionError> {
        let occupied = |p: Position| {
            self.fleet
                .iter()
                .enumerate()
                .any(|(i, a)| i != index && a.position() == p)
        };
        let avoiding = nearest_frontier_avoiding(&self.grid, here, &self.frontier, occupied);
        self.metrics.frontier_searches += 1;
        let outcome = match avoiding {
            Ok(outcome) => outcome,
            Err(_) => {
                trace!("[Mission] agent {index} has no clear path, ignoring the fleet");
                self.metrics.frontier_searches += 1;
                nearest_frontier(&self.grid, here, &self.frontier).map_err(|source| {
                    MissionError::Search {
                        agent: AgentId(index),
                        source,
                    }
                })?
            }
        };
        self.record_search(&outcome);
        Ok(outcome)
    }

    /// [`follow_route`](Self::follow_route), dropping the route when its
    /// next step is occupied so the next decision plans afresh.
    fn follow_exploration_route(&mut self, index: usize) -> Result<Direction, MissionError> {
        let direction = self.follow_route(index)?;
        if direction.is_stay() && self.fleet[index].has_route() {
            self.fleet[index].assign_route(Route::empty());
        }
        Ok(direction)
    }

    /// Add unvisited land and finish cells around `here` to the frontier.
    fn register_frontier(&mut self, here: Position) {
        for p in self.grid.neighbours(here) {
            if self.grid.get(p).is_frontier_candidate()
                && !self.visited.contains(&p)
                && self.frontier.insert(p)
            {
                trace!("[Mission] frontier + {p}");
            }
        }
    }

    /// The finish cell under or next to the agent, neighbours in priority
    /// order.
    fn find_finish(&self, index: usize) -> Option<Position> {
        let agent = &self.fleet[index];
        if self.grid.get(agent.position()) == CellState::Finish {
            return Some(agent.position());
        }
        agent
            .neighbours(self.grid.bounds())
            .into_iter()
            .map(|(_, p)| p)
            .find(|p| self.grid.get(*p) == CellState::Finish)
    }

    /// Plan a route to `goal` for every agent, then start converging.
    ///
    /// On failure the state stays [`MissionState::GoalFound`].
    fn plan_convergence(&mut self, goal: Position) -> Result<(), MissionError> {
        info!(
            "[Mission] planning convergence on {goal} for {} agents",
            self.fleet.len()
        );
        for index in 0..self.fleet.len() {
            let origin = self.fleet[index].position();
            let outcome = shortest_path_to_goal(&self.grid, origin, goal).map_err(|source| {
                MissionError::Search {
                    agent: AgentId(index),
                    source,
                }
            })?;
            self.metrics.goal_searches += 1;
            self.record_search(&outcome);
            self.assign_route(index, outcome.route)?;
        }
        self.state = MissionState::Converging { goal };
        Ok(())
    }

    /// Take one step along the agent's route, or stay if it is exhausted
    /// or the next waypoint is occupied.
    fn follow_route(&mut self, index: usize) -> Result<Direction, MissionError> {
        let agent = &self.fleet[index];
        let Some(next) = agent.next_waypoint() else {
            return Ok(Direction::Stay);
        };
        let from = agent.position();
        let Some(direction) = Direction::between(from, next) else {
            return Err(MissionError::IllegalMoveAttempt {
                agent: agent.id(),
                from,
                to: next,
            });
        };
        if !self.is_free(next, index) {
            self.metrics.collision_stays += 1;
            trace!("[Mission] agent {index} waiting for {next}");
            return Ok(Direction::Stay);
        }
        let agent = &mut self.fleet[index];
        agent.advance_route();
        agent.apply(direction);
        self.metrics.route_steps += 1;
        Ok(direction)
    }

    fn assign_route(&mut self, index: usize, route: Route) -> Result<(), MissionError> {
        let agent = &mut self.fleet[index];
        route
            .check_contiguous(agent.position())
            .map_err(|(from, to)| MissionError::IllegalMoveAttempt {
                agent: agent.id(),
                from,
                to,
            })?;
        debug!(
            "[Mission] agent {index} route of {} steps to {:?}",
            route.len(),
            route.final_waypoint()
        );
        agent.assign_route(route);
        Ok(())
    }

    fn record_search(&mut self, outcome: &SearchOutcome) {
        self.metrics.nodes_expanded += outcome.nodes_expanded as u64;
    }

    /// Whether agent `index` may step into `cell`.
    fn is_free(&self, cell: Position, index: usize) -> bool {
        if self.state.goal() == Some(cell) {
            return true;
        }
        !self
            .fleet
            .iter()
            .enumerate()
            .any(|(i, a)| i != index && a.position() == cell)
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Current phase.
    pub fn state(&self) -> MissionState {
        self.state
    }

    /// The discovered goal, once known.
    pub fn goal(&self) -> Option<Position> {
        self.state.goal()
    }

    /// The shared start cell.
    pub fn start(&self) -> Position {
        self.start
    }

    /// The configuration the mission runs with.
    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    /// Number of agents, known before the fleet exists.
    pub fn fleet_size(&self) -> usize {
        self.config.fleet_size()
    }

    /// One agent, once the fleet exists.
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.fleet.get(id.index())
    }

    /// The whole fleet, empty before the first decision.
    pub fn agents(&self) -> &[Agent] {
        &self.fleet
    }

    /// Agent positions in identifier order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.fleet.iter().map(Agent::position)
    }

    /// Merged perception.
    pub fn grid(&self) -> &PerceptionGrid {
        &self.grid
    }

    /// Cells some agent has stood on while exploring.
    pub fn visited(&self) -> &IndexSet<Position> {
        &self.visited
    }

    /// Known land or finish cells next to visited territory, not yet
    /// visited.
    pub fn frontier(&self) -> &IndexSet<Position> {
        &self.frontier
    }

    /// Counters accumulated so far.
    pub fn metrics(&self) -> &MissionMetrics {
        &self.metrics
    }

    /// Whether the mission is converging and every agent stands on the
    /// goal.
    pub fn is_complete(&self) -> bool {
        match self.state {
            MissionState::Converging { goal } => self.positions().all(|p| p == goal),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::DEFAULT_PRIORITIES;
    use scout_core::Direction::*;
    use scout_core::SearchError;
    use scout_test_utils::Terrain;

    fn p(col: i32, row: i32) -> Position {
        Position::new(col, row)
    }

    fn mission(text: &str, priorities: Vec<[Direction; 8]>) -> (Terrain, MissionController) {
        let terrain = Terrain::parse(text).unwrap();
        let config = MissionConfig {
            bounds: terrain.bounds(),
            priorities,
        };
        let start = terrain.start().unwrap();
        (terrain, MissionController::new(config, start).unwrap())
    }

    /// One decision for agent `id`, observing with radius 1 around it.
    fn step(
        terrain: &Terrain,
        c: &mut MissionController,
        id: usize,
    ) -> Result<Direction, MissionError> {
        let at = c.agent(AgentId(id)).map_or(c.start(), Agent::position);
        let obs = terrain.observe(at, 1);
        c.decide(AgentId(id), &obs)
    }

    #[test]
    fn first_decision_creates_fleet() {
        let (t, mut c) = mission("+++\n+S+\n+++", DEFAULT_PRIORITIES.to_vec());
        assert_eq!(c.state(), MissionState::Initializing);
        assert!(c.agents().is_empty());
        assert_eq!(c.fleet_size(), 7);

        assert_eq!(step(&t, &mut c, 0).unwrap(), North);
        assert_eq!(c.state(), MissionState::Exploring);
        assert_eq!(c.agents().len(), 7);
        assert_eq!(c.agent(AgentId(0)).unwrap().position(), p(1, 0));
        assert!(c.positions().skip(1).all(|q| q == p(1, 1)));
        assert!(c.visited().contains(&p(1, 1)));
        assert_eq!(c.frontier().len(), 8);
        assert_eq!(c.metrics().direct_moves, 1);
    }

    #[test]
    fn fleet_fans_out_from_start() {
        let (t, mut c) = mission("+++\n+S+\n+++", DEFAULT_PRIORITIES.to_vec());
        let moves: Vec<_> = (0..7).map(|i| step(&t, &mut c, i).unwrap()).collect();
        assert_eq!(
            moves,
            vec![North, NorthWest, West, SouthWest, NorthEast, SouthEast, South]
        );
        let mut cells: Vec<_> = c.positions().collect();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), 7);
    }

    #[test]
    fn blocked_priority_move_degrades_to_stay() {
        let (t, mut c) = mission(
            "+++\n+S+\n+++",
            vec![
                [North, NorthWest, NorthEast, West, East, SouthWest, SouthEast, South],
                [North, NorthEast, NorthWest, West, East, SouthWest, SouthEast, South],
            ],
        );
        assert_eq!(step(&t, &mut c, 0).unwrap(), North);
        assert_eq!(step(&t, &mut c, 1).unwrap(), Stay);
        assert_eq!(c.metrics().collision_stays, 1);
        assert_eq!(c.positions().collect::<Vec<_>>(), vec![p(1, 0), p(1, 1)]);
    }

    #[test]
    fn enclosed_agent_searches_for_frontier() {
        let (t, mut c) = mission("+S+\n...", vec![DEFAULT_PRIORITIES[0]]);
        assert_eq!(step(&t, &mut c, 0).unwrap(), West);
        assert_eq!(c.metrics().frontier_searches, 0);

        // Nothing unvisited around (0, 0); the only frontier is (2, 0).
        assert_eq!(step(&t, &mut c, 0).unwrap(), East);
        assert_eq!(c.metrics().frontier_searches, 1);
        assert_eq!(c.metrics().direct_moves, 1);
        assert_eq!(c.agent(AgentId(0)).unwrap().route().len(), 1);

        assert_eq!(step(&t, &mut c, 0).unwrap(), East);
        assert_eq!(c.metrics().route_steps, 2);
        assert_eq!(c.agent(AgentId(0)).unwrap().position(), p(2, 0));

        let err = step(&t, &mut c, 0).unwrap_err();
        assert_eq!(
            err,
            MissionError::Search {
                agent: AgentId(0),
                source: SearchError::UnreachableFrontier {
                    origin: p(2, 0),
                    explored: 3,
                },
            }
        );
    }

    #[test]
    fn blocked_exploration_route_is_replanned_around_fleet() {
        let (t, mut c) = mission(
            "+++\n+S+\n+++",
            vec![DEFAULT_PRIORITIES[0], DEFAULT_PRIORITIES[1]],
        );
        step(&t, &mut c, 0).unwrap();
        c.grid.merge(&t.full_observation());
        c.fleet[0] = Agent::new(AgentId(0), p(0, 1), DEFAULT_PRIORITIES[0]);
        c.fleet[0].assign_route(Route::from_waypoints([p(1, 1), p(2, 1)]));
        c.fleet[1] = Agent::new(AgentId(1), p(1, 1), DEFAULT_PRIORITIES[1]);
        c.visited = t.bounds().iter().filter(|q| *q != p(2, 1)).collect();
        c.frontier = [p(2, 1)].into_iter().collect();
        let stays = c.metrics().collision_stays;
        let searches = c.metrics().frontier_searches;

        assert_eq!(step(&t, &mut c, 0).unwrap(), Stay);
        assert!(!c.agent(AgentId(0)).unwrap().has_route());
        assert_eq!(c.metrics().collision_stays, stays + 1);

        // The fresh route goes around agent 1 instead of waiting on it.
        assert!(matches!(step(&t, &mut c, 0).unwrap(), NorthEast | SouthEast));
        let agent = c.agent(AgentId(0)).unwrap();
        assert_ne!(agent.position(), p(1, 1));
        assert_eq!(agent.route().final_waypoint(), Some(p(2, 1)));
        assert_eq!(c.metrics().frontier_searches, searches + 1);
    }

    #[test]
    fn frontier_search_falls_back_through_the_fleet() {
        let (t, mut c) = mission("S++", vec![DEFAULT_PRIORITIES[0], DEFAULT_PRIORITIES[1]]);
        step(&t, &mut c, 0).unwrap();
        c.grid.merge(&t.full_observation());
        c.fleet[0] = Agent::new(AgentId(0), p(0, 0), DEFAULT_PRIORITIES[0]);
        c.fleet[1] = Agent::new(AgentId(1), p(1, 0), DEFAULT_PRIORITIES[1]);
        c.visited = [p(0, 0), p(1, 0)].into_iter().collect();
        c.frontier = [p(2, 0)].into_iter().collect();
        let stays = c.metrics().collision_stays;
        let searches = c.metrics().frontier_searches;

        // Only a route through agent 1 exists, so the agent waits.
        assert_eq!(c.decide(AgentId(0), &Observation::new()).unwrap(), Stay);
        assert_eq!(c.metrics().frontier_searches, searches + 2);
        assert_eq!(c.metrics().collision_stays, stays + 1);
        assert!(!c.agent(AgentId(0)).unwrap().has_route());
        assert_eq!(c.agent(AgentId(0)).unwrap().position(), p(0, 0));

        c.frontier.clear();
        assert_eq!(
            c.decide(AgentId(0), &Observation::new()),
            Err(MissionError::Search {
                agent: AgentId(0),
                source: SearchError::UnreachableFrontier {
                    origin: p(0, 0),
                    explored: 3,
                },
            })
        );
    }

    #[test]
    fn blocked_converging_step_keeps_route() {
        let (t, mut c) = mission("S+++F", vec![DEFAULT_PRIORITIES[0], DEFAULT_PRIORITIES[1]]);
        step(&t, &mut c, 0).unwrap();
        c.grid.merge(&t.full_observation());
        c.state = MissionState::Converging { goal: p(4, 0) };
        c.fleet[0] = Agent::new(AgentId(0), p(0, 0), DEFAULT_PRIORITIES[0]);
        c.fleet[0].assign_route(Route::from_waypoints([p(1, 0), p(2, 0), p(3, 0), p(4, 0)]));
        c.fleet[1] = Agent::new(AgentId(1), p(1, 0), DEFAULT_PRIORITIES[1]);
        c.fleet[1].assign_route(Route::from_waypoints([p(2, 0), p(3, 0), p(4, 0)]));
        let stays = c.metrics().collision_stays;

        assert_eq!(c.decide(AgentId(0), &Observation::new()).unwrap(), Stay);
        assert_eq!(c.agent(AgentId(0)).unwrap().route().len(), 4);
        assert_eq!(c.metrics().collision_stays, stays + 1);

        assert_eq!(c.decide(AgentId(1), &Observation::new()).unwrap(), East);
        assert_eq!(c.decide(AgentId(0), &Observation::new()).unwrap(), East);
        let agent = c.agent(AgentId(0)).unwrap();
        assert_eq!(agent.position(), p(1, 0));
        assert_eq!(agent.route().len(), 3);
    }

    #[test]
    fn failed_convergence_plan_is_retried() {
        let (t, mut c) = mission("S+++F", vec![DEFAULT_PRIORITIES[0], DEFAULT_PRIORITIES[1]]);
        assert_eq!(step(&t, &mut c, 0).unwrap(), East);
        // (2, 0) stays unknown, cutting agent 0 off from the goal.
        let far: Observation = [(p(3, 0), CellState::Land), (p(4, 0), CellState::Finish)]
            .into_iter()
            .collect();
        c.grid.merge(&far);
        c.state = MissionState::GoalFound { goal: p(4, 0) };

        let err = c.decide(AgentId(1), &Observation::new()).unwrap_err();
        assert!(matches!(
            err,
            MissionError::Search {
                agent: AgentId(0),
                source: SearchError::UnreachableGoal { .. },
            }
        ));
        assert_eq!(c.state(), MissionState::GoalFound { goal: p(4, 0) });
        assert_eq!(c.metrics().goal_searches, 0);

        c.grid.merge(&t.full_observation());
        assert!(c.decide(AgentId(1), &Observation::new()).is_ok());
        assert_eq!(c.state(), MissionState::Converging { goal: p(4, 0) });
        assert_eq!(c.metrics().goal_searches, 2);
    }

    #[test]
    fn discovery_steps_onto_goal() {
        let (t, mut c) = mission("+++++\n+S+F+\n+++++", vec![DEFAULT_PRIORITIES[4]]);
        assert_eq!(step(&t, &mut c, 0).unwrap(), NorthEast);
        assert_eq!(step(&t, &mut c, 0).unwrap(), SouthEast);
        assert_eq!(c.state(), MissionState::GoalFound { goal: p(3, 1) });
        assert_eq!(c.goal(), Some(p(3, 1)));

        assert_eq!(step(&t, &mut c, 0).unwrap(), Stay);
        assert_eq!(c.state(), MissionState::Converging { goal: p(3, 1) });
        assert_eq!(c.metrics().goal_searches, 1);
        assert!(c.is_complete());
    }

    #[test]
    fn convergence_plans_for_whole_fleet() {
        let (t, mut c) = mission(
            "+++++\n+S+F+\n+++++",
            vec![DEFAULT_PRIORITIES[4], DEFAULT_PRIORITIES[0]],
        );
        assert_eq!(step(&t, &mut c, 0).unwrap(), NorthEast);
        assert_eq!(step(&t, &mut c, 1).unwrap(), North);

        assert_eq!(step(&t, &mut c, 0).unwrap(), SouthEast);
        assert!(matches!(c.state(), MissionState::GoalFound { .. }));

        // Agent 1's decision plans both routes.
        let d = step(&t, &mut c, 1).unwrap();
        assert!(matches!(d, East | SouthEast));
        assert_eq!(c.metrics().goal_searches, 2);
        assert!(!c.agent(AgentId(0)).unwrap().has_route());
        assert_eq!(
            c.agent(AgentId(1)).unwrap().route().final_waypoint(),
            Some(p(3, 1))
        );
        assert!(!c.is_complete());

        assert_eq!(step(&t, &mut c, 0).unwrap(), Stay);
        assert!(matches!(step(&t, &mut c, 1).unwrap(), East | SouthEast));
        assert!(c.positions().all(|q| q == p(3, 1)));
        assert!(c.is_complete());
    }

    #[test]
    fn converging_ignores_new_observations() {
        let (t, mut c) = mission("+++++\n+S+F+\n+++++", vec![DEFAULT_PRIORITIES[4]]);
        for _ in 0..3 {
            step(&t, &mut c, 0).unwrap();
        }
        let known = c.grid().known_count();
        c.decide(AgentId(0), &t.full_observation()).unwrap();
        assert_eq!(c.grid().known_count(), known);
    }

    #[test]
    fn invalid_agent_changes_nothing() {
        let (_, mut c) = mission("+S+", DEFAULT_PRIORITIES.to_vec());
        let err = c.decide(AgentId(7), &Observation::new()).unwrap_err();
        assert_eq!(
            err,
            MissionError::InvalidAgentIndex {
                index: 7,
                fleet_size: 7
            }
        );
        assert_eq!(c.state(), MissionState::Initializing);
        assert_eq!(c.metrics().decisions, 0);
    }

    #[test]
    fn non_unit_route_step_is_surfaced() {
        let (t, mut c) = mission("+++++\n+++++\n++S++\n+++++\n+++++", vec![DEFAULT_PRIORITIES[0]]);
        step(&t, &mut c, 0).unwrap();
        let at = c.fleet[0].position();
        c.fleet[0].assign_route(Route::from_waypoints([p(4, 4)]));
        assert_eq!(
            step(&t, &mut c, 0),
            Err(MissionError::IllegalMoveAttempt {
                agent: AgentId(0),
                from: at,
                to: p(4, 4),
            })
        );
        assert!(c
            .assign_route(0, Route::from_waypoints([at.step(North), p(0, 0)]))
            .is_err());
    }

    #[test]
    fn start_outside_grid_rejected() {
        let err = MissionController::new(MissionConfig::default(), p(100, 0)).unwrap_err();
        assert_eq!(err, ConfigError::StartOutOfBounds { start: p(100, 0) });
    }
}
