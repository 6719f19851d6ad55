//! A minimal host loop.

use std::error::Error;
use std::fmt;

use scout_core::{AgentId, CellState, Position};
use scout_mission::{ConfigError, MissionConfig, MissionController, MissionError};
use scout_test_utils::Terrain;

/// Why an expedition stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpeditionError {
    /// The terrain has no start cell.
    MissingStart,
    /// The controller rejected the configuration.
    Config(ConfigError),
    /// A decision failed.
    Mission(MissionError),
    /// A returned move leaves the grid.
    OutOfBounds {
        /// The moving agent.
        agent: AgentId,
        /// The target cell.
        at: Position,
    },
    /// A returned move enters water or unknown terrain.
    BlockedCell {
        /// The moving agent.
        agent: AgentId,
        /// The target cell.
        at: Position,
        /// What the target really is.
        cell: CellState,
    },
    /// A returned move enters a cell another agent holds.
    Collision {
        /// The moving agent.
        agent: AgentId,
        /// The contested cell.
        at: Position,
    },
    /// The mission did not complete within the tick budget.
    TickLimit {
        /// The budget.
        max_ticks: u64,
    },
}

impl fmt::Display for ExpeditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "terrain has no start cell"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Mission(e) => write!(f, "mission: {e}"),
            Self::OutOfBounds { agent, at } => {
                write!(f, "agent {agent} sent out of bounds to {at}")
            }
            Self::BlockedCell { agent, at, cell } => {
                write!(f, "agent {agent} sent onto {cell} at {at}")
            }
            Self::Collision { agent, at } => write!(f, "agent {agent} collided at {at}"),
            Self::TickLimit { max_ticks } => {
                write!(f, "mission incomplete after {max_ticks} ticks")
            }
        }
    }
}

impl Error for ExpeditionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Mission(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for ExpeditionError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<MissionError> for ExpeditionError {
    fn from(e: MissionError) -> Self {
        Self::Mission(e)
    }
}

/// Drives a mission over a known terrain, one decision per agent per
/// tick in identifier order.
///
/// The expedition keeps its own record of where each agent is and applies
/// every returned direction to it, rejecting moves that leave the grid,
/// enter a non-traversable cell, or land on another agent away from the
/// goal.
#[derive(Debug)]
pub struct Expedition {
    terrain: Terrain,
    controller: MissionController,
    positions: Vec<Position>,
    visibility: u32,
    ticks: u64,
}

impl Expedition {
    /// Start a mission at the terrain's start cell. Agents see a square
    /// window of Chebyshev radius `visibility`.
    pub fn new(
        terrain: Terrain,
        config: MissionConfig,
        visibility: u32,
    ) -> Result<Self, ExpeditionError> {
        let start = terrain.start().ok_or(ExpeditionError::MissingStart)?;
        let positions = vec![start; config.fleet_size()];
        let controller = MissionController::new(config, start)?;
        Ok(Self {
            terrain,
            controller,
            positions,
            visibility,
            ticks: 0,
        })
    }

    /// One decision for every agent.
    pub fn tick(&mut self) -> Result<(), ExpeditionError> {
        for index in 0..self.positions.len() {
            let agent = AgentId(index);
            let here = self.positions[index];
            let observation = self.terrain.observe(here, self.visibility);
            let direction = self.controller.decide(agent, &observation)?;
            if direction.is_stay() {
                continue;
            }

            let at = here.step(direction);
            if !self.terrain.bounds().contains(at) {
                return Err(ExpeditionError::OutOfBounds { agent, at });
            }
            let cell = self.terrain.get(at);
            if !(cell.is_traversable() || cell == CellState::Finish) {
                return Err(ExpeditionError::BlockedCell { agent, at, cell });
            }
            let shared = self.controller.goal() != Some(at)
                && self
                    .positions
                    .iter()
                    .enumerate()
                    .any(|(i, p)| i != index && *p == at);
            if shared {
                return Err(ExpeditionError::Collision { agent, at });
            }
            self.positions[index] = at;
        }
        self.ticks += 1;
        Ok(())
    }

    /// Tick until every agent stands on the goal. Returns the number of
    /// ticks taken in total.
    pub fn run_until_converged(&mut self, max_ticks: u64) -> Result<u64, ExpeditionError> {
        while !self.controller.is_complete() {
            if self.ticks >= max_ticks {
                return Err(ExpeditionError::TickLimit { max_ticks });
            }
            self.tick()?;
        }
        Ok(self.ticks)
    }

    /// Agent positions as the host sees them.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// The mission being driven.
    pub fn controller(&self) -> &MissionController {
        &self.controller
    }

    /// The ground truth.
    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    /// Completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
