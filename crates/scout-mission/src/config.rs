//! Mission configuration and validation.

use std::error::Error;
use std::fmt;

use scout_core::{Direction, Position};
use scout_grid::{GridBounds, GridError};

use crate::priority::{is_permutation, DEFAULT_PRIORITIES};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`MissionConfig::validate`] and mission construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid dimensions were rejected.
    Grid(GridError),
    /// The priority table has no rows, so there is no fleet.
    EmptyFleet,
    /// A priority row does not list each moving direction exactly once.
    NotAPermutation {
        /// Row (agent index) at fault.
        agent: usize,
    },
    /// Two agents share the same priority order and would move in lockstep.
    DuplicatePriority {
        /// The later row.
        agent: usize,
        /// The earlier row it repeats.
        duplicate_of: usize,
    },
    /// The shared start lies outside the grid.
    StartOutOfBounds {
        /// The rejected start.
        start: Position,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::EmptyFleet => write!(f, "priority table is empty"),
            Self::NotAPermutation { agent } => {
                write!(f, "priority row {agent} is not a permutation of the 8 moves")
            }
            Self::DuplicatePriority {
                agent,
                duplicate_of,
            } => write!(f, "priority row {agent} repeats row {duplicate_of}"),
            Self::StartOutOfBounds { start } => {
                write!(f, "start {start} lies outside the grid")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── MissionConfig ──────────────────────────────────────────────────

/// Everything fixed for the lifetime of a mission.
///
/// Fleet size is the number of priority rows; agent `n` uses row `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionConfig {
    /// Grid dimensions. Default: 100×100.
    pub bounds: GridBounds,
    /// One exploration order per agent. Default: [`DEFAULT_PRIORITIES`].
    pub priorities: Vec<[Direction; 8]>,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            bounds: GridBounds::default(),
            priorities: DEFAULT_PRIORITIES.to_vec(),
        }
    }
}

impl MissionConfig {
    /// Default priorities on a `cols`×`rows` grid.
    pub fn with_dimensions(cols: u32, rows: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            bounds: GridBounds::new(cols, rows)?,
            ..Self::default()
        })
    }

    /// Number of agents.
    pub fn fleet_size(&self) -> usize {
        self.priorities.len()
    }

    /// Check the priority table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.priorities.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        for (agent, row) in self.priorities.iter().enumerate() {
            if !is_permutation(row) {
                return Err(ConfigError::NotAPermutation { agent });
            }
            if let Some(duplicate_of) = self.priorities[..agent].iter().position(|r| r == row) {
                return Err(ConfigError::DuplicatePriority {
                    agent,
                    duplicate_of,
                });
            }
        }
        Ok(())
    }

    /// [`validate`](Self::validate) plus a bounds check on `start`.
    pub fn validate_start(&self, start: Position) -> Result<(), ConfigError> {
        self.validate()?;
        if !self.bounds.contains(start) {
            return Err(ConfigError::StartOutOfBounds { start });
        }
        Ok(())
    }
}
