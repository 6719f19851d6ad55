//! Errors surfaced by [`MissionController::decide`](crate::MissionController::decide).

use std::error::Error;
use std::fmt;

use scout_core::{AgentId, Position, SearchError};

/// A decision could not be produced.
///
/// Apart from [`InvalidAgentIndex`](Self::InvalidAgentIndex), these point
/// at an inconsistency inside the mission and are never folded into a
/// `Stay`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MissionError {
    /// A frontier or goal search for `agent` failed.
    Search {
        /// The agent the search ran for.
        agent: AgentId,
        /// What the search reported.
        source: SearchError,
    },
    /// The requested agent is not part of the fleet.
    InvalidAgentIndex {
        /// The rejected index.
        index: usize,
        /// Configured fleet size.
        fleet_size: usize,
    },
    /// A route waypoint is not a unit step from its predecessor.
    IllegalMoveAttempt {
        /// The agent holding the route.
        agent: AgentId,
        /// Cell the step starts from.
        from: Position,
        /// Offending waypoint.
        to: Position,
    },
}

impl fmt::Display for MissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search { agent, source } => write!(f, "agent {agent}: {source}"),
            Self::InvalidAgentIndex { index, fleet_size } => {
                write!(f, "agent index {index} out of range for fleet of {fleet_size}")
            }
            Self::IllegalMoveAttempt { agent, from, to } => {
                write!(f, "agent {agent}: route step {from} -> {to} is not a unit move")
            }
        }
    }
}

impl Error for MissionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Search { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_error_is_chained() {
        let e = MissionError::Search {
            agent: AgentId(3),
            source: SearchError::UnreachableFrontier {
                origin: Position::new(1, 1),
                explored: 9,
            },
        };
        assert!(e.to_string().starts_with("agent 3: "));
        assert!(e.source().is_some());
    }

    #[test]
    fn display_messages() {
        let e = MissionError::InvalidAgentIndex {
            index: 7,
            fleet_size: 7,
        };
        assert_eq!(e.to_string(), "agent index 7 out of range for fleet of 7");
        assert!(e.source().is_none());

        let e = MissionError::IllegalMoveAttempt {
            agent: AgentId(0),
            from: Position::new(0, 0),
            to: Position::new(2, 0),
        };
        assert_eq!(
            e.to_string(),
            "agent 0: route step (0, 0) -> (2, 0) is not a unit move"
        );
    }
}
