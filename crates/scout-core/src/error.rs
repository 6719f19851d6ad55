//! Error types shared across the search and mission layers.

use std::error::Error;
use std::fmt;

use crate::position::Position;

/// A search exhausted its space without reaching a target.
///
/// Both variants indicate an invariant violation upstream (inconsistent
/// frontier bookkeeping or perception), never an expected outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// No frontier cell is reachable from `origin` over known land.
    UnreachableFrontier {
        /// Where the search started.
        origin: Position,
        /// Nodes expanded before the search gave up.
        explored: usize,
    },
    /// The goal is not reachable from `origin` over known land.
    UnreachableGoal {
        /// Where the search started.
        origin: Position,
        /// The discovered goal.
        goal: Position,
        /// Nodes expanded before the search gave up.
        explored: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnreachableFrontier { origin, explored } => {
                write!(
                    f,
                    "no frontier cell reachable from {origin} (explored {explored} nodes)"
                )
            }
            Self::UnreachableGoal {
                origin,
                goal,
                explored,
            } => {
                write!(
                    f,
                    "goal {goal} unreachable from {origin} (explored {explored} nodes)"
                )
            }
        }
    }
}

impl Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_positions() {
        let e = SearchError::UnreachableGoal {
            origin: Position::new(1, 2),
            goal: Position::new(3, 4),
            explored: 7,
        };
        assert_eq!(
            e.to_string(),
            "goal (3, 4) unreachable from (1, 2) (explored 7 nodes)"
        );
    }
}
