//! Mission phases.

use std::fmt;

use scout_core::Position;

/// Where the mission is in its lifecycle.
///
/// Advances Initializing → Exploring → GoalFound → Converging and never
/// goes back. The goal is carried by the two phases that know it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissionState {
    /// No decision has been made yet; the fleet does not exist.
    #[default]
    Initializing,
    /// Agents spread out over unvisited territory.
    Exploring,
    /// An agent has seen the finish; routes are planned on the next
    /// decision.
    GoalFound {
        /// The discovered finish cell.
        goal: Position,
    },
    /// Every agent follows its precomputed route to the goal.
    Converging {
        /// The discovered finish cell.
        goal: Position,
    },
}

impl MissionState {
    /// The discovered goal, once known.
    pub fn goal(&self) -> Option<Position> {
        match self {
            Self::GoalFound { goal } | Self::Converging { goal } => Some(*goal),
            Self::Initializing | Self::Exploring => None,
        }
    }

    /// Short phase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Exploring => "exploring",
            Self::GoalFound { .. } => "goal-found",
            Self::Converging { .. } => "converging",
        }
    }
}

impl fmt::Display for MissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.goal() {
            Some(goal) => write!(f, "{} (goal {goal})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_only_after_discovery() {
        let g = Position::new(3, 4);
        assert_eq!(MissionState::default(), MissionState::Initializing);
        assert_eq!(MissionState::Exploring.goal(), None);
        assert_eq!(MissionState::GoalFound { goal: g }.goal(), Some(g));
        assert_eq!(MissionState::Converging { goal: g }.goal(), Some(g));
    }

    #[test]
    fn display() {
        assert_eq!(MissionState::Exploring.to_string(), "exploring");
        assert_eq!(
            MissionState::Converging {
                goal: Position::new(1, 2)
            }
            .to_string(),
            "converging (goal (1, 2))"
        );
    }
}
