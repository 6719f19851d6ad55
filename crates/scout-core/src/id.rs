//! Strongly-typed identifiers.

use std::fmt;

/// Identifies one agent of the fleet.
///
/// `AgentId(n)` is the n-th entry of the mission's exploration priority
/// table; valid identifiers are `0..fleet_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub usize);

impl AgentId {
    /// The identifier as a fleet index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for AgentId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}
