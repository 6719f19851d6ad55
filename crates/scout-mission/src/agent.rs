//! Per-agent state.

use scout_core::{AgentId, Direction, Position};
use scout_grid::GridBounds;
use scout_search::Route;
use smallvec::SmallVec;

/// One member of the fleet.
///
/// The priority order is fixed at construction. Position and route change
/// only through the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    id: AgentId,
    position: Position,
    priority: [Direction; 8],
    route: Route,
}

impl Agent {
    /// A fresh agent with no route.
    pub fn new(id: AgentId, position: Position, priority: [Direction; 8]) -> Self {
        Self {
            id,
            position,
            priority,
            route: Route::empty(),
        }
    }

    /// This agent's identifier.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Current cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Exploration priority order.
    pub fn priority(&self) -> &[Direction; 8] {
        &self.priority
    }

    /// The committed route, possibly empty.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Whether a non-empty route is committed.
    pub fn has_route(&self) -> bool {
        !self.route.is_empty()
    }

    /// In-bounds neighbours paired with the direction that reaches them,
    /// in this agent's priority order.
    pub fn neighbours(&self, bounds: &GridBounds) -> SmallVec<[(Direction, Position); 8]> {
        self.priority
            .iter()
            .map(|d| (*d, self.position.step(*d)))
            .filter(|(_, p)| bounds.contains(*p))
            .collect()
    }

    /// Replace the committed route.
    pub fn assign_route(&mut self, route: Route) {
        self.route = route;
    }

    /// Next waypoint of the committed route.
    pub fn next_waypoint(&self) -> Option<Position> {
        self.route.peek_next()
    }

    /// Consume the next waypoint.
    pub fn advance_route(&mut self) -> Option<Position> {
        self.route.pop_next()
    }

    /// Move one step in `direction` and return the new position.
    pub fn apply(&mut self, direction: Direction) -> Position {
        self.position = self.position.step(direction);
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::DEFAULT_PRIORITIES;

    #[test]
    fn neighbours_follow_priority_and_clip() {
        let bounds = GridBounds::new(3, 3).unwrap();
        let a = Agent::new(AgentId(0), Position::new(0, 0), DEFAULT_PRIORITIES[0]);
        let got: Vec<_> = a.neighbours(&bounds).into_iter().map(|(d, _)| d).collect();
        assert_eq!(
            got,
            vec![Direction::East, Direction::SouthEast, Direction::South]
        );

        let centre = Agent::new(AgentId(0), Position::new(1, 1), DEFAULT_PRIORITIES[6]);
        let n = centre.neighbours(&bounds);
        assert_eq!(n.len(), 8);
        assert_eq!(n[0], (Direction::South, Position::new(1, 2)));
    }

    #[test]
    fn route_is_consumed_in_order() {
        let mut a = Agent::new(AgentId(2), Position::new(0, 0), DEFAULT_PRIORITIES[2]);
        assert!(!a.has_route());
        a.assign_route(Route::from_waypoints([Position::new(1, 0), Position::new(2, 1)]));
        assert!(a.has_route());
        assert_eq!(a.next_waypoint(), Some(Position::new(1, 0)));
        assert_eq!(a.advance_route(), Some(Position::new(1, 0)));
        assert_eq!(a.advance_route(), Some(Position::new(2, 1)));
        assert!(!a.has_route());
    }

    #[test]
    fn apply_moves_by_delta() {
        let mut a = Agent::new(AgentId(0), Position::new(5, 5), DEFAULT_PRIORITIES[0]);
        assert_eq!(a.apply(Direction::NorthWest), Position::new(4, 4));
        assert_eq!(a.apply(Direction::Stay), Position::new(4, 4));
        assert_eq!(a.position(), Position::new(4, 4));
    }
}
