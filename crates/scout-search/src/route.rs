//! Committed single-step routes.

use scout_core::Position;

/// An ordered sequence of waypoints, nearest first, consumed one per tick.
///
/// Stored as a stack with the next waypoint on top, so consuming a step is
/// a `pop`. Every waypoint is expected to be a unit step from the one
/// before it; [`check_contiguous`](Self::check_contiguous) verifies that.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    stack: Vec<Position>,
}

impl Route {
    /// An exhausted route.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from waypoints listed nearest first.
    pub fn from_waypoints(nearest_first: impl IntoIterator<Item = Position>) -> Self {
        let mut stack: Vec<Position> = nearest_first.into_iter().collect();
        stack.reverse();
        Self { stack }
    }

    /// Build from a stack whose last element is the next waypoint.
    pub(crate) fn from_stack(stack: Vec<Position>) -> Self {
        Self { stack }
    }

    /// Remaining waypoints.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Whether the route is exhausted.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// The next waypoint, without consuming it.
    pub fn peek_next(&self) -> Option<Position> {
        self.stack.last().copied()
    }

    /// Consume and return the next waypoint.
    pub fn pop_next(&mut self) -> Option<Position> {
        self.stack.pop()
    }

    /// Where the route ends.
    pub fn final_waypoint(&self) -> Option<Position> {
        self.stack.first().copied()
    }

    /// Remaining waypoints, nearest first.
    pub fn waypoints(&self) -> impl Iterator<Item = Position> + '_ {
        self.stack.iter().rev().copied()
    }

    /// Check that, starting from `origin`, every waypoint is one of the
    /// eight neighbours of its predecessor.
    ///
    /// Returns the first offending `(from, to)` pair.
    pub fn check_contiguous(&self, origin: Position) -> Result<(), (Position, Position)> {
        let mut prev = origin;
        for next in self.waypoints() {
            if !prev.is_adjacent(next) {
                return Err((prev, next));
            }
            prev = next;
        }
        Ok(())
    }
}
