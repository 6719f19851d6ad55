//! Arena storage for search trees.
//!
//! Nodes live in one `Vec` and point at their parent by index, so a tree
//! is built with no per-node allocation and dropped in one go. A node
//! never changes after it is pushed; a cheaper path to the same cell is
//! recorded as a fresh node with a different parent.

use scout_core::Position;

use crate::route::Route;

/// Index of a node inside the [`NodeArena`] that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One node of a search tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode {
    /// Cell this node stands for.
    pub position: Position,
    /// Predecessor on the path from the root; `None` for the root.
    pub parent: Option<NodeId>,
    /// Steps from the root.
    pub g: u32,
    /// Heuristic estimate of the remaining steps (`0` for breadth-first).
    pub h: u32,
}

impl SearchNode {
    /// Total score `g + h`.
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

/// Flat storage for one search tree.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    /// An empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes allocated.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been allocated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Push a root node (`g = 0`, no parent).
    pub fn root(&mut self, position: Position, h: u32) -> NodeId {
        self.push(SearchNode {
            position,
            parent: None,
            g: 0,
            h,
        })
    }

    /// Push a child of `parent` one step further from the root.
    pub fn child(&mut self, parent: NodeId, position: Position, h: u32) -> NodeId {
        let g = self.get(parent).g + 1;
        self.push(SearchNode {
            position,
            parent: Some(parent),
            g,
            h,
        })
    }

    /// The node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different arena.
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// Walk parent links from `leaf` back to the root and return the
    /// waypoints, root excluded.
    pub fn trace(&self, leaf: NodeId) -> Route {
        // Leaf first, which is the order Route stores its stack in.
        let mut stack = Vec::with_capacity(self.get(leaf).g as usize);
        let mut cursor = leaf;
        while let Some(parent) = self.get(cursor).parent {
            stack.push(self.get(cursor).position);
            cursor = parent;
        }
        Route::from_stack(stack)
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_extends_cost() {
        let mut arena = NodeArena::new();
        let root = arena.root(Position::new(0, 0), 3);
        let a = arena.child(root, Position::new(1, 0), 2);
        let b = arena.child(a, Position::new(2, 0), 1);
        assert_eq!(arena.get(root).g, 0);
        assert_eq!(arena.get(b).g, 2);
        assert_eq!(arena.get(b).f(), 3);
        assert_eq!(arena.get(b).parent, Some(a));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn trace_excludes_root() {
        let mut arena = NodeArena::new();
        let root = arena.root(Position::new(0, 0), 0);
        let a = arena.child(root, Position::new(1, 1), 0);
        let b = arena.child(a, Position::new(2, 1), 0);
        let route = arena.trace(b);
        let waypoints: Vec<_> = route.waypoints().collect();
        assert_eq!(waypoints, vec![Position::new(1, 1), Position::new(2, 1)]);
    }

    #[test]
    fn trace_of_root_is_empty() {
        let mut arena = NodeArena::new();
        let root = arena.root(Position::new(4, 4), 0);
        assert!(arena.trace(root).is_empty());
    }

    #[test]
    fn reparenting_is_a_new_node() {
        let mut arena = NodeArena::new();
        let root = arena.root(Position::new(0, 0), 0);
        let long = arena.child(root, Position::new(1, 0), 0);
        let long = arena.child(long, Position::new(2, 0), 0);
        let short = arena.child(root, Position::new(2, 0), 0);
        assert_eq!(arena.get(long).g, 2);
        assert_eq!(arena.get(short).g, 1);
        assert_ne!(long, short);
    }
}
