//! Fixed-capacity arena of encoding-tree nodes.
//!
//! Tree nodes live in a flat arena and refer to each other by index, so
//! the whole tree is a handful of small vectors rather than a web of
//! boxed allocations. The arena only grows within one build: leaves are
//! created once from frequency data, internal nodes exactly once per
//! merge, and nothing is ever freed or mutated afterward.
//!
//! # Capacity
//!
//! The arena holds at most [`MAX_NODES`] nodes total (leaves + internal).
//! With a 26-letter alphabet a full Huffman tree needs at most
//! 26 + 25 = 51 nodes, so 64 leaves comfortable headroom. Exceeding the
//! limit is a hard construction error, not a reallocation.
//!
//! # Child links
//!
//! Children are `Option<NodeId>` rather than index sentinels. A node has
//! either both children (internal) or neither (leaf); no constructor can
//! produce a node with exactly one child.

use crate::error::{ArenaError, Result};

/// Maximum number of nodes (leaves + internal) in one arena.
pub const MAX_NODES: usize = 64;

/// Handle to a node in a [`NodeArena`].
///
/// Only valid for the arena that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The raw arena index behind this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single tree node.
///
/// # Invariants
/// - `left` and `right` are both `None` (leaf) or both `Some` (internal)
/// - `symbol` is `Some` only for leaves
/// - `weight` is the sum of descendant leaf frequencies
#[derive(Debug, Clone)]
struct Node {
    weight: u64,
    symbol: Option<char>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Append-only node storage with a fixed capacity.
#[derive(Debug, Clone)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(MAX_NODES),
        }
    }

    /// Number of nodes allocated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no nodes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a leaf node for `symbol` with the given frequency weight.
    ///
    /// # Errors
    /// Returns `ArenaError::CapacityExceeded` if the arena already holds
    /// [`MAX_NODES`] nodes. The arena is left unchanged on failure.
    pub fn alloc_leaf(&mut self, symbol: char, weight: u64) -> Result<NodeId> {
        self.alloc(Node {
            weight,
            symbol: Some(symbol),
            left: None,
            right: None,
        })
    }

    /// Allocate an internal node merging `left` and `right`.
    ///
    /// The new node's weight is the sum of its children's weights, fixed
    /// at creation.
    ///
    /// # Errors
    /// Returns `ArenaError::CapacityExceeded` if the arena already holds
    /// [`MAX_NODES`] nodes. The arena is left unchanged on failure.
    pub fn alloc_internal(&mut self, left: NodeId, right: NodeId) -> Result<NodeId> {
        let weight = self.weight_of(left) + self.weight_of(right);
        self.alloc(Node {
            weight,
            symbol: None,
            left: Some(left),
            right: Some(right),
        })
    }

    fn alloc(&mut self, node: Node) -> Result<NodeId> {
        if self.nodes.len() >= MAX_NODES {
            return Err(ArenaError::CapacityExceeded {
                capacity: MAX_NODES,
            }
            .into());
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        Ok(id)
    }

    /// True if `id` refers to a leaf (no children).
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.0].left.is_none()
    }

    /// Weight of the node at `id`.
    pub fn weight_of(&self, id: NodeId) -> u64 {
        self.nodes[id.0].weight
    }

    /// Symbol of the node at `id` (`None` for internal nodes).
    pub fn symbol_of(&self, id: NodeId) -> Option<char> {
        self.nodes[id.0].symbol
    }

    /// Child links of the node at `id`: `(left, right)`.
    ///
    /// Both `None` for a leaf, both `Some` for an internal node.
    pub fn children_of(&self, id: NodeId) -> (Option<NodeId>, Option<NodeId>) {
        let node = &self.nodes[id.0];
        (node.left, node.right)
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_alloc_leaf() {
        let mut arena = NodeArena::new();
        let id = arena.alloc_leaf('a', 5).unwrap();

        assert_eq!(id.index(), 0);
        assert!(arena.is_leaf(id));
        assert_eq!(arena.weight_of(id), 5);
        assert_eq!(arena.symbol_of(id), Some('a'));
        assert_eq!(arena.children_of(id), (None, None));
    }

    #[test]
    fn test_alloc_internal_sums_weights() {
        let mut arena = NodeArena::new();
        let a = arena.alloc_leaf('a', 3).unwrap();
        let b = arena.alloc_leaf('b', 4).unwrap();
        let parent = arena.alloc_internal(a, b).unwrap();

        assert_eq!(parent.index(), 2);
        assert!(!arena.is_leaf(parent));
        assert_eq!(arena.weight_of(parent), 7);
        assert_eq!(arena.symbol_of(parent), None);
        assert_eq!(arena.children_of(parent), (Some(a), Some(b)));
    }

    #[test]
    fn test_indices_are_sequential() {
        let mut arena = NodeArena::new();
        for i in 0..10 {
            let id = arena.alloc_leaf('x', 1).unwrap();
            assert_eq!(id.index(), i);
        }
        assert_eq!(arena.len(), 10);
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut arena = NodeArena::new();
        for _ in 0..MAX_NODES {
            arena.alloc_leaf('x', 1).unwrap();
        }

        // 65th allocation must fail and leave the arena unchanged
        let result = arena.alloc_leaf('y', 1);
        assert!(matches!(
            result,
            Err(Error::Arena(ArenaError::CapacityExceeded { capacity: 64 }))
        ));
        assert_eq!(arena.len(), MAX_NODES);
    }
}
