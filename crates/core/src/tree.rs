//! Encoding-tree construction: Huffman's node-merging loop.
//!
//! Given leaf nodes already allocated in the arena (one per distinct
//! symbol, weighted by occurrence count), repeatedly merge the two
//! lowest-weight pending nodes into a fresh internal node until a single
//! root remains.
//!
//! # Determinism
//!
//! The heap's `(weight, index)` order makes every extraction — and
//! therefore the whole tree shape — a pure function of the input
//! frequencies. The first-extracted node of each pair becomes the left
//! child and the second the right; this labeling is preserved exactly so
//! that code tables match across runs and across implementations of the
//! same contract.

use crate::arena::{NodeArena, NodeId};
use crate::error::{Result, TreeError};
use crate::heap::MinHeap;

/// Build the encoding tree over `leaves` and return the root id.
///
/// # Arguments
/// - `arena`: arena holding the leaves; internal nodes are allocated here
/// - `leaves`: ids of the leaf nodes to combine
///
/// # Errors
/// - `TreeError::EmptySource` if `leaves` is empty (no tree exists)
/// - `HeapError::CapacityExceeded` / `ArenaError::CapacityExceeded` if the
///   workload exceeds the fixed 64-node bound
pub fn build_tree(arena: &mut NodeArena, leaves: &[NodeId]) -> Result<NodeId> {
    let mut heap = MinHeap::new();

    // Step 1: all leaves become pending
    for &leaf in leaves {
        heap.insert(leaf, arena.weight_of(leaf))?;
    }

    // Step 2: nothing to build from
    if heap.is_empty() {
        return Err(TreeError::EmptySource.into());
    }

    // Step 3: merge the two smallest until one node remains.
    // First extracted is the left child, second the right.
    while heap.len() > 1 {
        let left = heap.extract_min()?;
        let right = heap.extract_min()?;

        let parent = arena.alloc_internal(left, right)?;
        heap.insert(parent, arena.weight_of(parent))?;
    }

    // Step 4: the last pending node is the root
    heap.extract_min()
}
