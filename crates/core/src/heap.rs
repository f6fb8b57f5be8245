//! Bounded binary min-heap over pending arena nodes.
//!
//! The tree builder repeatedly needs the two lowest-weight pending nodes,
//! so pending node ids are held in a small binary heap keyed by weight.
//!
//! # Ordering contract
//!
//! Extraction is non-decreasing by `(weight, index)`: on equal weights the
//! smaller arena index comes out first. This is a hard contract, not an
//! implementation detail — it decides which symbols get the shorter codes
//! when frequencies tie, and the generated code table must be reproducible
//! bit-for-bit across runs for the same input. Every comparison in
//! sift-up and sift-down uses this same total order, so no ties survive.
//!
//! # Capacity
//!
//! The heap holds at most [`MAX_PENDING`] entries. A rejected insert
//! leaves the heap unchanged; the caller treats the error as fatal for
//! this workload size.

use crate::arena::NodeId;
use crate::error::{HeapError, Result};

/// Maximum number of pending entries the heap will hold.
pub const MAX_PENDING: usize = 64;

/// One pending entry: an arena node id and its priority weight.
///
/// Ordered lexicographically by `(weight, id)`; the derived `Ord` on the
/// field order gives exactly that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    weight: u64,
    id: NodeId,
}

/// Bounded min-heap of `(weight, NodeId)` entries.
#[derive(Debug, Clone)]
pub struct MinHeap {
    entries: Vec<Entry>,
}

impl MinHeap {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(MAX_PENDING),
        }
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries are pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert `id` as pending with priority `weight`.
    ///
    /// The new entry starts at the tail and sifts up, comparing only
    /// against its parent at `(pos - 1) / 2`.
    ///
    /// # Errors
    /// Returns `HeapError::CapacityExceeded` if [`MAX_PENDING`] entries
    /// are already pending. The heap is left unchanged on failure.
    pub fn insert(&mut self, id: NodeId, weight: u64) -> Result<()> {
        if self.entries.len() >= MAX_PENDING {
            return Err(HeapError::CapacityExceeded {
                capacity: MAX_PENDING,
            }
            .into());
        }

        self.entries.push(Entry { weight, id });
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    /// Remove and return the pending id with the smallest `(weight, index)`.
    ///
    /// The last entry moves into the vacated root and sifts down.
    ///
    /// # Errors
    /// Returns `HeapError::Empty` if no entries are pending.
    pub fn extract_min(&mut self) -> Result<NodeId> {
        if self.entries.is_empty() {
            return Err(HeapError::Empty.into());
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = match self.entries.pop() {
            Some(entry) => entry.id,
            // Unreachable after the emptiness check, but surfaced rather
            // than unwrapped
            None => return Err(HeapError::Empty.into()),
        };
        self.sift_down(0);
        Ok(min)
    }

    /// Restore heap order upward from `pos` after an insert at the tail.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.entries[pos] < self.entries[parent] {
                self.entries.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// Restore heap order downward from `pos` after a root replacement.
    ///
    /// Compares against both children at `2*pos + 1` and `2*pos + 2`,
    /// swapping with the smaller one, stopping once the node is no larger
    /// than its smallest child (or has no children).
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * pos + 1;
            let right = 2 * pos + 2;
            let mut smallest = pos;

            if left < len && self.entries[left] < self.entries[smallest] {
                smallest = left;
            }
            if right < len && self.entries[right] < self.entries[smallest] {
                smallest = right;
            }

            if smallest == pos {
                break;
            }
            self.entries.swap(pos, smallest);
            pos = smallest;
        }
    }
}

impl Default for MinHeap {
    fn default() -> Self {
        Self::new()
    }
}
