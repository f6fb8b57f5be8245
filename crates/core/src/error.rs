//! Error types for the huffcode system.
//!
//! All operations return structured errors rather than panicking.
//! This enables graceful shutdown and clear error reporting.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Heap: bounded min-heap insert/extract failures
/// - Arena: node allocation past the fixed capacity
/// - Tree: encoding-tree construction failures
/// - I/O: file system operations (harness only; the core does no I/O)
#[derive(Debug, Error)]
pub enum Error {
    /// Priority heap error (capacity exceeded or extraction from empty)
    #[error("heap error: {0}")]
    Heap(#[from] HeapError),

    /// Node arena error (allocation past fixed capacity)
    #[error("arena error: {0}")]
    Arena(#[from] ArenaError),

    /// Tree construction error (e.g., no symbols to build from)
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bounded min-heap errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeapError {
    /// Insert attempted with the heap already holding its maximum entries.
    /// The insert is rejected; the heap is left unchanged.
    #[error("heap full: capacity {capacity} pending entries")]
    CapacityExceeded { capacity: usize },

    /// Extraction attempted on an empty heap. Inside a correct tree build
    /// this indicates a caller bug and must not be swallowed.
    #[error("extract from empty heap")]
    Empty,
}

/// Node arena errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArenaError {
    /// Allocation attempted with the arena already at its node limit.
    /// Fatal for this fixed-size design: construction aborts, no root.
    #[error("arena full: capacity {capacity} nodes")]
    CapacityExceeded { capacity: usize },
}

/// Tree construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// No leaf nodes were supplied (source text contained no recognized
    /// symbols). No tree exists; all codes are absent.
    #[error("empty source: no symbols to build a tree from")]
    EmptySource,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
