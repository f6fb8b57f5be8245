//! huffcode-core: Huffman coding for the lowercase-letter alphabet
//!
//! This library builds a prefix-free binary code for the letters of a
//! text source and uses it to compress the source into a bitstring:
//! - Counts letter frequencies (case-folded, non-letters ignored)
//! - Builds the encoding tree by priority-ordered node merging
//! - Assigns each symbol its root-to-leaf path as a bit-string code
//! - Re-scans the source to emit the encoded bitstring
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `heap`: bounded min-heap over pending node ids
//! - `arena`: fixed-capacity storage for tree nodes
//! - `tree`: the node-merging construction loop
//! - `codes`: code assignment and the per-symbol code table
//! - `freq`: frequency scanning and message encoding
//! - `stats`: observable run statistics
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Bounded memory**: Arena and heap hold at most 64 entries each
//! - **Deterministic**: The `(weight, index)` tie-break makes the code
//!   table a pure function of the input text
//! - **No hidden state**: Arena and heap are explicit values the tree
//!   builder and code generator operate on, never globals

pub mod arena;
pub mod codes;
pub mod error;
pub mod freq;
pub mod heap;
pub mod stats;
pub mod tree;

// Re-export commonly used types
pub use arena::{NodeArena, NodeId, MAX_NODES};
pub use codes::{generate_codes, CodeTable};
pub use error::{Error, Result};
pub use freq::{compress, encode_message, FrequencyTable};
pub use heap::{MinHeap, MAX_PENDING};
pub use stats::EncodingStats;
pub use tree::build_tree;
