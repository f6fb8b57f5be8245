//! Code assignment: root-to-leaf path labeling.
//!
//! Walks the finished tree and gives every leaf symbol a bit-string code
//! equal to its branch path from the root: `0` for a left turn, `1` for a
//! right turn. Paths from a common root never prefix each other, so the
//! resulting code set is prefix-free by construction.
//!
//! # Single-leaf fallback
//!
//! A tree that is one lone leaf has no path bits at all. Its symbol gets
//! the fixed code `"0"` — an explicit policy, reproduced exactly. Beyond
//! this fallback no path is shortened: a leaf reached via `"000"` keeps
//! all three bits.

use crate::arena::{NodeArena, NodeId};

/// Number of symbols in the alphabet (lowercase letters).
pub const ALPHABET_SIZE: usize = 26;

/// Per-symbol bit-string codes for the lowercase alphabet.
///
/// Produced once per completed tree and immutable afterward. Symbols
/// absent from the source have no code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<String>; ALPHABET_SIZE],
}

impl CodeTable {
    /// Create a table with no codes assigned.
    pub fn new() -> Self {
        Self::default()
    }

    /// The code for `symbol`, if that symbol appeared in the source.
    pub fn get(&self, symbol: char) -> Option<&str> {
        let folded = symbol.to_ascii_lowercase();
        if !folded.is_ascii_lowercase() {
            return None;
        }
        self.codes[folded as usize - 'a' as usize].as_deref()
    }

    /// Number of symbols with an assigned code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_none())
    }

    /// Iterate over `(symbol, code)` pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.codes.iter().enumerate().filter_map(|(i, code)| {
            let symbol = (b'a' + i as u8) as char;
            code.as_deref().map(|c| (symbol, c))
        })
    }

    fn set(&mut self, symbol: char, code: String) {
        self.codes[symbol as usize - 'a' as usize] = Some(code);
    }
}

/// Assign a code to every leaf symbol reachable from `root`.
///
/// Iterative depth-first traversal with an explicit work stack of
/// `(node, path-so-far)` pairs, seeded with the root and the empty path.
/// Child push order only affects traversal order, never the codes: each
/// leaf's path is accumulated independently along the way down.
///
/// Leaf symbols are case-folded; a leaf carrying anything other than a
/// letter is skipped, the same way scanning skips such characters.
pub fn generate_codes(arena: &NodeArena, root: NodeId) -> CodeTable {
    let mut table = CodeTable::new();
    let mut stack: Vec<(NodeId, String)> = vec![(root, String::new())];

    while let Some((node, path)) = stack.pop() {
        if arena.is_leaf(node) {
            // Only lowercase letters get a table slot; fold and skip
            // anything else rather than index out of range
            if let Some(symbol) = arena.symbol_of(node) {
                let folded = symbol.to_ascii_lowercase();
                if folded.is_ascii_lowercase() {
                    if path.is_empty() {
                        // Single-node tree: fixed fallback code
                        table.set(folded, "0".to_string());
                    } else {
                        table.set(folded, path);
                    }
                }
            }
            continue;
        }

        let (left, right) = arena.children_of(node);
        if let Some(r) = right {
            stack.push((r, format!("{path}1")));
        }
        if let Some(l) = left {
            stack.push((l, format!("{path}0")));
        }
    }

    table
}
