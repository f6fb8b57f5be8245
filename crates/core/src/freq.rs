//! Frequency scanning and message encoding.
//!
//! The pipeline's two ends: counting letter occurrences in the source
//! text (the sole input to leaf creation), and re-scanning the same text
//! to emit its bit-string encoding once the code table exists.
//!
//! Scanning is case-folded and letter-only: `A` counts as `a`, and
//! anything outside `a..=z` is ignored both while counting and while
//! encoding.

use crate::arena::{NodeArena, NodeId};
use crate::codes::{generate_codes, CodeTable, ALPHABET_SIZE};
use crate::error::{Error, Result, TreeError};
use crate::tree::build_tree;

/// Occurrence counts for the 26 lowercase letters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Count letter frequencies in `text`.
    ///
    /// Uppercase letters are folded to lowercase; non-letter characters
    /// are skipped.
    pub fn scan(text: &str) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for ch in text.chars() {
            let folded = ch.to_ascii_lowercase();
            if folded.is_ascii_lowercase() {
                counts[folded as usize - 'a' as usize] += 1;
            }
        }
        Self { counts }
    }

    /// Occurrence count for `symbol` (0 for non-letters).
    pub fn count(&self, symbol: char) -> u64 {
        let folded = symbol.to_ascii_lowercase();
        if folded.is_ascii_lowercase() {
            self.counts[folded as usize - 'a' as usize]
        } else {
            0
        }
    }

    /// Number of distinct symbols with a nonzero count.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Total letters counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Allocate one leaf per present symbol, in alphabetical order.
    ///
    /// Alphabetical allocation pins the arena indices: when two symbols
    /// tie on weight, the heap's index tie-break favors the one earlier
    /// in the alphabet.
    ///
    /// # Errors
    /// Returns `ArenaError::CapacityExceeded` if the arena cannot hold
    /// the leaves (cannot happen on a fresh arena, since 26 < 64).
    pub fn make_leaves(&self, arena: &mut NodeArena) -> Result<Vec<NodeId>> {
        let mut leaves = Vec::new();
        for (i, &count) in self.counts.iter().enumerate() {
            if count > 0 {
                let symbol = (b'a' + i as u8) as char;
                leaves.push(arena.alloc_leaf(symbol, count)?);
            }
        }
        Ok(leaves)
    }
}

/// Replace each letter of `text` with its code, skipping non-letters.
///
/// Case-folds the same way scanning does, so every letter that was
/// counted has a code. An empty table yields an empty encoding.
pub fn encode_message(text: &str, table: &CodeTable) -> String {
    let mut encoded = String::new();
    for ch in text.chars() {
        if let Some(code) = table.get(ch) {
            encoded.push_str(code);
        }
    }
    encoded
}

/// Run the full pipeline: scan, build the tree, generate codes, encode.
///
/// A source with no recognized symbols is not an error at this level: it
/// yields an empty code table and an empty encoding (there is nothing to
/// compress, and nothing is lost).
///
/// # Errors
/// Propagates `CapacityExceeded` from the arena or heap; with a 26-letter
/// alphabet and 64-node bound this cannot trigger, but the bound is
/// checked, not assumed.
pub fn compress(text: &str) -> Result<(CodeTable, String)> {
    let freq = FrequencyTable::scan(text);
    let mut arena = NodeArena::new();
    let leaves = freq.make_leaves(&mut arena)?;

    let root = match build_tree(&mut arena, &leaves) {
        Ok(root) => root,
        Err(Error::Tree(TreeError::EmptySource)) => {
            return Ok((CodeTable::new(), String::new()));
        }
        Err(e) => return Err(e),
    };

    let table = generate_codes(&arena, root);
    let encoded = encode_message(text, &table);
    Ok((table, encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_case_folds_and_skips_non_letters() {
        let freq = FrequencyTable::scan("Hello, World! 123");

        assert_eq!(freq.count('l'), 3);
        assert_eq!(freq.count('o'), 2);
        assert_eq!(freq.count('h'), 1);
        assert_eq!(freq.count('w'), 1);
        assert_eq!(freq.count('!'), 0);
        assert_eq!(freq.total(), 10);
        assert_eq!(freq.distinct_symbols(), 7);
    }

    #[test]
    fn test_scan_empty_and_non_letter_sources() {
        assert_eq!(FrequencyTable::scan("").total(), 0);
        assert_eq!(FrequencyTable::scan("123 !@# \n\t").total(), 0);
    }

    #[test]
    fn test_make_leaves_alphabetical_order() {
        let freq = FrequencyTable::scan("cab");
        let mut arena = NodeArena::new();
        let leaves = freq.make_leaves(&mut arena).unwrap();

        let symbols: Vec<Option<char>> =
            leaves.iter().map(|&id| arena.symbol_of(id)).collect();
        assert_eq!(symbols, vec![Some('a'), Some('b'), Some('c')]);

        // Arena indices ascend alphabetically
        let indices: Vec<usize> = leaves.iter().map(|id| id.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_single_symbol_source() {
        let (table, encoded) = compress("aaaa").unwrap();

        assert_eq!(table.get('a'), Some("0"));
        assert_eq!(table.len(), 1);
        assert_eq!(encoded, "0000");
    }

    #[test]
    fn test_two_equal_symbols_deterministic_tiebreak() {
        let (table, encoded) = compress("ab").unwrap();

        // a has the lower arena index, so it is extracted first -> left -> "0"
        assert_eq!(table.get('a'), Some("0"));
        assert_eq!(table.get('b'), Some("1"));
        assert_eq!(encoded, "01");

        // Byte-identical across runs
        let (table2, encoded2) = compress("ab").unwrap();
        assert_eq!(table, table2);
        assert_eq!(encoded, encoded2);
    }

    #[test]
    fn test_empty_source_yields_empty_table_and_encoding() {
        for text in ["", "0123 456!", "\n\t  "] {
            let (table, encoded) = compress(text).unwrap();
            assert!(table.is_empty());
            assert!(encoded.is_empty());
        }
    }

    #[test]
    fn test_encode_skips_non_letters_and_folds_case() {
        let (table, _) = compress("ab").unwrap();

        let encoded = encode_message("A, b! a?B", &table);
        assert_eq!(encoded, "0101");
    }

    #[test]
    fn test_encoded_length_matches_code_lengths() {
        let text = "the quick brown fox jumps over the lazy dog";
        let (table, encoded) = compress(text).unwrap();

        let freq = FrequencyTable::scan(text);
        let expected_bits: u64 = table
            .iter()
            .map(|(s, code)| freq.count(s) * code.len() as u64)
            .sum();
        assert_eq!(encoded.len() as u64, expected_bits);
        assert!(encoded.chars().all(|b| b == '0' || b == '1'));
    }
}
