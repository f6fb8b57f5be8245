//! Integration tests for the full huffcode pipeline.
//!
//! These tests verify end-to-end behavior: source text -> frequency scan ->
//! leaf creation -> tree construction -> code generation -> encoding, with
//! verification of the ordering, capacity, and determinism contracts.

use huffcode_core::{
    build_tree, compress, encode_message, generate_codes, FrequencyTable, MinHeap, NodeArena,
    MAX_NODES, MAX_PENDING,
};

/// A simple pipeline run: every stage wired by hand, output cross-checked.
#[test]
fn test_full_pipeline_by_stages() {
    let text = "this is an example of a huffman tree";

    // Step 1: count frequencies
    let freq = FrequencyTable::scan(text);
    assert!(freq.total() > 0);

    // Step 2: allocate leaves
    let mut arena = NodeArena::new();
    let leaves = freq.make_leaves(&mut arena).expect("leaf creation failed");
    assert_eq!(leaves.len(), freq.distinct_symbols());

    // Step 3: build the tree
    let root = build_tree(&mut arena, &leaves).expect("tree construction failed");
    assert_eq!(arena.weight_of(root), freq.total());

    // Step 4: generate codes
    let table = generate_codes(&arena, root);
    assert_eq!(table.len(), freq.distinct_symbols());

    // Step 5: encode and compare against the one-call pipeline
    let encoded = encode_message(text, &table);
    let (table2, encoded2) = compress(text).expect("pipeline failed");
    assert_eq!(table, table2);
    assert_eq!(encoded, encoded2);
}

/// Codes must form a prefix-free set: no code is a prefix of another.
#[test]
fn test_codes_are_prefix_free() {
    let text = "sphinx of black quartz judge my vow";
    let (table, _) = compress(text).expect("pipeline failed");

    let codes: Vec<(char, &str)> = table.iter().collect();
    for (i, (_, a)) in codes.iter().enumerate() {
        for (j, (_, b)) in codes.iter().enumerate() {
            if i != j {
                assert!(!b.starts_with(a), "code {a:?} prefixes {b:?}");
            }
        }
    }
}

/// Huffman optimality on the textbook weight set: the total weighted code
/// length must be minimal (224 for these weights), with the heaviest
/// symbol shortest and the lightest among the longest.
#[test]
fn test_textbook_weights_optimality() {
    // a:5 b:9 c:12 d:13 e:16 f:45, spelled out as a literal source
    let weights: [(char, usize); 6] =
        [('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45)];
    let text: String = weights
        .iter()
        .flat_map(|&(c, n)| std::iter::repeat(c).take(n))
        .collect();

    let (table, encoded) = compress(&text).expect("pipeline failed");
    let freq = FrequencyTable::scan(&text);

    let total_bits: u64 = table
        .iter()
        .map(|(s, code)| freq.count(s) * code.len() as u64)
        .sum();
    assert_eq!(total_bits, 224);
    assert_eq!(encoded.len() as u64, total_bits);

    let len = |c| table.get(c).unwrap().len();
    assert_eq!(len('f'), 1);
    assert!(len('a') >= len('c'));
    assert!(len('b') >= len('e'));
    assert!(len('a') >= len('f'));
}

/// Single-symbol source: fallback code "0", encoding repeats it.
#[test]
fn test_single_symbol_source() {
    let (table, encoded) = compress("aaaa").expect("pipeline failed");

    assert_eq!(table.len(), 1);
    assert_eq!(table.get('a'), Some("0"));
    assert_eq!(encoded, "0000");
}

/// Equal-frequency pair: the (weight, index) tie-break decides, and the
/// result is byte-identical across runs.
#[test]
fn test_tiebreak_determinism() {
    let runs: Vec<(String, String)> = (0..5)
        .map(|_| {
            let (table, encoded) = compress("ab").expect("pipeline failed");
            let rendered: String = table
                .iter()
                .map(|(s, c)| format!("{s}:{c};"))
                .collect();
            (rendered, encoded)
        })
        .collect();

    for run in &runs {
        assert_eq!(run, &runs[0]);
        assert_eq!(run.0, "a:0;b:1;");
        assert_eq!(run.1, "01");
    }
}

/// Empty and letter-free sources produce empty output without erroring.
#[test]
fn test_degenerate_sources() {
    for text in ["", "   \n\t", "0123456789 !@#$%"] {
        let (table, encoded) = compress(text).expect("pipeline failed");
        assert!(table.is_empty(), "table not empty for {text:?}");
        assert!(encoded.is_empty(), "encoding not empty for {text:?}");
    }
}

/// The full 26-letter alphabet fits the fixed bounds with room to spare:
/// 26 leaves + 25 internal nodes = 51 of 64.
#[test]
fn test_full_alphabet_fits_capacity() {
    let text: String = ('a'..='z')
        .enumerate()
        .flat_map(|(i, c)| std::iter::repeat(c).take(i + 1))
        .collect();

    let freq = FrequencyTable::scan(&text);
    let mut arena = NodeArena::new();
    let leaves = freq.make_leaves(&mut arena).expect("leaf creation failed");
    assert_eq!(leaves.len(), 26);

    let root = build_tree(&mut arena, &leaves).expect("tree construction failed");
    assert_eq!(arena.len(), 51);
    assert!(arena.len() <= MAX_NODES);

    let table = generate_codes(&arena, root);
    assert_eq!(table.len(), 26);
}

/// Capacity contract at the seam: the heap and arena both reject the
/// 65th entry and stay usable.
#[test]
fn test_capacity_bounds_are_enforced() {
    let mut arena = NodeArena::new();
    let mut heap = MinHeap::new();

    for i in 0..MAX_PENDING as u64 {
        let id = arena.alloc_leaf('x', i + 1).expect("alloc failed");
        heap.insert(id, i + 1).expect("insert failed");
    }

    assert!(arena.alloc_leaf('y', 1).is_err());
    let spare = NodeArena::new().alloc_leaf('y', 1).expect("alloc failed");
    assert!(heap.insert(spare, 1).is_err());

    // Both structures unchanged and still ordered
    assert_eq!(arena.len(), MAX_NODES);
    assert_eq!(heap.len(), MAX_PENDING);
    assert_eq!(heap.extract_min().map(|id| id.index()).ok(), Some(0));
}

/// Re-encoding a fresh scan of the same text reproduces the same bits.
#[test]
fn test_reproducible_across_scans() {
    let text = "it was the best of times, it was the worst of times";

    let (table1, encoded1) = compress(text).expect("pipeline failed");
    let (table2, encoded2) = compress(text).expect("pipeline failed");

    assert_eq!(table1, table2);
    assert_eq!(encoded1, encoded2);

    // And encoding through the other run's table is identical too
    assert_eq!(encode_message(text, &table2), encoded1);
}
