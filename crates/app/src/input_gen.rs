//! Input text generation for testing.
//!
//! When no input file is specified (and no `input.txt` exists), we
//! generate a sample text with interesting coding characteristics: a
//! skewed letter distribution so the Huffman table has visibly uneven
//! code lengths.
//!
//! # Design
//!
//! Generated text has:
//! - A frequency bias toward common English letters (e, t, a, o, ...)
//! - Word-like runs separated by spaces and occasional punctuation
//! - Some uppercase letters and digits, to exercise case folding and
//!   non-letter filtering downstream
//!
//! All randomness comes from a seeded ChaCha8Rng, so the same seed always
//! produces the same text.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;

/// Letters ordered roughly by English frequency; earlier entries are
/// sampled more often.
const LETTERS_BY_FREQUENCY: &[u8] = b"etaoinshrdlcumwfgypbvkjxqz";

/// Generate sample text with a skewed letter distribution.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `size_bytes`: approximate size of generated text
///
/// # Returns
/// A string ready to be written to file or scanned directly.
pub fn generate_sample_text(seed: u64, size_bytes: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = String::with_capacity(size_bytes + 16);

    while text.len() < size_bytes {
        let word_len = rng.gen_range(2..=9);
        for _ in 0..word_len {
            let mut ch = pick_letter(&mut rng) as char;
            // ~5% uppercase, to exercise case folding
            if rng.gen_range(0..20) == 0 {
                ch = ch.to_ascii_uppercase();
            }
            text.push(ch);
        }

        // Word separator: mostly spaces, occasionally punctuation or digits
        match rng.gen_range(0..10) {
            0 => text.push_str(". "),
            1 => text.push_str(", "),
            2 => {
                let digit = rng.gen_range(0..10u8);
                text.push(' ');
                text.push((b'0' + digit) as char);
                text.push(' ');
            }
            _ => text.push(' '),
        }
    }

    text.truncate(size_bytes);
    text
}

/// Pick a letter with a bias toward the front of the frequency order.
fn pick_letter(rng: &mut ChaCha8Rng) -> u8 {
    // Squaring a uniform sample skews it toward 0, i.e. toward the
    // common letters
    let r: f64 = rng.gen();
    let idx = (r * r * LETTERS_BY_FREQUENCY.len() as f64) as usize;
    LETTERS_BY_FREQUENCY[idx.min(LETTERS_BY_FREQUENCY.len() - 1)]
}

/// Write generated text to a file.
pub fn write_sample_file(
    path: &std::path::Path,
    seed: u64,
    size_bytes: usize,
) -> std::io::Result<()> {
    let text = generate_sample_text(seed, size_bytes);
    let mut file = std::fs::File::create(path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}
