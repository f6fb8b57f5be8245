//! Run statistics for a compression pass.
//!
//! Observable insight into what the code did to the source: how many
//! letters were counted, how skewed the alphabet was, and how the encoded
//! bit length compares against a flat 8-bit baseline.
//!
//! Collected in a plain struct with explicit updates — this is a
//! single-shot batch workload, so there is no synchronization and no
//! background reporting; the harness asks for a summary at the end.

use crate::codes::CodeTable;
use crate::freq::FrequencyTable;

/// Statistics for one source-to-bitstring run.
#[derive(Debug, Clone, Default)]
pub struct EncodingStats {
    /// Characters scanned from the source (letters or not)
    pub chars_scanned: u64,

    /// Letters that survived case-folding and filtering
    pub letters_counted: u64,

    /// Distinct symbols present in the source
    pub distinct_symbols: usize,

    /// Bits the letters would occupy at 8 bits each
    pub baseline_bits: u64,

    /// Bits in the Huffman encoding
    pub encoded_bits: u64,
}

impl EncodingStats {
    /// Gather statistics from a finished run.
    pub fn collect(text: &str, freq: &FrequencyTable, table: &CodeTable, encoded: &str) -> Self {
        Self {
            chars_scanned: text.chars().count() as u64,
            letters_counted: freq.total(),
            distinct_symbols: freq.distinct_symbols(),
            baseline_bits: freq.total() * 8,
            encoded_bits: encoded.len() as u64,
        }
    }

    /// Average code length in bits per letter (0.0 for an empty source).
    pub fn avg_code_length(&self) -> f64 {
        if self.letters_counted == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / self.letters_counted as f64
        }
    }

    /// Encoded size as a fraction of the 8-bit baseline (0.0 when empty).
    pub fn compression_ratio(&self) -> f64 {
        if self.baseline_bits == 0 {
            0.0
        } else {
            self.encoded_bits as f64 / self.baseline_bits as f64
        }
    }

    /// Formatted multi-line summary for the harness to print.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Encoding Statistics ===\n");
        out.push_str(&format!("Characters scanned:  {}\n", self.chars_scanned));
        out.push_str(&format!("Letters counted:     {}\n", self.letters_counted));
        out.push_str(&format!("Distinct symbols:    {}\n", self.distinct_symbols));
        out.push_str(&format!("Baseline (8-bit):    {} bits\n", self.baseline_bits));
        out.push_str(&format!("Encoded:             {} bits\n", self.encoded_bits));
        out.push_str(&format!(
            "Avg code length:     {:.3} bits/letter\n",
            self.avg_code_length()
        ));
        out.push_str(&format!(
            "Compression ratio:   {:.1}%\n",
            self.compression_ratio() * 100.0
        ));
        out
    }
}
