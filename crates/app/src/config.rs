//! Configuration for the huffcode application.
//!
//! Handles parsing command-line arguments and generating sensible defaults
//! (including randomized defaults that are reproducible with a seed).
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments: it reads `input.txt` when
//! present, and otherwise generates a sample source deterministically
//! from the seed. All defaults are printed on request so runs are
//! reproducible.

use std::path::PathBuf;

/// Complete configuration for one encoding run.
#[derive(Debug, Clone)]
pub struct Config {
    // === Files ===
    /// Input file path (None = use input.txt, or generate a sample)
    pub input_file: Option<PathBuf>,

    // === Sample generation ===
    /// Seed for sample-text generation
    pub seed: u64,

    /// Approximate size of the generated sample in bytes
    pub sample_bytes: usize,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the statistics summary
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// If no `--seed` is provided, a time-based seed is used (printed via
    /// `--print-config` so the run can be repeated).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_config = false;
        let mut print_stats = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        // Determine seed (explicit or time-based)
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        Ok(Config {
            input_file,
            seed,
            sample_bytes: sample_bytes.unwrap_or(2048),
            print_config,
            print_stats,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!(
            "Input file:   {}",
            self.input_file
                .as_ref()
                .and_then(|p| p.to_str())
                .unwrap_or("(input.txt, or generated sample)")
        );
        println!("Seed:         {}", self.seed);
        println!("Sample bytes: {}", self.sample_bytes);
        println!();
    }
}

fn print_help() {
    println!("huffcode: Huffman letter coding for a text source");
    println!();
    println!("Builds a prefix-free code over the lowercase letters of the input,");
    println!("prints the per-symbol code table and the encoded bitstring.");
    println!();
    println!("USAGE:");
    println!("  huffcode [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  --in <path>           Input text file (default: input.txt if present)");
    println!("  --seed <n>            Seed for sample generation (default: time-based)");
    println!("  --sample-bytes <n>    Size of generated sample (default: 2048)");
    println!("  --print-config        Print the resolved configuration");
    println!("  --no-stats            Skip the statistics summary");
    println!("  --help, -h            Show this help");
}
