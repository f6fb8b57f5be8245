//! huffcode: CLI harness around huffcode-core.
//!
//! Reads a text source (a given file, `input.txt`, or a generated
//! sample), builds the Huffman letter code, and prints the per-symbol
//! code table followed by the encoded bitstring. The core does no I/O;
//! everything file- and terminal-shaped lives here.

mod config;
mod input_gen;

use config::Config;
use huffcode_core::{compress, EncodingStats, FrequencyTable};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage.");
            return ExitCode::FAILURE;
        }
    };

    if config.print_config {
        config.print();
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load the source text, encode it, and print the report.
fn run(config: &Config) -> huffcode_core::Result<()> {
    let text = load_source(config)?;

    let (table, encoded) = compress(&text)?;

    println!("Character : Code");
    for (symbol, code) in table.iter() {
        println!("{symbol} : {code}");
    }

    println!();
    println!("Encoded message:");
    println!("{encoded}");

    if config.print_stats {
        let freq = FrequencyTable::scan(&text);
        let stats = EncodingStats::collect(&text, &freq, &table, &encoded);
        println!();
        print!("{}", stats.summary());
    }

    Ok(())
}

/// Resolve the source text: explicit file, then `input.txt`, then a
/// generated sample.
fn load_source(config: &Config) -> huffcode_core::Result<String> {
    if let Some(path) = &config.input_file {
        return Ok(std::fs::read_to_string(path)?);
    }

    let default_path = Path::new("input.txt");
    if default_path.exists() {
        return Ok(std::fs::read_to_string(default_path)?);
    }

    // Persist the sample so a re-run sees the same source
    println!(
        "No input file found; generating {} bytes of sample text (seed {}) into {}",
        config.sample_bytes,
        config.seed,
        default_path.display()
    );
    input_gen::write_sample_file(default_path, config.seed, config.sample_bytes)?;
    Ok(std::fs::read_to_string(default_path)?)
}
