//! Prints a batch of cryptogram keys, one per line.
//! Run: cargo run --bin cryptogram_keys -- [COUNT] [--seed SEED]

use clap::Parser;
use daily_puzzles::cipher::{generate_keys, write_keys, DEFAULT_KEY_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

#[derive(Parser)]
#[command(author, version, about = "Print cryptogram keys with no letter in its own position", long_about = None)]
struct Args {
    /// Number of keys to print
    #[arg(default_value_t = DEFAULT_KEY_COUNT)]
    count: usize,
    /// Seed for a reproducible batch
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let keys = match args.seed {
        Some(seed) => generate_keys(args.count, &mut StdRng::seed_from_u64(seed)),
        None => generate_keys(args.count, &mut rand::rng()),
    };
    write_keys(&mut io::stdout().lock(), &keys)?;
    Ok(())
}
