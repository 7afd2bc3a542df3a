//! Construct a magic square of the given order and verify it.
//!
//! Usage: cargo run --release --example generate -- <n> [seed]
//!
//! With a seed, a random rotation or reflection of the square is printed.
//!
//! Example:
//!   cargo run --release --example generate -- 6

use magic_square::{MagicSquare, Square, random_variant};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    let n: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        eprintln!("Usage: {} <n> [seed]", args[0]);
        std::process::exit(1);
    });
    let seed: Option<u64> = args.get(2).and_then(|s| s.parse().ok());

    let mut ms = match MagicSquare::new(n) {
        Ok(ms) => ms,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!(
        "For a {} x {} magic square ({}), the required sum is: {}",
        n,
        n,
        ms.evenness(),
        ms.required_sum()
    );
    println!();

    let sq = match seed {
        Some(seed) => {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            random_variant(n, &mut rng).unwrap()
        }
        None => ms.construct().clone(),
    };
    print_square(&sq);
    println!();
    println!("{}", ms.verify(Some(&sq)));
}

fn print_square(sq: &Square) {
    let width = (sq.n() * sq.n()).to_string().len();
    for row in sq.rows() {
        for v in row {
            print!("{:>width$} ", v, width = width);
        }
        println!();
    }
}
