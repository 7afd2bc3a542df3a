//! Construct and verify every order up to a bound.
//!
//! Usage: cargo run --release --example sweep -- [max_n]
//!
//! Reports construction time per parity class and stops at the first order
//! that fails, if any.

use magic_square::{Evenness, construct, verify};
use std::env;
use std::time::{Duration, Instant};

fn main() {
    let args: Vec<String> = env::args().collect();
    let max_n: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100);

    println!("=== Magic Square Sweep ===");
    println!("orders 1..={} (skipping 2)", max_n);
    println!();

    let mut totals = [
        (Evenness::Odd, 0usize, Duration::ZERO),
        (Evenness::SinglyEven, 0, Duration::ZERO),
        (Evenness::DoublyEven, 0, Duration::ZERO),
    ];

    for n in (1..=max_n).filter(|&n| n != 2) {
        let evenness = Evenness::classify(n).unwrap();
        let start = Instant::now();
        let sq = construct(n).unwrap();
        let elapsed = start.elapsed();

        let report = verify(&sq);
        if !report.is_magic || !sq.is_permutation() {
            println!("n={} FAILED", n);
            println!("{}", report);
            std::process::exit(1);
        }

        let entry = totals
            .iter_mut()
            .find(|(class, _, _)| *class == evenness)
            .unwrap();
        entry.1 += 1;
        entry.2 += elapsed;
    }

    for (class, count, time) in totals {
        if count == 0 {
            continue;
        }
        println!(
            "{:>12}: {:>4} orders, {:.3?} total, {:.3?} mean",
            class.to_string(),
            count,
            time,
            time / count as u32
        );
    }
    println!();
    println!("All orders verified.");
}
