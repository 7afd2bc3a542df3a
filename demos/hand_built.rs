//! Verify hand-built matrices against the magic square rules.
//!
//! Usage: cargo run --example hand_built

use magic_square::{MagicSquare, Square};

fn main() {
    println!("Testing a hand-crafted 3x3 magic square");
    let lo_shu = Square::from_rows(&[[8, 1, 6], [3, 5, 7], [4, 9, 2]]).unwrap();
    check(&lo_shu);

    // Not magic, and not a permutation of 1..=16 either.
    println!("Testing a hand-crafted 4x4 NON-magic square");
    let broken = Square::from_rows(&[
        [8, 1, 6, 10],
        [7, 4, 12, 11],
        [4, 9, 2, 12],
        [15, 14, 15, 16],
    ])
    .unwrap();
    check(&broken);

    println!("Testing a ragged matrix");
    match Square::from_rows(&[vec![1, 2, 3], vec![4, 5]]) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("rejected: {}", e),
    }
}

fn check(sq: &Square) {
    for row in sq.rows() {
        println!("  {:?}", row);
    }
    let mut ms = MagicSquare::new(sq.n()).unwrap();
    println!("{}", ms.verify(Some(sq)));
    println!("uses each of 1..={} once: {}", sq.n() * sq.n(), sq.is_permutation());
    println!();
}
