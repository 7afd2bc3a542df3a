//! Conway's LUX construction for singly even orders (`n = 4k + 2`).
//!
//! A `(2k+1) x (2k+1)` template of `L`, `U` and `X` tags is walked with the
//! Siamese rule. Each visited template cell receives the next four numbers,
//! laid out in the matching `2 x 2` block of the result in the pattern its
//! tag describes.
//!
//! Reference: <https://en.wikipedia.org/wiki/Conway%27s_LUX_method_for_magic_squares>

use std::fmt;

use crate::siamese::next_position;
use crate::{Evenness, PartialSquare, Result, Square};

/// Fill pattern of one `2 x 2` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lux {
    L,
    U,
    X,
}

impl Lux {
    /// Offsets `(dr, dc)` inside the block receiving the block's four
    /// values, in order.
    pub fn offsets(self) -> [(usize, usize); 4] {
        match self {
            Lux::L => [(0, 1), (1, 0), (1, 1), (0, 0)],
            Lux::U => [(0, 0), (1, 0), (1, 1), (0, 1)],
            Lux::X => [(0, 0), (1, 1), (1, 0), (0, 1)],
        }
    }

    fn letter(self) -> char {
        match self {
            Lux::L => 'L',
            Lux::U => 'U',
            Lux::X => 'X',
        }
    }
}

/// The `(2k+1) x (2k+1)` grid of block patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuxTemplate {
    size: usize,
    tags: Vec<Lux>,
}

impl LuxTemplate {
    /// Builds the template for half-width `k`.
    ///
    /// `k + 1` rows of `L`, one row of `U`, `k - 1` rows of `X`; then the
    /// `U` in the middle column trades places with the `L` above it.
    ///
    /// # Panics
    /// Panics if `k == 0`; the smallest singly even order, 6, has `k = 1`.
    pub fn new(k: usize) -> Self {
        assert!(k >= 1, "LUX template needs k >= 1");
        let size = 2 * k + 1;
        let mut tags: Vec<Lux> = (0..size)
            .flat_map(|i| {
                let tag = match i {
                    i if i <= k => Lux::L,
                    i if i == k + 1 => Lux::U,
                    _ => Lux::X,
                };
                std::iter::repeat_n(tag, size)
            })
            .collect();
        tags[k * size + k] = Lux::U;
        tags[(k + 1) * size + k] = Lux::L;
        Self { size, tags }
    }

    /// Side length `2k + 1`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tag at template position `(i, j)`.
    ///
    /// # Panics
    /// Panics if `i >= size` or `j >= size`.
    pub fn get(&self, i: usize, j: usize) -> Lux {
        assert!(i < self.size && j < self.size, "index out of bounds");
        self.tags[i * self.size + j]
    }
}

impl fmt::Display for LuxTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tags.chunks(self.size) {
            let line: String = row.iter().map(|t| t.letter()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Builds the magic square of singly even order `n`.
///
/// # Errors
/// - [`MagicError::InvalidOrder`](crate::MagicError::InvalidOrder) if `n == 2`
/// - [`MagicError::ParityMismatch`](crate::MagicError::ParityMismatch) if `n`
///   is odd or a multiple of 4
pub fn construct(n: usize) -> Result<Square> {
    construct_with(n, |_, _, _| {})
}

/// Like [`construct`], calling `on_cell_filled(square, row, col)` for each
/// of the four cells of a block once the whole block is placed.
pub fn construct_with<F>(n: usize, on_cell_filled: F) -> Result<Square>
where
    F: FnMut(&PartialSquare, usize, usize),
{
    Evenness::SinglyEven.require(n)?;
    Ok(build(n, on_cell_filled))
}

/// `n` must be a valid singly even order.
pub(crate) fn build<F>(n: usize, mut on_cell_filled: F) -> Square
where
    F: FnMut(&PartialSquare, usize, usize),
{
    tracing::debug!(n, method = "lux", "constructing magic square");
    let template = LuxTemplate::new(Evenness::SinglyEven.half_width(n));
    tracing::trace!(template = %template, "built LUX template");

    let size = template.size();
    let mut square = PartialSquare::empty(n);
    let (mut i, mut j) = (0, (size - 1) / 2);
    for first in (1..=(n * n) as i64).step_by(4) {
        let cells = place_block(&mut square, template.get(i, j), i, j, first);
        for (r, c) in cells {
            on_cell_filled(&square, r, c);
        }
        (i, j) = next_position(size, i, j, |bi, bj| square.is_filled(2 * bi, 2 * bj));
    }
    square.finish()
}

/// Writes `first..first + 4` into block `(bi, bj)` following `tag`.
/// Returns the cells written, in value order.
fn place_block(
    square: &mut PartialSquare,
    tag: Lux,
    bi: usize,
    bj: usize,
    first: i64,
) -> [(usize, usize); 4] {
    let cells = tag.offsets().map(|(dr, dc)| (2 * bi + dr, 2 * bj + dc));
    for (v, &(r, c)) in (first..).zip(&cells) {
        square.set(r, c, v);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MagicError, verify};

    #[test]
    fn template_for_k1() {
        let t = LuxTemplate::new(1);
        assert_eq!(t.size(), 3);
        assert_eq!(t.to_string(), "LLL\nLUL\nULU\n");
    }

    #[test]
    #[should_panic(expected = "k >= 1")]
    fn template_rejects_k0() {
        LuxTemplate::new(0);
    }

    #[test]
    fn template_for_k2() {
        let t = LuxTemplate::new(2);
        assert_eq!(t.to_string(), "LLLLL\nLLLLL\nLLULL\nUULUU\nXXXXX\n");
        assert_eq!(t.get(2, 2), Lux::U);
        assert_eq!(t.get(3, 2), Lux::L);
    }

    #[test]
    fn order_six_known_square() {
        let sq = construct(6).unwrap();
        assert_eq!(
            sq.to_rows(),
            vec![
                vec![32, 29, 4, 1, 24, 21],
                vec![30, 31, 2, 3, 22, 23],
                vec![12, 9, 17, 20, 28, 25],
                vec![10, 11, 18, 19, 26, 27],
                vec![13, 16, 36, 33, 5, 8],
                vec![14, 15, 34, 35, 6, 7],
            ]
        );
    }

    #[test]
    fn order_six_is_magic() {
        let sq = construct(6).unwrap();
        let report = verify(&sq);
        assert_eq!(report.required_sum, 111);
        assert!(report.is_magic);
    }

    #[test]
    fn singly_even_orders_are_magic_permutations() {
        for n in (6..=66).step_by(4) {
            let sq = construct(n).unwrap();
            assert!(sq.is_permutation(), "n={} should be a permutation", n);
            assert!(verify(&sq).is_magic, "n={} should be magic", n);
        }
    }

    #[test]
    fn hook_reports_whole_blocks() {
        let mut calls = Vec::new();
        construct_with(6, |p, r, c| {
            assert!(p.is_filled(r, c));
            calls.push((r, c, p.filled()));
        })
        .unwrap();
        assert_eq!(calls.len(), 36);
        // The first block is top-centre and is fully placed before any call.
        for &(r, c, filled) in &calls[..4] {
            assert!(r < 2 && (2..4).contains(&c));
            assert_eq!(filled, 4);
        }
    }

    #[test]
    fn walk_stays_in_bounds() {
        for n in (6..=202).step_by(4) {
            let sq = construct_with(n, |_, r, c| {
                assert!(r < n && c < n, "({},{}) out of range for n={}", r, c, n);
            })
            .unwrap();
            assert_eq!(sq.n(), n);
        }
    }

    #[test]
    fn rejects_other_orders() {
        assert_eq!(construct(2), Err(MagicError::InvalidOrder(2)));
        assert_eq!(
            construct(8),
            Err(MagicError::ParityMismatch {
                n: 8,
                expected: Evenness::SinglyEven,
                actual: Evenness::DoublyEven,
            })
        );
        assert!(matches!(
            construct(7),
            Err(MagicError::ParityMismatch { actual: Evenness::Odd, .. })
        ));
    }
}
