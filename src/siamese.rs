//! Siamese (staircase) construction for odd orders.
//!
//! Start in the middle of the top row and walk diagonally up and to the
//! right, wrapping around the edges. When the next cell is already taken,
//! drop one row down instead.
//!
//! Reference: <https://en.wikipedia.org/wiki/Siamese_method>

use crate::{Evenness, PartialSquare, Result, Square};

/// Builds the magic square of odd order `n`.
///
/// # Errors
/// - [`MagicError::InvalidOrder`](crate::MagicError::InvalidOrder) if `n == 0`
/// - [`MagicError::ParityMismatch`](crate::MagicError::ParityMismatch) if `n` is even
///
/// ```
/// let sq = magic_square::siamese::construct(3).unwrap();
/// assert_eq!(sq.to_rows(), vec![vec![8, 1, 6], vec![3, 5, 7], vec![4, 9, 2]]);
/// ```
pub fn construct(n: usize) -> Result<Square> {
    construct_with(n, |_, _, _| {})
}

/// Like [`construct`], calling `on_cell_filled(square, row, col)` after each
/// value is placed.
pub fn construct_with<F>(n: usize, on_cell_filled: F) -> Result<Square>
where
    F: FnMut(&PartialSquare, usize, usize),
{
    Evenness::Odd.require(n)?;
    Ok(build(n, on_cell_filled))
}

/// `n` must be a valid odd order.
pub(crate) fn build<F>(n: usize, mut on_cell_filled: F) -> Square
where
    F: FnMut(&PartialSquare, usize, usize),
{
    tracing::debug!(n, method = "siamese", "constructing magic square");
    let mut square = PartialSquare::empty(n);
    let (mut i, mut j) = (0, Evenness::Odd.half_width(n));
    for v in 1..=(n * n) as i64 {
        square.set(i, j, v);
        on_cell_filled(&square, i, j);
        (i, j) = next_position(n, i, j, |r, c| square.is_filled(r, c));
    }
    square.finish()
}

/// One step of the staircase walk on an `n x n` grid.
///
/// Tries up-right first; if `is_filled` reports that cell taken, drops
/// straight down instead. Both moves wrap around.
pub(crate) fn next_position(
    n: usize,
    i: usize,
    j: usize,
    is_filled: impl Fn(usize, usize) -> bool,
) -> (usize, usize) {
    let up_right = ((i + n - 1) % n, (j + 1) % n);
    if is_filled(up_right.0, up_right.1) {
        ((i + 1) % n, j)
    } else {
        up_right
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MagicError, verify};

    #[test]
    fn order_three_is_lo_shu() {
        let sq = construct(3).unwrap();
        assert_eq!(
            sq.to_rows(),
            vec![vec![8, 1, 6], vec![3, 5, 7], vec![4, 9, 2]]
        );
    }

    #[test]
    fn order_five_known_square() {
        let sq = construct(5).unwrap();
        assert_eq!(
            sq.to_rows(),
            vec![
                vec![17, 24, 1, 8, 15],
                vec![23, 5, 7, 14, 16],
                vec![4, 6, 13, 20, 22],
                vec![10, 12, 19, 21, 3],
                vec![11, 18, 25, 2, 9],
            ]
        );
    }

    #[test]
    fn order_one_is_trivial() {
        let sq = construct(1).unwrap();
        assert_eq!(sq.cells(), &[1]);
    }

    #[test]
    fn odd_orders_are_magic_permutations() {
        for n in (1..=61).step_by(2) {
            let sq = construct(n).unwrap();
            assert!(sq.is_permutation(), "n={} should be a permutation", n);
            assert!(verify(&sq).is_magic, "n={} should be magic", n);
        }
    }

    #[test]
    fn walk_stays_in_bounds() {
        // The drop-down wraps too, so large orders never index past the edge.
        for n in (3..=199).step_by(2) {
            let mut placed = 0;
            let sq = construct_with(n, |p, r, c| {
                assert!(r < n && c < n, "({},{}) out of range for n={}", r, c, n);
                assert!(p.is_filled(r, c));
                placed += 1;
            })
            .unwrap();
            assert_eq!(placed, n * n);
            assert_eq!(sq.n(), n);
        }
    }

    #[test]
    fn hook_sees_values_in_order() {
        let mut seen = Vec::new();
        construct_with(3, |p, r, c| seen.push(p.get(r, c).unwrap())).unwrap();
        assert_eq!(seen, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn rejects_even_and_degenerate_orders() {
        assert_eq!(construct(0), Err(MagicError::InvalidOrder(0)));
        assert_eq!(construct(2), Err(MagicError::InvalidOrder(2)));
        assert_eq!(
            construct(6),
            Err(MagicError::ParityMismatch {
                n: 6,
                expected: Evenness::Odd,
                actual: Evenness::SinglyEven,
            })
        );
    }

    #[test]
    fn next_position_prefers_up_right() {
        assert_eq!(next_position(5, 2, 2, |_, _| false), (1, 3));
        assert_eq!(next_position(5, 0, 4, |_, _| false), (4, 0));
        assert_eq!(next_position(5, 2, 2, |_, _| true), (3, 2));
        assert_eq!(next_position(5, 4, 2, |_, _| true), (0, 2));
    }
}
