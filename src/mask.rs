//! Mask construction for doubly even orders (`n ≡ 0 mod 4`).
//!
//! Count `1..=n²` forwards and backwards over the grid. Cells inside the
//! four `k x k` corner blocks and the central `2k x 2k` block take the
//! forward count, all others the backward count, where `k = n / 4`.

use crate::{Evenness, PartialSquare, Result, Square};

/// Builds the magic square of doubly even order `n`.
///
/// # Errors
/// - [`MagicError::InvalidOrder`](crate::MagicError::InvalidOrder) if `n == 0`
/// - [`MagicError::ParityMismatch`](crate::MagicError::ParityMismatch) if `n`
///   is not a multiple of 4
pub fn construct(n: usize) -> Result<Square> {
    construct_with(n, |_, _, _| {})
}

/// Like [`construct`], calling `on_cell_filled(square, row, col)` after each
/// cell is placed, in row-major order.
pub fn construct_with<F>(n: usize, on_cell_filled: F) -> Result<Square>
where
    F: FnMut(&PartialSquare, usize, usize),
{
    Evenness::DoublyEven.require(n)?;
    Ok(build(n, on_cell_filled))
}

/// `n` must be a valid doubly even order.
pub(crate) fn build<F>(n: usize, mut on_cell_filled: F) -> Square
where
    F: FnMut(&PartialSquare, usize, usize),
{
    tracing::debug!(n, method = "mask", "constructing magic square");
    let k = Evenness::DoublyEven.half_width(n);
    let last = (n * n) as i64;
    let mut square = PartialSquare::empty(n);
    for i in 0..n {
        for j in 0..n {
            let forward = (i * n + j) as i64 + 1;
            let v = if in_mask(k, n, i, j) {
                forward
            } else {
                last + 1 - forward
            };
            square.set(i, j, v);
            on_cell_filled(&square, i, j);
        }
    }
    square.finish()
}

/// The forward/backward selection mask for order `n`, row-major.
///
/// # Errors
/// Same as [`construct`].
pub fn mask(n: usize) -> Result<Vec<bool>> {
    Evenness::DoublyEven.require(n)?;
    let k = Evenness::DoublyEven.half_width(n);
    Ok((0..n)
        .flat_map(|i| (0..n).map(move |j| in_mask(k, n, i, j)))
        .collect())
}

#[inline]
fn in_mask(k: usize, n: usize, i: usize, j: usize) -> bool {
    let outer = |x: usize| x < k || x >= n - k;
    let inner = |x: usize| (k..3 * k).contains(&x);
    (outer(i) && outer(j)) || (inner(i) && inner(j))
}
