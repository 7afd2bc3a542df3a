//! Parity classification of a square's order.
//!
//! Each of the three classical construction methods only works for one
//! residue class of `n` modulo 4, so every construction starts here.

use std::fmt;

use crate::{MagicError, Result};

/// The parity class of an order `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evenness {
    /// `n` is odd. Built with the Siamese method.
    Odd,
    /// `n ≡ 2 (mod 4)`. Built with Conway's LUX method.
    SinglyEven,
    /// `n ≡ 0 (mod 4)`. Built with the forward/backward mask method.
    DoublyEven,
}

impl Evenness {
    /// Classifies `n`.
    ///
    /// # Errors
    /// Returns [`MagicError::InvalidOrder`] for `n == 0` and `n == 2`, the
    /// only orders without a magic square.
    ///
    /// ```
    /// use magic_square::{Evenness, MagicError};
    ///
    /// assert_eq!(Evenness::classify(5), Ok(Evenness::Odd));
    /// assert_eq!(Evenness::classify(6), Ok(Evenness::SinglyEven));
    /// assert_eq!(Evenness::classify(2), Err(MagicError::InvalidOrder(2)));
    /// ```
    pub fn classify(n: usize) -> Result<Self> {
        if n < 1 || n == 2 {
            return Err(MagicError::InvalidOrder(n));
        }
        Ok(if n % 4 == 0 {
            Evenness::DoublyEven
        } else if n % 2 == 0 {
            Evenness::SinglyEven
        } else {
            Evenness::Odd
        })
    }

    /// Half-width `k` of an order of this class.
    ///
    /// - doubly even: `n / 4`, the side of the corner blocks of the mask
    /// - singly even: `(n - 2) / 4`, so the LUX template has side `2k + 1`
    /// - odd: `(n - 1) / 2`, the centre column where the Siamese walk starts
    ///
    /// # Panics
    /// Panics if `n` is below the smallest order of this class (1, 6 or 4).
    pub fn half_width(self, n: usize) -> usize {
        assert!(
            n >= self.min_order(),
            "order {} is too small for a {} square",
            n,
            self
        );
        match self {
            Evenness::DoublyEven => n / 4,
            Evenness::SinglyEven => (n - 2) / 4,
            Evenness::Odd => (n - 1) / 2,
        }
    }

    /// Smallest order with a magic square in this class.
    fn min_order(self) -> usize {
        match self {
            Evenness::Odd => 1,
            Evenness::SinglyEven => 6,
            Evenness::DoublyEven => 4,
        }
    }

    /// Checks that `n` is a valid order belonging to `self`.
    pub(crate) fn require(self, n: usize) -> Result<()> {
        let actual = Evenness::classify(n)?;
        if actual != self {
            return Err(MagicError::ParityMismatch {
                n,
                expected: self,
                actual,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Evenness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Evenness::Odd => "odd",
            Evenness::SinglyEven => "singly even",
            Evenness::DoublyEven => "doubly even",
        })
    }
}

/// Classifies `n` and returns its half-width.
///
/// # Errors
/// Same as [`Evenness::classify`].
pub fn half_width(n: usize) -> Result<usize> {
    Ok(Evenness::classify(n)?.half_width(n))
}

/// The magic constant `n(n² + 1) / 2` every line of an order-`n` magic
/// square sums to.
///
/// `n(n² + 1)` is always even, so the division is exact.
pub fn required_sum(n: usize) -> i128 {
    let n = n as i128;
    n * (n * n + 1) / 2
}
