//! Rotations and reflections of a square.
//!
//! The eight symmetries of the square map a magic square to another magic
//! square of the same order; two magic squares related this way are usually
//! counted as the same.

use rand::Rng;

use crate::{Result, Square, construct};

/// An element of the dihedral group of the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    Identity,
    /// Quarter turn clockwise.
    Rotate90,
    Rotate180,
    /// Quarter turn counter-clockwise.
    Rotate270,
    /// Mirror left to right.
    FlipHorizontal,
    /// Mirror top to bottom.
    FlipVertical,
    /// Mirror about the main diagonal.
    Transpose,
    /// Mirror about the anti-diagonal.
    AntiTranspose,
}

impl Symmetry {
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rotate90,
        Symmetry::Rotate180,
        Symmetry::Rotate270,
        Symmetry::FlipHorizontal,
        Symmetry::FlipVertical,
        Symmetry::Transpose,
        Symmetry::AntiTranspose,
    ];

    /// Picks one of the eight symmetries uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Position in the source square that lands on `(r, c)`.
    #[inline]
    fn source(self, n: usize, r: usize, c: usize) -> (usize, usize) {
        let last = n - 1;
        match self {
            Symmetry::Identity => (r, c),
            Symmetry::Rotate90 => (last - c, r),
            Symmetry::Rotate180 => (last - r, last - c),
            Symmetry::Rotate270 => (c, last - r),
            Symmetry::FlipHorizontal => (r, last - c),
            Symmetry::FlipVertical => (last - r, c),
            Symmetry::Transpose => (c, r),
            Symmetry::AntiTranspose => (last - c, last - r),
        }
    }

    /// Returns `square` transformed by this symmetry.
    pub fn apply(self, square: &Square) -> Square {
        let n = square.n();
        let cells = (0..n)
            .flat_map(|r| (0..n).map(move |c| (r, c)))
            .map(|(r, c)| {
                let (sr, sc) = self.source(n, r, c);
                square.get(sr, sc)
            })
            .collect();
        Square::from_cells(n, cells)
    }
}

impl Square {
    /// Returns true if `other` is a rotation or reflection of `self`.
    pub fn is_equivalent(&self, other: &Square) -> bool {
        self.n() == other.n() && Symmetry::ALL.iter().any(|s| s.apply(self) == *other)
    }
}

/// Returns a randomly rotated or reflected magic square of order `n`.
///
/// The output is deterministic given the same seed.
///
/// # Errors
/// Same as [`construct`].
///
/// ```
/// use magic_square::{random_variant, verify};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let sq = random_variant(5, &mut rng).unwrap();
/// assert!(verify(&sq).is_magic);
/// ```
pub fn random_variant<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Square> {
    let square = construct(n)?;
    let symmetry = Symmetry::random(rng);
    tracing::debug!(n, ?symmetry, "transforming magic square");
    Ok(symmetry.apply(&square))
}
