use crate::{
    Evenness, PartialSquare, Result, Square, VerificationReport, lux, mask, required_sum,
    siamese, verify,
};

/// Builds the magic square of order `n` with the method its parity calls for.
///
/// # Errors
/// Returns [`MagicError::InvalidOrder`](crate::MagicError::InvalidOrder) for
/// `n == 0` and `n == 2`.
///
/// ```
/// let sq = magic_square::construct(6).unwrap();
/// assert!(magic_square::verify(&sq).is_magic);
/// ```
pub fn construct(n: usize) -> Result<Square> {
    construct_with(n, |_, _, _| {})
}

/// Like [`construct`], calling `on_cell_filled(square, row, col)` as cells
/// are placed.
pub fn construct_with<F>(n: usize, on_cell_filled: F) -> Result<Square>
where
    F: FnMut(&PartialSquare, usize, usize),
{
    let evenness = Evenness::classify(n)?;
    Ok(build(evenness, n, on_cell_filled))
}

/// `n` must be a valid order of class `evenness`.
fn build<F>(evenness: Evenness, n: usize, on_cell_filled: F) -> Square
where
    F: FnMut(&PartialSquare, usize, usize),
{
    match evenness {
        Evenness::Odd => siamese::build(n, on_cell_filled),
        Evenness::SinglyEven => lux::build(n, on_cell_filled),
        Evenness::DoublyEven => mask::build(n, on_cell_filled),
    }
}

/// A magic square of a fixed order, built on first use.
///
/// The square is constructed at most once; later calls return the cached
/// one.
///
/// # Example
///
/// ```
/// use magic_square::{Evenness, MagicSquare};
///
/// let mut ms = MagicSquare::new(4).unwrap();
/// assert_eq!(ms.evenness(), Evenness::DoublyEven);
/// assert_eq!(ms.required_sum(), 34);
///
/// let first = ms.construct().clone();
/// assert_eq!(&first, ms.construct());
/// assert!(ms.verify(None).is_magic);
/// ```
#[derive(Debug, Clone)]
pub struct MagicSquare {
    n: usize,
    evenness: Evenness,
    square: Option<Square>,
}

impl MagicSquare {
    /// Prepares a magic square of order `n` without building it.
    ///
    /// # Errors
    /// Same as [`Evenness::classify`].
    pub fn new(n: usize) -> Result<Self> {
        Ok(Self {
            n,
            evenness: Evenness::classify(n)?,
            square: None,
        })
    }

    /// Returns the order.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the parity class, which fixes the construction method.
    pub fn evenness(&self) -> Evenness {
        self.evenness
    }

    /// The magic constant for this order.
    pub fn required_sum(&self) -> i128 {
        required_sum(self.n)
    }

    /// The cached square, if it has been built.
    pub fn square(&self) -> Option<&Square> {
        self.square.as_ref()
    }

    /// Returns the square, building it on the first call.
    pub fn construct(&mut self) -> &Square {
        self.construct_with(|_, _, _| {})
    }

    /// Like [`construct`](Self::construct). `on_cell_filled` only runs if
    /// the square has not been built yet.
    pub fn construct_with<F>(&mut self, on_cell_filled: F) -> &Square
    where
        F: FnMut(&PartialSquare, usize, usize),
    {
        if self.square.is_some() {
            tracing::trace!(n = self.n, "magic square already constructed");
        }
        let (evenness, n) = (self.evenness, self.n);
        self.square
            .get_or_insert_with(|| build(evenness, n, on_cell_filled))
    }

    /// Verifies `matrix`, or this instance's square when `None`.
    ///
    /// `None` constructs the square first if it has not been built yet, which
    /// is why this takes `&mut self`. The required sum follows the order of
    /// the matrix being checked. A supplied matrix never replaces or fills
    /// the cached square.
    pub fn verify(&mut self, matrix: Option<&Square>) -> VerificationReport {
        match matrix {
            Some(m) => verify(m),
            None => verify(self.construct()),
        }
    }
}
