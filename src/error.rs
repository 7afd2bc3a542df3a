use crate::Evenness;

/// Result type for magic square operations.
pub type Result<T> = std::result::Result<T, MagicError>;

/// Input-validation failures.
///
/// All of these are detected before any cell is written. A matrix whose sums
/// do not match is not an error; it is reported through
/// [`VerificationReport`](crate::VerificationReport).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MagicError {
    /// No magic square exists for this order (`n < 1` or `n == 2`).
    #[error("no magic square of order {0} exists")]
    InvalidOrder(usize),

    /// A constructor was asked for an order outside its parity class.
    #[error("order {n} is {actual}, but this method builds {expected} squares")]
    ParityMismatch {
        n: usize,
        expected: Evenness,
        actual: Evenness,
    },

    /// A matrix handed to the verifier has a row whose length differs from
    /// the number of rows.
    #[error("matrix is not square: {rows} rows but a row of length {cols}")]
    NotSquare { rows: usize, cols: usize },
}
