use std::fmt;

use crate::{Result, Square, required_sum};

/// Outcome of checking a square's line sums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    /// True iff every row, column and both diagonals sum to `required_sum`.
    pub is_magic: bool,
    /// `n(n² + 1) / 2` for the square's order.
    pub required_sum: i128,
    /// Indices of rows whose sum differs from `required_sum`, ascending.
    pub failing_rows: Vec<usize>,
    /// Indices of columns whose sum differs from `required_sum`, ascending.
    pub failing_cols: Vec<usize>,
    /// Sum of the cells `(i, i)`.
    pub diag1_sum: i128,
    /// Sum of the cells `(i, n - 1 - i)`.
    pub diag2_sum: i128,
}

/// Checks the row, column and diagonal sums of `square`.
///
/// Any integers are accepted; distinctness is [`Square::is_permutation`]'s
/// concern.
///
/// ```
/// use magic_square::{Square, verify};
///
/// let sq = Square::from_rows(&[[2, 7, 6], [9, 5, 1], [4, 3, 8]]).unwrap();
/// assert!(verify(&sq).is_magic);
/// ```
pub fn verify(square: &Square) -> VerificationReport {
    let n = square.n();
    let target = required_sum(n);

    let mut col_sums = vec![0i128; n];
    let mut failing_rows = Vec::new();
    for (i, row) in square.rows().enumerate() {
        let mut row_sum = 0i128;
        for (c, &v) in row.iter().enumerate() {
            row_sum += v as i128;
            col_sums[c] += v as i128;
        }
        if row_sum != target {
            failing_rows.push(i);
        }
    }
    let failing_cols: Vec<usize> = col_sums
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s != target)
        .map(|(c, _)| c)
        .collect();

    let diag1_sum: i128 = (0..n).map(|i| square.get(i, i) as i128).sum();
    let diag2_sum: i128 = (0..n).map(|i| square.get(i, n - 1 - i) as i128).sum();

    let is_magic = failing_rows.is_empty()
        && failing_cols.is_empty()
        && diag1_sum == target
        && diag2_sum == target;

    if !is_magic {
        tracing::debug!(
            n,
            required_sum = %target,
            ?failing_rows,
            ?failing_cols,
            %diag1_sum,
            %diag2_sum,
            "square is not magic"
        );
    }

    VerificationReport {
        is_magic,
        required_sum: target,
        failing_rows,
        failing_cols,
        diag1_sum,
        diag2_sum,
    }
}

/// Checks a hand-built matrix given as rows.
///
/// # Errors
/// See [`Square::from_rows`].
pub fn verify_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<VerificationReport> {
    Ok(verify(&Square::from_rows(rows)?))
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = self.required_sum;
        if self.is_magic {
            return write!(
                f,
                "all rows, columns and diagonals add up to {}; square is magic",
                target
            );
        }
        writeln!(f, "square is not magic (required sum {})", target)?;
        if !self.failing_rows.is_empty() {
            writeln!(f, "  rows not adding up: {:?}", self.failing_rows)?;
        }
        if !self.failing_cols.is_empty() {
            writeln!(f, "  columns not adding up: {:?}", self.failing_cols)?;
        }
        if self.diag1_sum != target {
            writeln!(f, "  main diagonal adds up to {}", self.diag1_sum)?;
        }
        if self.diag2_sum != target {
            writeln!(f, "  other diagonal adds up to {}", self.diag2_sum)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MagicError;

    #[test]
    fn lo_shu_passes() {
        let report = verify_rows(&[[8, 1, 6], [3, 5, 7], [4, 9, 2]]).unwrap();
        assert_eq!(
            report,
            VerificationReport {
                is_magic: true,
                required_sum: 15,
                failing_rows: vec![],
                failing_cols: vec![],
                diag1_sum: 15,
                diag2_sum: 15,
            }
        );
    }

    #[test]
    fn broken_four_by_four_is_reported() {
        let report = verify_rows(&[
            [8, 1, 6, 10],
            [7, 4, 12, 11],
            [4, 9, 2, 12],
            [15, 14, 15, 16],
        ])
        .unwrap();
        assert!(!report.is_magic);
        assert_eq!(report.required_sum, 34);
        // Row 1 and column 0 happen to add up to 34.
        assert_eq!(report.failing_rows, vec![0, 2, 3]);
        assert_eq!(report.failing_cols, vec![1, 2, 3]);
        assert_eq!(report.diag1_sum, 8 + 4 + 2 + 16);
        assert_eq!(report.diag2_sum, 10 + 12 + 9 + 15);
    }

    #[test]
    fn single_bad_line() {
        // Centre and bottom-middle swapped: columns still balance.
        let report = verify_rows(&[[8, 1, 6], [3, 9, 7], [4, 5, 2]]).unwrap();
        assert!(!report.is_magic);
        assert_eq!(report.failing_rows, vec![1, 2]);
        assert!(report.failing_cols.is_empty());
        assert_eq!(report.diag1_sum, 19);
        assert_eq!(report.diag2_sum, 19);
    }

    #[test]
    fn semi_magic_fails_on_diagonal() {
        // Every row and column is a rotation of 4, 5, 6; the anti-diagonal is all sixes.
        let report = verify_rows(&[[4, 5, 6], [5, 6, 4], [6, 4, 5]]).unwrap();
        assert!(report.failing_rows.is_empty());
        assert!(report.failing_cols.is_empty());
        assert_eq!(report.diag1_sum, 15);
        assert_eq!(report.diag2_sum, 18);
        assert!(!report.is_magic);
    }

    #[test]
    fn sums_only_not_distinctness() {
        // All fives: every line of a 3x3 sums to 15.
        let sq = Square::from_rows(&[[5, 5, 5], [5, 5, 5], [5, 5, 5]]).unwrap();
        assert!(verify(&sq).is_magic);
        assert!(!sq.is_permutation());
    }

    #[test]
    fn negative_and_large_values_are_tolerated() {
        let report = verify_rows(&[[i64::MAX, i64::MAX], [i64::MIN, -1]]).unwrap();
        assert!(!report.is_magic);
        assert_eq!(report.diag1_sum, i64::MAX as i128 - 1);
    }

    #[test]
    fn non_square_input_is_an_error() {
        assert_eq!(
            verify_rows(&[vec![1, 2, 3], vec![4, 5, 6]]),
            Err(MagicError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn display_names_failing_lines() {
        let report = verify_rows(&[[8, 1, 6], [3, 9, 7], [4, 5, 2]]).unwrap();
        let text = report.to_string();
        assert!(text.contains("required sum 15"));
        assert!(text.contains("rows not adding up: [1, 2]"));
        assert!(!text.contains("columns"));
        assert!(text.contains("main diagonal adds up to 19"));

        let ok = verify_rows(&[[8, 1, 6], [3, 5, 7], [4, 9, 2]]).unwrap();
        assert!(ok.to_string().ends_with("square is magic"));
    }
}
