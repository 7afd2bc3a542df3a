use crate::{MagicError, Result};

/// An `n x n` integer matrix, stored row-major.
///
/// Squares returned by the constructors are magic squares of order `n`: the
/// cells are a permutation of `1..=n²`. A square built with
/// [`Square::from_rows`] may hold any integers and is only meant for
/// verification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Square {
    n: usize,
    cells: Vec<i64>,
}

impl Square {
    /// Wraps a hand-built matrix.
    ///
    /// # Errors
    /// - [`MagicError::InvalidOrder`] if `rows` is empty
    /// - [`MagicError::NotSquare`] if any row's length differs from the
    ///   number of rows
    ///
    /// ```
    /// use magic_square::Square;
    ///
    /// let sq = Square::from_rows(&[[8, 1, 6], [3, 5, 7], [4, 9, 2]]).unwrap();
    /// assert_eq!(sq.get(1, 1), 5);
    /// assert!(Square::from_rows(&[vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(MagicError::InvalidOrder(0));
        }
        let mut cells = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(MagicError::NotSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { n, cells })
    }

    /// Builds a square from row-major cells. `cells.len()` must be `n * n`.
    pub(crate) fn from_cells(n: usize, cells: Vec<i64>) -> Self {
        debug_assert_eq!(cells.len(), n * n);
        Self { n, cells }
    }

    /// Returns the order of the square.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the value at position `(r, c)`.
    ///
    /// # Panics
    /// Panics if `r >= n` or `c >= n`.
    pub fn get(&self, r: usize, c: usize) -> i64 {
        assert!(r < self.n && c < self.n, "index out of bounds");
        self.cells[r * self.n + c]
    }

    /// Returns the cells as a flat slice in row-major order.
    ///
    /// The cell at position (r, c) is at index `r * n + c`.
    pub fn cells(&self) -> &[i64] {
        &self.cells
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        self.cells.chunks(self.n)
    }

    /// Copies the square into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.rows().map(<[i64]>::to_vec).collect()
    }

    /// Returns true if the cells are exactly `1..=n²`, each once.
    ///
    /// This is independent of the sum property checked by
    /// [`verify`](crate::verify).
    pub fn is_permutation(&self) -> bool {
        let total = self.cells.len();
        let mut seen = vec![false; total];
        for &v in &self.cells {
            if v < 1 || v as u64 > total as u64 {
                return false;
            }
            let idx = (v - 1) as usize;
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }
}

/// A square under construction.
///
/// Cells not yet placed are `None`. This is what placement hooks observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialSquare {
    n: usize,
    cells: Vec<Option<i64>>,
}

impl PartialSquare {
    pub(crate) fn empty(n: usize) -> Self {
        Self {
            n,
            cells: vec![None; n * n],
        }
    }

    /// Returns the order of the square.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the value at `(r, c)`, or `None` if it has not been placed.
    ///
    /// # Panics
    /// Panics if `r >= n` or `c >= n`.
    pub fn get(&self, r: usize, c: usize) -> Option<i64> {
        assert!(r < self.n && c < self.n, "index out of bounds");
        self.cells[r * self.n + c]
    }

    /// Returns true if `(r, c)` has been placed.
    #[inline]
    pub fn is_filled(&self, r: usize, c: usize) -> bool {
        self.cells[r * self.n + c].is_some()
    }

    /// Number of cells placed so far.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[inline]
    pub(crate) fn set(&mut self, r: usize, c: usize, v: i64) {
        debug_assert!(!self.is_filled(r, c), "cell ({r},{c}) placed twice");
        self.cells[r * self.n + c] = Some(v);
    }

    /// Converts a fully placed square.
    ///
    /// # Panics
    /// Panics if any cell is still empty; every constructor fills all
    /// `n²` cells before finishing.
    pub(crate) fn finish(self) -> Square {
        let cells = self
            .cells
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .expect("construction leaves no empty cell");
        Square::from_cells(self.n, cells)
    }
}
