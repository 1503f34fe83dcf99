//! Immutable dense matrices of expressions.
//!
//! Used for column forms of vectors and for direction cosine matrices
//! between coordinate systems. Matrices here are tiny (at most 3×3), so
//! entries are stored row-major in one shared slice.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use crate::expr::Expr;

/// Dense immutable matrix stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Matrix {
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
    /// Matrix entries in row-major order.
    data: Arc<[Expr]>,
}

impl Matrix {
    /// Creates a matrix from its rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Expr>>) -> Self {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let data: Vec<Expr> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols, "ragged matrix rows");
        Self {
            num_rows,
            num_cols,
            data: Arc::from(data),
        }
    }

    /// Creates a single-column matrix.
    #[must_use]
    pub fn column(entries: Vec<Expr>) -> Self {
        Self {
            num_rows: entries.len(),
            num_cols: 1,
            data: Arc::from(entries),
        }
    }

    /// Creates the `n × n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let data: Vec<Expr> = (0..n * n)
            .map(|k| if k / n == k % n { Expr::one() } else { Expr::zero() })
            .collect();
        Self {
            num_rows: n,
            num_cols: n,
            data: Arc::from(data),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Expr> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Expr] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<Expr> {
        (0..self.num_rows).map(|row| self[(row, col)].clone()).collect()
    }

    /// Returns all entries in row-major order.
    #[must_use]
    pub fn values(&self) -> &[Expr] {
        &self.data
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let rows = (0..self.num_cols).map(|c| self.col(c)).collect();
        if self.num_rows == 0 {
            return self.clone();
        }
        Self::from_rows(rows)
    }

    /// Matrix product `self * rhs`, or `None` on a shape mismatch.
    #[must_use]
    pub fn mul(&self, rhs: &Matrix) -> Option<Matrix> {
        if self.num_cols != rhs.num_rows {
            return None;
        }
        let rows = (0..self.num_rows)
            .map(|r| {
                (0..rhs.num_cols)
                    .map(|c| {
                        Expr::add_all(
                            (0..self.num_cols).map(|k| &self[(r, k)] * &rhs[(k, c)]),
                        )
                    })
                    .collect()
            })
            .collect();
        Some(Self::from_rows(rows))
    }

    /// Applies `f` to every entry.
    #[must_use]
    pub fn map(&self, f: impl Fn(&Expr) -> Expr) -> Self {
        Self {
            num_rows: self.num_rows,
            num_cols: self.num_cols,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Expr;

    fn index(&self, (row, col): (usize, usize)) -> &Expr {
        &self.data[row * self.num_cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Matrix([")?;
        for r in 0..self.num_rows {
            if r > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (c, entry) in self.row(r).iter().enumerate() {
                if c > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{entry}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("])")
    }
}
