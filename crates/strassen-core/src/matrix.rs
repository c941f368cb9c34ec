//! Dense square matrix stored as one contiguous row-major buffer.

use std::ops::{Index, IndexMut};

use crate::error::MatrixError;
use crate::ledger;

/// An `n x n` matrix of `f64`, with `value(i, j) = data[i * n + j]`.
///
/// A matrix is exclusively owned; dropping it releases the buffer and
/// records the release in the thread's [`ledger`].
#[derive(Debug, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

/// Obtain a zero-filled buffer for an `n x n` matrix.
fn alloc_buffer(n: usize) -> Result<Vec<f64>, MatrixError> {
    if n == 0 {
        return Err(MatrixError::InvalidDimension(n));
    }
    let elements = n
        .checked_mul(n)
        .ok_or(MatrixError::AllocationFailure { elements: usize::MAX })?;
    let mut data = Vec::new();
    data.try_reserve_exact(elements)
        .map_err(|_| MatrixError::AllocationFailure { elements })?;
    data.resize(elements, 0.0);
    Ok(data)
}

impl Matrix {
    fn from_buffer(n: usize, data: Vec<f64>) -> Self {
        ledger::record_alloc(data.len());
        Self { n, data }
    }

    /// Create an `n x n` matrix of zeros.
    pub fn zeros(n: usize) -> Result<Self, MatrixError> {
        Ok(Self::from_buffer(n, alloc_buffer(n)?))
    }

    /// Create the `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// Wrap a row-major buffer of length `n * n`.
    pub fn from_vec(n: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if n == 0 {
            return Err(MatrixError::InvalidDimension(n));
        }
        let expected = n
            .checked_mul(n)
            .ok_or(MatrixError::AllocationFailure { elements: usize::MAX })?;
        if data.len() != expected {
            return Err(MatrixError::InvalidData {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::from_buffer(n, data))
    }

    /// Build a matrix from a slice of equally long rows.
    ///
    /// # Example
    /// ```
    /// use strassen_core::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.get(1, 0), 3.0);
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let n = rows.len();
        let mut m = Self::zeros(n)?;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(MatrixError::InvalidData {
                    expected: n,
                    actual: row.len(),
                });
            }
            m.data[i * n..(i + 1) * n].copy_from_slice(row);
        }
        Ok(m)
    }

    /// Dimension `n` of this `n x n` matrix.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Value at row `i`, column `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Overwrite the value at row `i`, column `j`.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.n + j] = value;
    }

    /// Row-major view of the buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n)
    }

    /// Copy this matrix through the fallible allocation path.
    pub fn try_clone(&self) -> Result<Self, MatrixError> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())
            .map_err(|_| MatrixError::AllocationFailure {
                elements: self.data.len(),
            })?;
        data.extend_from_slice(&self.data);
        Ok(Self::from_buffer(self.n, data))
    }

    /// Consume the matrix and return its row-major buffer.
    #[must_use]
    pub fn into_vec(mut self) -> Vec<f64> {
        let data = std::mem::take(&mut self.data);
        ledger::record_release(data.len());
        data
    }

    /// Compare two matrices cell by cell with a relative tolerance.
    ///
    /// Cells `x` and `y` match when `|x - y| <= tol * max(1, |x|, |y|)`.
    /// Matrices of different dimension never match.
    #[must_use]
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.n == other.n
            && self.data.iter().zip(&other.data).all(|(&x, &y)| {
                let scale = 1.0_f64.max(x.abs()).max(y.abs());
                (x - y).abs() <= tol * scale
            })
    }

    /// Largest absolute cell value.
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }

    /// Largest absolute cell difference, or `None` if dimensions differ.
    #[must_use]
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.n != other.n {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max),
        )
    }
}

/// Infallible copy; aborts if the buffer cannot be allocated.
/// Use [`Matrix::try_clone`] where allocation failure must be reported.
impl Clone for Matrix {
    fn clone(&self) -> Self {
        Self::from_buffer(self.n, self.data.clone())
    }
}

impl Drop for Matrix {
    fn drop(&mut self) {
        // Empty after `into_vec`, which already recorded the release.
        if !self.data.is_empty() {
            ledger::record_release(self.data.len());
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[i * self.n + j]
    }
}
