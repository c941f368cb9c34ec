//! Direct triple-loop multiplication, the recursion base case.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// `C[i, j] = sum_k A[i, k] * B[k, j]`, accumulated left to right.
///
/// Every output cell starts from zero. The operands must share one
/// dimension; callers inside the crate guarantee this.
pub(crate) fn multiply_unchecked(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    let n = a.dim();
    let (lhs, rhs) = (a.as_slice(), b.as_slice());
    let mut c = Matrix::zeros(n)?;
    let out = c.as_mut_slice();
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += lhs[i * n + k] * rhs[k * n + j];
            }
            out[i * n + j] = sum;
        }
    }
    Ok(c)
}

/// Naive O(n^3) product of two `n x n` matrices.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.dim() != b.dim() {
        return Err(MatrixError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }
    multiply_unchecked(a, b)
}
