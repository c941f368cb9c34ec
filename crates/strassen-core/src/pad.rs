//! Dimension adapter: pad odd matrices to the next even size, trim back.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Dimension after padding: `n` if even, `n + 1` if odd.
#[must_use]
pub fn padded_dim(n: usize) -> usize {
    if n % 2 == 1 {
        n + 1
    } else {
        n
    }
}

/// Copy `m` into the top-left corner of a zero-filled `padded_dim(n)` matrix.
///
/// The source is borrowed; for an even `n` this is a plain copy.
pub fn padded_copy(m: &Matrix) -> Result<Matrix, MatrixError> {
    let n = m.dim();
    let expanded = padded_dim(n);
    let mut out = Matrix::zeros(expanded)?;
    let dst = out.as_mut_slice();
    for (i, row) in m.rows().enumerate() {
        dst[i * expanded..i * expanded + n].copy_from_slice(row);
    }
    Ok(out)
}

/// Pad an odd-dimension matrix with a zero last row and column.
///
/// Consumes `m`. An even matrix is returned unchanged; an odd one is
/// released once its padded copy exists.
pub fn pad(m: Matrix) -> Result<Matrix, MatrixError> {
    if m.dim() % 2 == 0 {
        return Ok(m);
    }
    padded_copy(&m)
}

/// Keep only the top-left `n x n` block of `m`, consuming `m`.
pub fn trim(m: Matrix, n: usize) -> Result<Matrix, MatrixError> {
    let expanded = m.dim();
    if n == 0 {
        return Err(MatrixError::InvalidDimension(n));
    }
    if n > expanded {
        return Err(MatrixError::DimensionMismatch {
            left: expanded,
            right: n,
        });
    }
    if n == expanded {
        return Ok(m);
    }
    let mut out = Matrix::zeros(n)?;
    let src = m.as_slice();
    for (i, row) in out.as_mut_slice().chunks_exact_mut(n).enumerate() {
        row.copy_from_slice(&src[i * expanded..i * expanded + n]);
    }
    Ok(out)
}
