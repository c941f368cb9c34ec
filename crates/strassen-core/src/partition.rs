//! Split a matrix into four quadrants and merge four quadrants back.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Four owned quadrant copies of an even-dimension matrix.
#[derive(Debug)]
pub struct Quadrants {
    /// Top-left.
    pub q11: Matrix,
    /// Top-right.
    pub q12: Matrix,
    /// Bottom-left.
    pub q21: Matrix,
    /// Bottom-right.
    pub q22: Matrix,
}

/// Copy the four `n/2` quadrants out of `m`, which stays borrowed.
pub fn split(m: &Matrix) -> Result<Quadrants, MatrixError> {
    let n = m.dim();
    if n % 2 != 0 {
        return Err(MatrixError::InvalidDimension(n));
    }
    let half = n / 2;
    let src = m.as_slice();
    let block = |row0: usize, col0: usize| -> Result<Matrix, MatrixError> {
        let mut q = Matrix::zeros(half)?;
        for (i, row) in q.as_mut_slice().chunks_exact_mut(half).enumerate() {
            let start = (row0 + i) * n + col0;
            row.copy_from_slice(&src[start..start + half]);
        }
        Ok(q)
    };
    Ok(Quadrants {
        q11: block(0, 0)?,
        q12: block(0, half)?,
        q21: block(half, 0)?,
        q22: block(half, half)?,
    })
}

/// Assemble four `half x half` quadrants into one `2*half` matrix.
///
/// The quadrants are consumed and released when this returns.
#[allow(clippy::needless_pass_by_value)]
pub fn merge(q: Quadrants) -> Result<Matrix, MatrixError> {
    let half = q.q11.dim();
    for part in [&q.q12, &q.q21, &q.q22] {
        if part.dim() != half {
            return Err(MatrixError::DimensionMismatch {
                left: half,
                right: part.dim(),
            });
        }
    }
    let n = 2 * half;
    let mut c = Matrix::zeros(n)?;
    let dst = c.as_mut_slice();
    for (part, row0, col0) in [
        (&q.q11, 0, 0),
        (&q.q12, 0, half),
        (&q.q21, half, 0),
        (&q.q22, half, half),
    ] {
        for (i, row) in part.rows().enumerate() {
            let start = (row0 + i) * n + col0;
            dst[start..start + half].copy_from_slice(row);
        }
    }
    Ok(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger;

    fn incr(n: usize) -> Matrix {
        Matrix::from_vec(n, (0..n * n).map(|v| v as f64).collect()).unwrap()
    }

    #[test]
    fn split_four_by_four() {
        let q = split(&incr(4)).unwrap();
        assert_eq!(q.q11.as_slice(), &[0.0, 1.0, 4.0, 5.0]);
        assert_eq!(q.q12.as_slice(), &[2.0, 3.0, 6.0, 7.0]);
        assert_eq!(q.q21.as_slice(), &[8.0, 9.0, 12.0, 13.0]);
        assert_eq!(q.q22.as_slice(), &[10.0, 11.0, 14.0, 15.0]);
    }

    #[test]
    fn split_then_merge_restores() {
        for n in [2, 6, 8] {
            let m = incr(n);
            assert_eq!(merge(split(&m).unwrap()).unwrap(), m);
        }
    }

    #[test]
    fn quadrants_are_copies() {
        let m = incr(2);
        let mut q = split(&m).unwrap();
        q.q11.set(0, 0, 99.0);
        assert_eq!(m.get(0, 0), 0.0);
    }

    #[test]
    fn split_rejects_odd() {
        assert_eq!(split(&incr(3)).unwrap_err(), MatrixError::InvalidDimension(3));
    }

    #[test]
    fn merge_rejects_mixed_sizes() {
        let q = Quadrants {
            q11: incr(2),
            q12: incr(2),
            q21: incr(3),
            q22: incr(2),
        };
        assert_eq!(
            merge(q).unwrap_err(),
            MatrixError::DimensionMismatch { left: 2, right: 3 }
        );
    }

    #[test]
    fn merge_releases_quadrants() {
        ledger::reset();
        let before = ledger::snapshot();
        let q = split(&incr(4)).unwrap();
        let c = merge(q).unwrap();
        let after = ledger::snapshot();
        // incr(4) temp, four quadrants, merged result
        assert_eq!(after.allocated, 6);
        assert_eq!(after.released, 5);
        assert_eq!(after.live_matrices, before.live_matrices + 1);
        drop(c);
    }
}
