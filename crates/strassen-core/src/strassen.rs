//! Recursive Strassen multiplication.
//!
//! Each frame is either a base case (naive product) or a recursive step
//! that splits both operands into quadrants, forms seven half-size
//! products M1..M7, and combines them into the four result quadrants:
//!
//! ```text
//! M1 = (A11 + A22)(B11 + B22)     C11 = M1 + M4 - M5 + M7
//! M2 = (A21 + A22) B11            C12 = M3 + M5
//! M3 = A11 (B12 - B22)            C21 = M2 + M4
//! M4 = A22 (B21 - B11)            C22 = M1 - M2 + M3 + M6
//! M5 = (A11 + A12) B22
//! M6 = (A21 - A11)(B11 + B12)
//! M7 = (A12 - A22)(B21 + B22)
//! ```
//!
//! A frame that receives an odd dimension pads both operands with a zero
//! row and column, recurses on the even size, and trims its own result.

use tracing::{debug, trace};

use crate::arith::{add, add_assign, sub, sub_assign};
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::naive::multiply_unchecked;
use crate::options::Options;
use crate::pad::{padded_copy, padded_dim, trim};
use crate::partition::{merge, split, Quadrants};

/// What a recursion frame does with a given dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Multiply directly.
    BaseCase,
    /// Split into quadrants and recurse.
    Recurse,
}

impl Step {
    /// Classify a frame of dimension `n`.
    #[must_use]
    pub fn for_dim(n: usize, threshold: usize) -> Self {
        if n <= threshold {
            Step::BaseCase
        } else {
            Step::Recurse
        }
    }
}

/// Number of recursive levels below the entry call for dimension `n`.
#[must_use]
pub fn recursion_depth(n: usize, threshold: usize) -> usize {
    let threshold = threshold.max(1);
    let mut n = n;
    let mut depth = 0;
    while Step::for_dim(n, threshold) == Step::Recurse {
        n = padded_dim(n) / 2;
        depth += 1;
    }
    depth
}

/// Multiply two `n x n` matrices with Strassen's algorithm.
///
/// Operands are validated once here; the recursion below assumes matched,
/// non-empty dimensions. A zero threshold in `opts` selects the default.
///
/// # Example
/// ```
/// use strassen_core::{strassen_multiply, Matrix, Options};
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
/// let c = strassen_multiply(&a, &b, &Options::default()).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn strassen_multiply(a: &Matrix, b: &Matrix, opts: &Options) -> Result<Matrix, MatrixError> {
    let n = a.dim();
    if n != b.dim() {
        return Err(MatrixError::DimensionMismatch {
            left: n,
            right: b.dim(),
        });
    }
    let threshold = opts.clone().normalize().threshold;
    debug!(
        n,
        threshold,
        depth = recursion_depth(n, threshold),
        padded = n % 2 == 1 && n > threshold,
        "Strassen multiply"
    );
    strassen(a, b, threshold)
}

/// One recursion frame. `a` and `b` share a dimension of at least 1.
pub(crate) fn strassen(a: &Matrix, b: &Matrix, threshold: usize) -> Result<Matrix, MatrixError> {
    let n = a.dim();
    if Step::for_dim(n, threshold) == Step::BaseCase {
        return multiply_unchecked(a, b);
    }

    if n % 2 == 1 {
        trace!(n, expanded = n + 1, "Padding odd dimension");
        let c = {
            let a = padded_copy(a)?;
            let b = padded_copy(b)?;
            combine(&a, &b, threshold)?
        };
        return trim(c, n);
    }

    combine(a, b, threshold)
}

/// Recursive step on even-dimension operands.
fn combine(a: &Matrix, b: &Matrix, threshold: usize) -> Result<Matrix, MatrixError> {
    let half = a.dim() / 2;
    trace!(n = a.dim(), half, "Recursing");

    let mut c = Quadrants {
        q11: Matrix::zeros(half)?,
        q12: Matrix::zeros(half)?,
        q21: Matrix::zeros(half)?,
        q22: Matrix::zeros(half)?,
    };

    {
        let qa = split(a)?;
        let qb = split(b)?;

        // Each Mk is folded into the quadrants that use it, in formula
        // order, then dropped.
        let m1 = strassen(&add(&qa.q11, &qa.q22)?, &add(&qb.q11, &qb.q22)?, threshold)?;
        add_assign(&mut c.q11, &m1)?;
        add_assign(&mut c.q22, &m1)?;
        drop(m1);

        let m2 = strassen(&add(&qa.q21, &qa.q22)?, &qb.q11, threshold)?;
        add_assign(&mut c.q21, &m2)?;
        sub_assign(&mut c.q22, &m2)?;
        drop(m2);

        let m3 = strassen(&qa.q11, &sub(&qb.q12, &qb.q22)?, threshold)?;
        add_assign(&mut c.q12, &m3)?;
        add_assign(&mut c.q22, &m3)?;
        drop(m3);

        let m4 = strassen(&qa.q22, &sub(&qb.q21, &qb.q11)?, threshold)?;
        add_assign(&mut c.q11, &m4)?;
        add_assign(&mut c.q21, &m4)?;
        drop(m4);

        let m5 = strassen(&add(&qa.q11, &qa.q12)?, &qb.q22, threshold)?;
        sub_assign(&mut c.q11, &m5)?;
        add_assign(&mut c.q12, &m5)?;
        drop(m5);

        let m6 = strassen(&sub(&qa.q21, &qa.q11)?, &add(&qb.q11, &qb.q12)?, threshold)?;
        add_assign(&mut c.q22, &m6)?;
        drop(m6);

        let m7 = strassen(&sub(&qa.q12, &qa.q22)?, &add(&qb.q21, &qb.q22)?, threshold)?;
        add_assign(&mut c.q11, &m7)?;
    }

    merge(c)
}
