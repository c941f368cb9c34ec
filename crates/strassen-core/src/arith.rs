//! Elementwise addition and subtraction of same-dimension matrices.

use crate::error::MatrixError;
use crate::matrix::Matrix;

fn check_dims(a: &Matrix, b: &Matrix) -> Result<(), MatrixError> {
    if a.dim() == b.dim() {
        Ok(())
    } else {
        Err(MatrixError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        })
    }
}

fn zip_with(a: &Matrix, b: &Matrix, op: impl Fn(f64, f64) -> f64) -> Result<Matrix, MatrixError> {
    check_dims(a, b)?;
    let mut c = Matrix::zeros(a.dim())?;
    for ((out, &x), &y) in c
        .as_mut_slice()
        .iter_mut()
        .zip(a.as_slice())
        .zip(b.as_slice())
    {
        *out = op(x, y);
    }
    Ok(c)
}

/// `A + B` as a newly owned matrix. Both inputs are borrowed.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    zip_with(a, b, |x, y| x + y)
}

/// `A - B` as a newly owned matrix. Both inputs are borrowed.
pub fn sub(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    zip_with(a, b, |x, y| x - y)
}

/// `acc += rhs` in place.
pub fn add_assign(acc: &mut Matrix, rhs: &Matrix) -> Result<(), MatrixError> {
    check_dims(acc, rhs)?;
    for (out, &y) in acc.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
        *out += y;
    }
    Ok(())
}

/// `acc -= rhs` in place.
pub fn sub_assign(acc: &mut Matrix, rhs: &Matrix) -> Result<(), MatrixError> {
    check_dims(acc, rhs)?;
    for (out, &y) in acc.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
        *out -= y;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[[f64; 2]; 2]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn add_cells() {
        let c = add(&m(&[[1.0, 2.0], [3.0, 4.0]]), &m(&[[10.0, 20.0], [30.0, 40.0]])).unwrap();
        assert_eq!(c.as_slice(), &[11.0, 22.0, 33.0, 44.0]);
    }

    #[test]
    fn sub_cells() {
        let c = sub(&m(&[[1.0, 2.0], [3.0, 4.0]]), &m(&[[10.0, 20.0], [30.0, 40.0]])).unwrap();
        assert_eq!(c.as_slice(), &[-9.0, -18.0, -27.0, -36.0]);
    }

    #[test]
    fn inputs_untouched() {
        let a = m(&[[1.0, 2.0], [3.0, 4.0]]);
        let b = m(&[[5.0, 6.0], [7.0, 8.0]]);
        let _ = add(&a, &b).unwrap();
        let _ = sub(&a, &b).unwrap();
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(b.as_slice(), &[5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn in_place_matches_fresh() {
        let a = m(&[[1.5, -2.0], [0.25, 4.0]]);
        let b = m(&[[3.0, 1.0], [-1.0, 0.5]]);
        let mut acc = a.clone();
        add_assign(&mut acc, &b).unwrap();
        assert_eq!(acc, add(&a, &b).unwrap());
        let mut acc = a.clone();
        sub_assign(&mut acc, &b).unwrap();
        assert_eq!(acc, sub(&a, &b).unwrap());
    }

    #[test]
    fn mismatch_fails_fast() {
        let a = Matrix::zeros(2).unwrap();
        let mut b = Matrix::zeros(3).unwrap();
        let expected = MatrixError::DimensionMismatch { left: 2, right: 3 };
        assert_eq!(add(&a, &b).unwrap_err(), expected);
        assert_eq!(sub(&a, &b).unwrap_err(), expected);
        assert_eq!(
            add_assign(&mut b, &a).unwrap_err(),
            MatrixError::DimensionMismatch { left: 3, right: 2 }
        );
        assert!(sub_assign(&mut b, &a).is_err());
    }
}
