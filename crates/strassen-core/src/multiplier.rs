//! The `Multiplier` trait and its two implementations.

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::naive;
use crate::options::Options;
use crate::strassen::strassen_multiply;

/// A square matrix multiplication algorithm.
pub trait Multiplier: Send + Sync {
    /// Compute `A * B` for two `n x n` matrices.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;
}

/// Direct triple-loop product.
#[derive(Debug, Default)]
pub struct NaiveMultiplier;

impl NaiveMultiplier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Multiplier for NaiveMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        naive::multiply(a, b)
    }

    fn name(&self) -> &str {
        "Naive"
    }
}

/// Strassen's seven-product recursion.
#[derive(Debug, Default)]
pub struct StrassenMultiplier {
    opts: Options,
}

impl StrassenMultiplier {
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self {
            opts: opts.normalize(),
        }
    }

    /// Options this multiplier runs with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.opts
    }
}

impl Multiplier for StrassenMultiplier {
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        strassen_multiply(a, b, &self.opts)
    }

    fn name(&self) -> &str {
        "Strassen"
    }
}
