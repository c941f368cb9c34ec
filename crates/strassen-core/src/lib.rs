//! # strassen-core
//!
//! Dense square matrix multiplication with Strassen's algorithm.
//!
//! The recursion splits each operand into quadrants, forms seven
//! half-size products, and falls back to the naive product at or below a
//! size threshold. Odd dimensions are padded with a zero row and column
//! and the result is trimmed back.
//!
//! Every [`Matrix`] owns its buffer and is released on drop; the
//! per-thread [`ledger`] records allocations and releases so callers can
//! confirm that no temporary outlives its frame.

pub mod arith;
pub mod constants;
pub mod error;
pub mod generator;
pub mod ledger;
pub mod matrix;
pub mod multiplier;
pub mod naive;
pub mod options;
pub mod pad;
pub mod partition;
pub mod registry;
pub mod strassen;

// Re-exports
pub use constants::{exit_codes, DEFAULT_THRESHOLD, DEFAULT_TOLERANCE};
pub use error::MatrixError;
pub use generator::{generate, Fill};
pub use matrix::Matrix;
pub use multiplier::{Multiplier, NaiveMultiplier, StrassenMultiplier};
pub use options::Options;
pub use registry::{cross_validate, select, DefaultFactory, MultiplierFactory};
pub use strassen::strassen_multiply;
