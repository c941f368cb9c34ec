//! Constants for multiplication thresholds and process exit codes.

/// Default base-case dimension: matrices of this size or smaller are
/// multiplied directly.
pub const DEFAULT_THRESHOLD: usize = 4;

/// Default relative tolerance when comparing floating-point products.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Exit codes for the `strassen` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Caller supplied an invalid dimension or mismatched operands.
    pub const ERROR_INPUT: i32 = 2;
    /// Products from different multipliers did not agree.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// A matrix buffer could not be allocated.
    pub const ERROR_ALLOCATION: i32 = 5;
}
