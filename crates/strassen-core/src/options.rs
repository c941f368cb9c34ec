//! Multiplication options.

use crate::constants::DEFAULT_THRESHOLD;

/// Options for Strassen multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Dimension at or below which the naive product is used.
    pub threshold: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Options {
    /// Create options with the given base-case threshold.
    #[must_use]
    pub fn with_threshold(threshold: usize) -> Self {
        Self { threshold }.normalize()
    }

    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.threshold == 0 {
            self.threshold = DEFAULT_THRESHOLD;
        }
        self
    }
}
