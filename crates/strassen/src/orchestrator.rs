//! Runs the selected multipliers and compares their products.

use std::sync::Arc;
use std::time::{Duration, Instant};

use strassen_core::{cross_validate, ledger, Matrix, MatrixError, Multiplier};
use tracing::{info, warn};

/// Result of one multiplication.
#[derive(Debug)]
pub struct MultiplicationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The product or the error that stopped it.
    pub outcome: Result<Matrix, MatrixError>,
    /// Wall-clock duration.
    pub duration: Duration,
    /// Peak matrix elements alive on this thread during the run.
    pub peak_elements: u64,
}

/// Run every multiplier on `a * b`, one after another.
pub fn execute_multiplications(
    multipliers: &[Arc<dyn Multiplier>],
    a: &Matrix,
    b: &Matrix,
) -> Vec<MultiplicationResult> {
    multipliers
        .iter()
        .map(|m| {
            ledger::reset();
            let start = Instant::now();
            let outcome = m.multiply(a, b);
            let duration = start.elapsed();
            let peak_elements = ledger::snapshot().peak_elements;
            match &outcome {
                Ok(_) => info!(algorithm = m.name(), n = a.dim(), ?duration, "Product computed"),
                Err(e) => warn!(algorithm = m.name(), error = %e, "Multiplication failed"),
            }
            MultiplicationResult {
                algorithm: m.name().to_string(),
                outcome,
                duration,
                peak_elements,
            }
        })
        .collect()
}

/// Check that all successful products agree within `tolerance`.
///
/// Fails with the first error when no multiplier succeeded.
pub fn analyze_comparison_results(
    results: &[MultiplicationResult],
    tolerance: f64,
) -> Result<(), MatrixError> {
    let products: Vec<&Matrix> = results.iter().filter_map(|r| r.outcome.as_ref().ok()).collect();

    if products.is_empty() {
        if let Some(Err(e)) = results.first().map(|r| &r.outcome) {
            return Err(e.clone());
        }
        return Ok(());
    }

    cross_validate(&products, tolerance).inspect_err(|_| {
        warn!(tolerance, "Products disagree between algorithms");
    })
}
