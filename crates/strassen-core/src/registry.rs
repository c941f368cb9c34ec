//! Multiplier factory, selection, and cross-validation.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::multiplier::{Multiplier, NaiveMultiplier, StrassenMultiplier};
use crate::options::Options;

/// Factory trait for creating multipliers.
pub trait MultiplierFactory: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    opts: Options,
    cache: RwLock<HashMap<String, Arc<dyn Multiplier>>>,
}

impl DefaultFactory {
    /// Create a factory whose Strassen multiplier uses `opts`.
    #[must_use]
    pub fn new(opts: Options) -> Self {
        Self {
            opts: opts.normalize(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError> {
        match name {
            "naive" => Ok(Arc::new(NaiveMultiplier::new())),
            "strassen" => Ok(Arc::new(StrassenMultiplier::new(self.opts.clone()))),
            _ => Err(MatrixError::UnknownAlgorithm(name.to_string())),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl MultiplierFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError> {
        if let Some(m) = self.cache.read().get(name) {
            return Ok(Arc::clone(m));
        }

        let m = self.create_multiplier(name)?;
        self.cache.write().insert(name.to_string(), Arc::clone(&m));
        Ok(m)
    }

    fn available(&self) -> Vec<&str> {
        vec!["naive", "strassen"]
    }
}

/// Resolve `"all"` or a single name into the multipliers to run.
pub fn select(
    algo: &str,
    factory: &dyn MultiplierFactory,
) -> Result<Vec<Arc<dyn Multiplier>>, MatrixError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

/// Check that every product matches the first within `tolerance`.
///
/// Rounding error accumulates over the whole product, so the bound is
/// relative to the first product's largest cell (at least 1), not to each
/// cell on its own: `|x - y| <= tolerance * max(1, max|first|)`.
pub fn cross_validate(products: &[&Matrix], tolerance: f64) -> Result<(), MatrixError> {
    let Some((first, rest)) = products.split_first() else {
        return Ok(());
    };
    let bound = tolerance * first.max_abs().max(1.0);
    for m in rest {
        match m.max_abs_diff(first) {
            Some(diff) if diff <= bound => {}
            _ => return Err(MatrixError::Mismatch),
        }
    }
    Ok(())
}
