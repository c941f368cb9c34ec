//! Fill patterns for building test and benchmark operands.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// How to fill a generated matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// All zeros.
    Zero,
    /// All ones.
    One,
    /// Ones on the border, zeros inside.
    OneRing,
    /// `(i + j) % 2`.
    Checker,
    /// Row-major sequence 0, 1, 2, ...
    Incr,
    /// Each row ramps `1/n, 2/n, ..., 1`.
    RowRamp,
    /// Uniform values in `[-1, 1)` from a seeded generator.
    Random {
        /// Generator seed.
        seed: u64,
    },
}

impl Fill {
    /// Names accepted by [`Fill::from_str`], excluding the seed.
    pub const NAMES: [&'static str; 7] = [
        "zero", "one", "one-ring", "checker", "incr", "row-ramp", "random",
    ];
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Zero => f.write_str("zero"),
            Fill::One => f.write_str("one"),
            Fill::OneRing => f.write_str("one-ring"),
            Fill::Checker => f.write_str("checker"),
            Fill::Incr => f.write_str("incr"),
            Fill::RowRamp => f.write_str("row-ramp"),
            Fill::Random { seed } => write!(f, "random:{seed}"),
        }
    }
}

impl FromStr for Fill {
    type Err = String;

    /// Parse `zero`, `one`, `one-ring`, `checker`, `incr`, `row-ramp`,
    /// `random` or `random:<seed>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(Fill::Zero),
            "one" => Ok(Fill::One),
            "one-ring" | "ring" => Ok(Fill::OneRing),
            "checker" => Ok(Fill::Checker),
            "incr" => Ok(Fill::Incr),
            "row-ramp" | "ramp" => Ok(Fill::RowRamp),
            "random" => Ok(Fill::Random { seed: 0 }),
            other => {
                if let Some(seed) = other.strip_prefix("random:") {
                    let seed = seed
                        .parse()
                        .map_err(|_| format!("invalid random seed: {seed}"))?;
                    Ok(Fill::Random { seed })
                } else {
                    Err(format!(
                        "unknown fill pattern '{s}' (expected one of: {})",
                        Fill::NAMES.join(", ")
                    ))
                }
            }
        }
    }
}

/// Build an `n x n` matrix filled with `fill`.
pub fn generate(n: usize, fill: Fill) -> Result<Matrix, MatrixError> {
    let mut m = Matrix::zeros(n)?;
    match fill {
        Fill::Zero => {}
        Fill::One => {
            for i in 0..n {
                for j in 0..n {
                    m.set(i, j, 1.0);
                }
            }
        }
        Fill::OneRing => {
            for i in 0..n {
                for j in 0..n {
                    if i == 0 || i == n - 1 || j == 0 || j == n - 1 {
                        m.set(i, j, 1.0);
                    }
                }
            }
        }
        Fill::Checker => {
            for i in 0..n {
                for j in 0..n {
                    m.set(i, j, ((i + j) % 2) as f64);
                }
            }
        }
        Fill::Incr => {
            for i in 0..n {
                for j in 0..n {
                    m.set(i, j, (i * n + j) as f64);
                }
            }
        }
        Fill::RowRamp => {
            let step = 1.0 / n as f64;
            for i in 0..n {
                let mut value = 0.0;
                for j in 0..n {
                    value += step;
                    m.set(i, j, value);
                }
            }
        }
        Fill::Random { seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            for i in 0..n {
                for j in 0..n {
                    m.set(i, j, rng.gen_range(-1.0..1.0));
                }
            }
        }
    }
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_ring_border() {
        let m = generate(4, Fill::OneRing).unwrap();
        assert_eq!(
            m.as_slice(),
            &[
                1.0, 1.0, 1.0, 1.0, //
                1.0, 0.0, 0.0, 1.0, //
                1.0, 0.0, 0.0, 1.0, //
                1.0, 1.0, 1.0, 1.0,
            ]
        );
    }

    #[test]
    fn checker_parity() {
        let m = generate(3, Fill::Checker).unwrap();
        assert_eq!(m.as_slice(), &[0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn incr_row_major() {
        let m = generate(3, Fill::Incr).unwrap();
        assert_eq!(m.get(2, 1), 7.0);
    }

    #[test]
    fn row_ramp_ends_at_one() {
        let m = generate(4, Fill::RowRamp).unwrap();
        for row in m.rows() {
            approx::assert_relative_eq!(row[0], 0.25);
            approx::assert_relative_eq!(row[3], 1.0);
        }
    }

    #[test]
    fn zero_and_one() {
        assert!(generate(3, Fill::Zero).unwrap().as_slice().iter().all(|&v| v == 0.0));
        assert!(generate(3, Fill::One).unwrap().as_slice().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn random_is_seeded() {
        let a = generate(5, Fill::Random { seed: 7 }).unwrap();
        let b = generate(5, Fill::Random { seed: 7 }).unwrap();
        let c = generate(5, Fill::Random { seed: 8 }).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.as_slice().iter().all(|v| (-1.0..1.0).contains(v)));
    }

    #[test]
    fn parse_names() {
        assert_eq!("one-ring".parse::<Fill>(), Ok(Fill::OneRing));
        assert_eq!("CHECKER".parse::<Fill>(), Ok(Fill::Checker));
        assert_eq!("random:42".parse::<Fill>(), Ok(Fill::Random { seed: 42 }));
        assert!("random:x".parse::<Fill>().is_err());
        assert!("spiral".parse::<Fill>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for fill in [Fill::Zero, Fill::RowRamp, Fill::Random { seed: 3 }] {
            assert_eq!(fill.to_string().parse::<Fill>(), Ok(fill));
        }
    }
}
