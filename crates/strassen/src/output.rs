//! Rendering of products: text rows, JSON reports, files.

use std::io;
use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use strassen_core::Matrix;

use crate::orchestrator::MultiplicationResult;

/// Render a matrix as right-aligned text rows.
#[must_use]
pub fn format_matrix(m: &Matrix) -> String {
    let cells: Vec<String> = m.as_slice().iter().map(|v| format!("{v}")).collect();
    let width = cells.iter().map(String::len).max().unwrap_or(0);
    let mut out = String::new();
    for row in cells.chunks(m.dim()) {
        let line: Vec<String> = row.iter().map(|c| format!("{c:>width$}")).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Format a duration for display: µs, ms, seconds, or minutes and seconds.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    if d < Duration::from_millis(1) {
        format!("{:.1}µs", d.as_secs_f64() * 1e6)
    } else if d < Duration::from_secs(1) {
        format!("{:.1}ms", d.as_secs_f64() * 1e3)
    } else if d < Duration::from_secs(60) {
        format!("{:.2}s", d.as_secs_f64())
    } else {
        let secs = d.as_secs();
        format!("{}m{:02}s", secs / 60, secs % 60)
    }
}

/// JSON view of one multiplication.
#[derive(Debug, Serialize)]
pub struct ProductReport {
    pub algorithm: String,
    pub n: usize,
    pub duration_ms: f64,
    pub peak_elements: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<f64>>>,
}

impl ProductReport {
    /// Build a report; the product rows are included only when `with_rows`.
    #[must_use]
    pub fn from_result(result: &MultiplicationResult, n: usize, with_rows: bool) -> Self {
        let (error, rows) = match &result.outcome {
            Ok(m) => (None, with_rows.then(|| m.rows().map(<[f64]>::to_vec).collect())),
            Err(e) => (Some(e.to_string()), None),
        };
        Self {
            algorithm: result.algorithm.clone(),
            n,
            duration_ms: result.duration.as_secs_f64() * 1000.0,
            peak_elements: result.peak_elements,
            error,
            rows,
        }
    }
}

/// Serialize reports as pretty JSON.
pub fn format_json(reports: &[ProductReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

/// Write rendered output to a file.
pub fn write_to_file(path: &Path, content: &str) -> io::Result<()> {
    std::fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strassen_core::MatrixError;

    #[test]
    fn format_matrix_aligns() {
        let m = Matrix::from_rows(&[[2.0, 3.0], [6.0, 11.0]]).unwrap();
        assert_eq!(format_matrix(&m), " 2  3\n 6 11\n");
    }

    #[test]
    fn format_matrix_fractions() {
        let m = Matrix::from_rows(&[[0.5]]).unwrap();
        assert_eq!(format_matrix(&m), "0.5\n");
    }

    #[test]
    fn format_duration_units() {
        assert_eq!(format_duration(Duration::from_nanos(500)), "0.5µs");
        assert_eq!(format_duration(Duration::from_millis(42)), "42.0ms");
        assert_eq!(format_duration(Duration::from_millis(3500)), "3.50s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30s");
        assert_eq!(format_duration(Duration::from_secs(3605)), "60m05s");
    }

    #[test]
    fn report_json_shape() {
        let ok = MultiplicationResult {
            algorithm: "Strassen".into(),
            outcome: Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]),
            duration: Duration::from_millis(2),
            peak_elements: 8,
        };
        let failed = MultiplicationResult {
            algorithm: "Naive".into(),
            outcome: Err(MatrixError::InvalidDimension(0)),
            duration: Duration::ZERO,
            peak_elements: 0,
        };
        let reports = [
            ProductReport::from_result(&ok, 2, true),
            ProductReport::from_result(&failed, 2, true),
        ];
        let json: serde_json::Value = serde_json::from_str(&format_json(&reports).unwrap()).unwrap();
        assert_eq!(json[0]["algorithm"], "Strassen");
        assert_eq!(json[0]["rows"][1][0], 3.0);
        assert!(json[0].get("error").is_none());
        assert!(json[1]["error"].as_str().unwrap().contains("invalid dimension"));
        assert!(json[1].get("rows").is_none());
    }
}
