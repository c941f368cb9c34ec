//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use strassen_core::strassen::recursion_depth;
use strassen_core::{generate, select, DefaultFactory, Options};

use crate::config::{AppConfig, OutputFormat};
use crate::orchestrator::{analyze_comparison_results, execute_multiplications, MultiplicationResult};
use crate::output::{format_duration, format_json, format_matrix, write_to_file, ProductReport};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let opts = Options {
        threshold: config.threshold,
    }
    .normalize();

    let a = generate(config.n, config.fill_a).context("generating A")?;
    let b = generate(config.n, config.fill_b).context("generating B")?;
    info!(n = config.n, fill_a = %config.fill_a, fill_b = %config.fill_b, "Operands ready");

    let factory = DefaultFactory::new(opts.clone());
    let multipliers = select(&config.algo, &factory)?;
    let results = execute_multiplications(&multipliers, &a, &b);

    present(config, &opts, &results)?;

    if results.len() > 1 {
        analyze_comparison_results(&results, config.tolerance)?;
        if !config.quiet && config.format == OutputFormat::Text {
            println!("All {} products agree (tolerance {:e})", results.len(), config.tolerance);
        }
    }

    for result in &results {
        if let Err(e) = &result.outcome {
            return Err(anyhow::Error::new(e.clone())
                .context(format!("{} multiplication failed", result.algorithm)));
        }
    }

    if let Some(ref path) = config.output {
        let content = render(config, &results, true)?;
        write_to_file(path, &content)
            .with_context(|| format!("writing product to {}", path.display()))?;
    }

    Ok(())
}

fn present(config: &AppConfig, opts: &Options, results: &[MultiplicationResult]) -> Result<()> {
    if config.format == OutputFormat::Json {
        println!("{}", render(config, results, config.print)?);
        return Ok(());
    }

    for result in results {
        match &result.outcome {
            Ok(product) => {
                if !config.quiet {
                    println!(
                        "{}: {n}x{n} product in {}",
                        result.algorithm,
                        format_duration(result.duration),
                        n = config.n
                    );
                    if config.verbose {
                        if result.algorithm == "Strassen" {
                            println!(
                                "  threshold {}, recursion depth {}",
                                opts.threshold,
                                recursion_depth(config.n, opts.threshold)
                            );
                        }
                        println!("  peak live elements {}", result.peak_elements);
                    }
                }
                if config.print {
                    print!("{}", format_matrix(product));
                }
            }
            Err(e) => eprintln!("{}: {e}", result.algorithm),
        }
    }
    Ok(())
}

/// Text: the first successful product. JSON: a report per algorithm.
fn render(config: &AppConfig, results: &[MultiplicationResult], with_rows: bool) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(results
            .iter()
            .find_map(|r| r.outcome.as_ref().ok())
            .map(format_matrix)
            .unwrap_or_default()),
        OutputFormat::Json => {
            let reports: Vec<ProductReport> = results
                .iter()
                .map(|r| ProductReport::from_result(r, config.n, with_rows))
                .collect();
            Ok(format_json(&reports)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn run_all_small() {
        let config = AppConfig::try_parse_from(["strassen", "-n", "9", "--algo", "all", "-q"]).unwrap();
        assert!(run(&config).is_ok());
    }

    #[test]
    fn run_rejects_zero_dimension() {
        let config = AppConfig::try_parse_from(["strassen", "-n", "0", "-q"]).unwrap();
        let err = run(&config).unwrap_err();
        assert_eq!(crate::errors::exit_code(&err), 2);
    }

    #[test]
    fn run_rejects_unknown_algo() {
        let config = AppConfig::try_parse_from(["strassen", "--algo", "winograd", "-q"]).unwrap();
        let err = run(&config).unwrap_err();
        assert_eq!(crate::errors::exit_code(&err), 4);
    }
}
