//! CLI result presenter.

use std::fmt::{Display, Write as _};
use std::time::Duration;

use num_bigint::BigUint;

use crate::orchestrator::{CalculationResult, ResultPresenter};
use crate::output::{format_duration, format_index, format_result, join_values};

/// CLI result presenter.
///
/// Each `render_*` method builds the text that the matching `present_*`
/// method prints to stdout.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Render one `(index, value)` line of a Fibonacci range.
    #[must_use]
    pub fn render_term(&self, n: u64, value: &BigUint) -> String {
        if self.quiet {
            value.to_string()
        } else {
            format!("F({}) = {}", format_index(n), format_result(value, self.verbose))
        }
    }

    /// Render the output of a sequence operation.
    #[must_use]
    pub fn render_sequence<T: Display>(&self, label: &str, values: &[T]) -> String {
        if self.quiet {
            join_values(values, " ")
        } else {
            format!("{label}: [{}]", join_values(values, ", "))
        }
    }

    /// Render a scalar produced by a reduction.
    #[must_use]
    pub fn render_scalar<T: Display>(&self, label: &str, value: &T) -> String {
        if self.quiet {
            value.to_string()
        } else {
            format!("{label}: {value}")
        }
    }

    /// Render a single calculation result.
    #[must_use]
    pub fn render_result(
        &self,
        algorithm: &str,
        n: u64,
        result: &BigUint,
        duration: Duration,
        details: bool,
    ) -> String {
        if self.quiet {
            return result.to_string();
        }

        let mut out = String::new();
        let _ = writeln!(out, "Algorithm: {algorithm}");
        let _ = writeln!(out, "Duration: {}", format_duration(duration));
        if details {
            let _ = writeln!(out, "Result bits: {}", result.bits());
            let _ = writeln!(out, "Result digits: {}", result.to_string().len());
        }
        out.push_str(&self.render_term(n, result));
        out
    }

    /// Render the comparison table, or `None` in quiet mode.
    #[must_use]
    pub fn render_comparison(&self, results: &[CalculationResult]) -> Option<String> {
        if self.quiet {
            return None;
        }

        let mut out = String::from("\nComparison Results:\n");
        let _ = writeln!(out, "{:-<60}", "");
        for result in results {
            let status = match &result.outcome {
                Ok(_) => "OK".to_string(),
                Err(e) => format!("SKIPPED: {e}"),
            };
            let _ = writeln!(
                out,
                "  {:<16} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            );
        }
        Some(out.trim_end().to_string())
    }

    pub fn present_term(&self, n: u64, value: &BigUint) {
        println!("{}", self.render_term(n, value));
    }

    pub fn present_sequence<T: Display>(&self, label: &str, values: &[T]) {
        println!("{}", self.render_sequence(label, values));
    }

    pub fn present_scalar<T: Display>(&self, label: &str, value: &T) {
        println!("{}", self.render_scalar(label, value));
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        algorithm: &str,
        n: u64,
        result: &BigUint,
        duration: Duration,
        details: bool,
    ) {
        println!("{}", self.render_result(algorithm, n, result, duration, details));
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        if let Some(table) = self.render_comparison(results) {
            println!("{table}");
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
