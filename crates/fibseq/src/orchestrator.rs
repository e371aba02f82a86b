//! Running one or more strategies and cross-checking their results.

use std::sync::Arc;
use std::time::{Duration, Instant};

use num_bigint::BigUint;
use tracing::{debug, info};

use fibseq_core::{Calculator, CalculatorFactory, FibError, Options};

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The computed value or a structured error.
    pub outcome: Result<BigUint, FibError>,
    /// Computation duration.
    pub duration: Duration,
}

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a calculation result.
    fn present_result(
        &self,
        algorithm: &str,
        n: u64,
        result: &BigUint,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison of several results.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Get calculators to run based on algorithm selection.
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, FibError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

/// Execute the calculation with every calculator, in order.
pub fn execute_calculations(
    calculators: &[Arc<dyn Calculator>],
    n: u64,
    opts: &Options,
) -> Vec<CalculationResult> {
    calculators
        .iter()
        .map(|calc| {
            let start = Instant::now();
            let outcome = calc.calculate(n, opts);
            let duration = start.elapsed();
            debug!(
                algorithm = calc.name(),
                n,
                ok = outcome.is_ok(),
                ?duration,
                "calculation finished"
            );
            CalculationResult {
                algorithm: calc.name().to_string(),
                outcome,
                duration,
            }
        })
        .collect()
}

/// Check that every successful result carries the same value.
///
/// Failed results are ignored; fewer than two successes trivially agree.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), FibError> {
    let mut values = results.iter().filter_map(|r| r.outcome.as_ref().ok());
    let Some(first) = values.next() else {
        return Ok(());
    };
    if values.any(|value| value != first) {
        return Err(FibError::Mismatch);
    }
    info!(
        agreeing = results.iter().filter(|r| r.outcome.is_ok()).count(),
        "results agree"
    );
    Ok(())
}
