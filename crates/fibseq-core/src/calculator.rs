//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by the application.
//! `CoreCalculator` is the internal trait implemented by the strategies.
//! `FibCalculator` is a decorator that enforces the strategy's index limit
//! before delegating.

use std::sync::Arc;

use num_bigint::BigUint;
use tracing::{debug, warn};

use crate::options::Options;

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The index was negative, not an integer, or otherwise malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The index is above the largest one the strategy accepts.
    #[error("index {n} exceeds the limit of {limit} for this strategy")]
    LimitExceeded { n: u64, limit: u64 },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different strategies don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,
}

/// Public trait for Fibonacci calculators.
pub trait Calculator: Send + Sync {
    /// Calculate F(n) with the given options.
    fn calculate(&self, n: u64, opts: &Options) -> Result<BigUint, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for strategy implementations.
/// Wrapped by `FibCalculator`, which checks `limit` first.
pub trait CoreCalculator: Send + Sync {
    /// Compute F(n). Callers have already checked `n` against `limit`.
    fn calculate_core(&self, n: u64) -> BigUint;

    /// Largest index this strategy accepts under `opts`, `None` if unbounded.
    fn limit(&self, opts: &Options) -> Option<u64>;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `CoreCalculator` with limit enforcement and logging.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }
}

impl Calculator for FibCalculator {
    fn calculate(&self, n: u64, opts: &Options) -> Result<BigUint, FibError> {
        check_limit(self.inner.as_ref(), n, opts)?;
        debug!(algorithm = self.inner.name(), n, "dispatching calculation");
        Ok(self.inner.calculate_core(n))
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Reject `n` if it is above the strategy's limit under `opts`.
pub(crate) fn check_limit(
    core: &dyn CoreCalculator,
    n: u64,
    opts: &Options,
) -> Result<(), FibError> {
    match core.limit(opts) {
        Some(limit) if n > limit => {
            warn!(algorithm = core.name(), n, limit, "index rejected by strategy limit");
            Err(FibError::LimitExceeded { n, limit })
        }
        _ => Ok(()),
    }
}

/// Convert a signed index into a `FibIndex`, rejecting negatives.
pub fn validate_index(n: i64) -> Result<u64, FibError> {
    u64::try_from(n).map_err(|_| {
        FibError::InvalidArgument(format!("index must be non-negative, got {n}"))
    })
}

/// Parse a textual index, rejecting negatives and non-integers.
///
/// # Example
/// ```
/// use fibseq_core::parse_index;
/// assert_eq!(parse_index(" 42 ").unwrap(), 42);
/// assert!(parse_index("-1").is_err());
/// assert!(parse_index("2.5").is_err());
/// ```
pub fn parse_index(s: &str) -> Result<u64, FibError> {
    let trimmed = s.trim();
    if let Ok(n) = trimmed.parse::<u64>() {
        return Ok(n);
    }
    match trimmed.parse::<i64>() {
        Ok(n) => validate_index(n),
        Err(_) => Err(FibError::InvalidArgument(format!(
            "index must be an integer, got {trimmed:?}"
        ))),
    }
}
