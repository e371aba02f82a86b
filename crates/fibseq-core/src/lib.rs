//! # fibseq-core
//!
//! Fibonacci numbers under the canonical convention F(0)=0, F(1)=1, F(2)=1,
//! computed by three interchangeable strategies:
//! naive double recursion, memoized recursion, and the iterative
//! two-value recurrence.

pub mod calculator;
pub mod constants;
pub mod iterative;
pub mod iterator;
pub mod memoized;
pub mod naive;
pub mod options;
pub mod registry;

// Re-exports
pub use calculator::{
    parse_index, validate_index, Calculator, CoreCalculator, FibCalculator, FibError,
};
pub use constants::{
    exit_codes, DEFAULT_NAIVE_LIMIT, DEFAULT_RECURSION_LIMIT, FIB_TABLE, MAX_FIB_U64, MAX_INDEX,
    MAX_RECURSION_LIMIT,
};
pub use iterative::Iterative;
pub use iterator::FibIterator;
pub use memoized::Memoized;
pub use naive::NaiveRecursive;
pub use options::Options;
pub use registry::{CalculatorFactory, DefaultFactory};

use std::sync::Arc;

use num_bigint::BigUint;

fn calculate_with(core: Arc<dyn CoreCalculator>, n: i64) -> Result<BigUint, FibError> {
    let n = validate_index(n)?;
    FibCalculator::new(core).calculate(n, &Options::default())
}

/// Compute F(n) by naive double recursion.
///
/// Fails for negative `n` and for `n` above `DEFAULT_NAIVE_LIMIT`.
///
/// # Example
/// ```
/// assert_eq!(fibseq_core::fib_naive(10).unwrap().to_string(), "55");
/// assert!(fibseq_core::fib_naive(-1).is_err());
/// ```
pub fn fib_naive(n: i64) -> Result<BigUint, FibError> {
    calculate_with(Arc::new(NaiveRecursive::new()), n)
}

/// Compute F(n) with the iterative two-value recurrence.
///
/// Fails only for negative `n`. For repeated lookups with shared state, see
/// [`Memoized`].
///
/// # Example
/// ```
/// assert_eq!(fibseq_core::fib_iterative(0).unwrap().to_string(), "0");
/// assert_eq!(fibseq_core::fib_iterative(100).unwrap().to_string(), "354224848179261915075");
/// ```
pub fn fib_iterative(n: i64) -> Result<BigUint, FibError> {
    calculate_with(Arc::new(Iterative::new()), n)
}
