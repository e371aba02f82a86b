//! Naive double recursion.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::calculator::CoreCalculator;
use crate::options::Options;

/// Direct recursive evaluation of F(n) = F(n-1) + F(n-2).
///
/// Exponential time and no caching; bounded by `Options::naive_limit`.
pub struct NaiveRecursive;

impl NaiveRecursive {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn fib(n: u64) -> BigUint {
        match n {
            0 => BigUint::zero(),
            1 | 2 => BigUint::one(),
            _ => Self::fib(n - 1) + Self::fib(n - 2),
        }
    }
}

impl Default for NaiveRecursive {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for NaiveRecursive {
    fn calculate_core(&self, n: u64) -> BigUint {
        Self::fib(n)
    }

    fn limit(&self, opts: &Options) -> Option<u64> {
        Some(opts.naive_limit)
    }

    fn name(&self) -> &'static str {
        "NaiveRecursive"
    }
}
