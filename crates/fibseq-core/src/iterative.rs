//! Iterative two-value recurrence.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::calculator::CoreCalculator;
use crate::options::Options;

/// Walks `(previous, current)` forward one step per iteration.
///
/// O(n) additions, two live values, no recursion and no cache.
pub struct Iterative;

impl Iterative {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn fib(n: u64) -> BigUint {
        let mut previous = BigUint::zero();
        if n == 0 {
            return previous;
        }
        let mut current = BigUint::one();
        for _ in 1..n {
            let next = &previous + &current;
            previous = std::mem::replace(&mut current, next);
        }
        current
    }
}

impl Default for Iterative {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for Iterative {
    fn calculate_core(&self, n: u64) -> BigUint {
        Self::fib(n)
    }

    fn limit(&self, _opts: &Options) -> Option<u64> {
        None
    }

    fn name(&self) -> &'static str {
        "Iterative"
    }
}
