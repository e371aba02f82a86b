//! Memoized recursion with an instance-owned cache.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use parking_lot::Mutex;
use tracing::debug;

use crate::calculator::{check_limit, validate_index, CoreCalculator, FibError};
use crate::constants::MAX_RECURSION_LIMIT;
use crate::options::Options;

/// Recursive F(n) that remembers every value it has produced.
///
/// The cache belongs to the instance: two `Memoized` values never share
/// entries, and dropping the instance releases the cache. Each entry is
/// written exactly once. The lock is only held for lookups and inserts,
/// never across the recursive calls.
pub struct Memoized {
    cache: Mutex<HashMap<u64, BigUint>>,
}

impl Memoized {
    /// Create a calculator whose cache holds only the base cases.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(Self::seeded()),
        }
    }

    /// Compute F(n) under the default options.
    ///
    /// # Example
    /// ```
    /// use fibseq_core::Memoized;
    /// let memo = Memoized::new();
    /// assert_eq!(memo.fib(10).unwrap().to_string(), "55");
    /// assert!(memo.fib(-1).is_err());
    /// ```
    pub fn fib(&self, n: i64) -> Result<BigUint, FibError> {
        let n = validate_index(n)?;
        check_limit(self, n, &Options::default())?;
        Ok(self.compute(n))
    }

    /// Number of cached entries, base cases included.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Drop every computed entry, keeping the base cases.
    pub fn clear(&self) {
        *self.cache.lock() = Self::seeded();
    }

    fn seeded() -> HashMap<u64, BigUint> {
        HashMap::from([
            (0, BigUint::zero()),
            (1, BigUint::one()),
            (2, BigUint::one()),
        ])
    }

    fn compute(&self, n: u64) -> BigUint {
        let cached = self.cache.lock().get(&n).cloned();
        if let Some(value) = cached {
            return value;
        }

        // n > 2 here: the base cases are always cached.
        let value = self.compute(n - 1) + self.compute(n - 2);
        self.cache
            .lock()
            .entry(n)
            .or_insert_with(|| {
                debug!(n, "memo cache fill");
                value
            })
            .clone()
    }
}

impl Default for Memoized {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for Memoized {
    fn calculate_core(&self, n: u64) -> BigUint {
        self.compute(n)
    }

    fn limit(&self, opts: &Options) -> Option<u64> {
        Some(opts.recursion_limit.min(MAX_RECURSION_LIMIT))
    }

    fn name(&self) -> &'static str {
        "Memoized"
    }
}
