//! Lazy Fibonacci iterator using the standard additive recurrence.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::calculator::FibError;

/// Lazy iterator over the Fibonacci sequence.
///
/// Yields `(index, F(index))` pairs starting from F(0).
///
/// # Example
/// ```
/// use fibseq_core::FibIterator;
/// let fibs: Vec<_> = FibIterator::new().take(7).map(|(_, v)| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
pub struct FibIterator {
    previous: BigUint,
    current: BigUint,
    index: u64,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            previous: BigUint::zero(),
            current: BigUint::one(),
            index: 0,
        }
    }

    /// Lazily yield `(i, F(i))` for every `i` in `start..=end`.
    ///
    /// Only the current pair of terms is kept alive, so long ranges can be
    /// streamed without holding every value.
    pub fn terms(
        start: u64,
        end: u64,
    ) -> Result<impl Iterator<Item = (u64, BigUint)>, FibError> {
        if start > end {
            return Err(FibError::Config(format!(
                "range start {start} must be <= end {end}"
            )));
        }

        let mut iter = Self::new();
        // Walk to `start` without cloning the prefix.
        for _ in 0..start {
            iter.advance();
        }
        Ok(iter.take_while(move |(i, _)| *i <= end))
    }

    /// Collect `(i, F(i))` for every `i` in `start..=end`.
    pub fn range(start: u64, end: u64) -> Result<Vec<(u64, BigUint)>, FibError> {
        Ok(Self::terms(start, end)?.collect())
    }

    fn advance(&mut self) {
        let next = &self.previous + &self.current;
        self.previous = std::mem::replace(&mut self.current, next);
        self.index += 1;
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = (u64, BigUint);

    fn next(&mut self) -> Option<Self::Item> {
        let item = (self.index, self.previous.clone());
        self.advance();
        Some(item)
    }
}
