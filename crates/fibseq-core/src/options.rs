//! Calculation options.

use crate::calculator::FibError;
use crate::constants::{DEFAULT_NAIVE_LIMIT, DEFAULT_RECURSION_LIMIT, MAX_RECURSION_LIMIT};

/// Options shared by every strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Largest index the naive recursive strategy accepts.
    pub naive_limit: u64,
    /// Largest index the memoized recursive strategy accepts.
    pub recursion_limit: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            naive_limit: DEFAULT_NAIVE_LIMIT,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.naive_limit == 0 {
            self.naive_limit = DEFAULT_NAIVE_LIMIT;
        }
        if self.recursion_limit == 0 {
            self.recursion_limit = DEFAULT_RECURSION_LIMIT;
        }
        self
    }

    /// Reject a recursion limit above `MAX_RECURSION_LIMIT`.
    pub fn validate(&self) -> Result<(), FibError> {
        if self.recursion_limit > MAX_RECURSION_LIMIT {
            return Err(FibError::Config(format!(
                "recursion limit {} exceeds the maximum of {MAX_RECURSION_LIMIT}",
                self.recursion_limit
            )));
        }
        Ok(())
    }
}
