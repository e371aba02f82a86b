//! Constants for strategy limits and process exit codes.

/// Default largest index accepted by the naive recursive strategy.
///
/// The naive strategy makes O(phi^n) calls, so F(40) is already
/// hundreds of millions of additions.
pub const DEFAULT_NAIVE_LIMIT: u64 = 40;

/// Default largest index accepted by the memoized recursive strategy.
///
/// Bounds the recursion depth on a cold cache.
pub const DEFAULT_RECURSION_LIMIT: u64 = 1_000;

/// Hard ceiling on the memoized recursion limit.
///
/// A cold cache recurses once per index, so a limit above this risks
/// overflowing the main thread's stack.
pub const MAX_RECURSION_LIMIT: u64 = 5_000;

/// Largest index the command-line front end computes.
///
/// Applies to `fib` and to the end of `range`. F(100,000) has 20,899
/// digits; the library functions themselves are unbounded.
pub const MAX_INDEX: u64 = 100_000;

/// Maximum Fibonacci index whose value fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Reference values F(0)..=F(93), built at compile time.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error, including an empty reduction.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strategies disagreed during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid argument, rejected index, or bad configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
