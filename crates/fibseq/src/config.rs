//! Application configuration from CLI flags and environment.

use clap::{Args, Parser, Subcommand};

use fibseq_core::{FibError, Options};

/// fibseq: Fibonacci strategies and index-aware sequence operations.
#[derive(Parser, Debug)]
#[command(name = "fibseq", version, about)]
pub struct AppConfig {
    /// Verbose output: debug logging and untruncated results.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output values).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level modes.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute F(n) with one strategy, or all of them cross-checked.
    Fib(FibArgs),

    /// Print F(start) through F(end), one per line.
    Range {
        /// First index.
        start: u64,
        /// Last index (inclusive).
        end: u64,
    },

    /// Keep the values strictly below a bound.
    Filter {
        /// Exclusive upper bound.
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        below: i64,
        /// Input values.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Multiply every value by a factor.
    Map {
        /// Factor applied to each value.
        #[arg(long, default_value = "2", allow_negative_numbers = true)]
        scale: i64,
        /// Input values.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Sum the values left to right.
    Reduce {
        /// Starting accumulator; without it the first value seeds the sum.
        #[arg(long, allow_negative_numbers = true)]
        initial: Option<i64>,
        /// Input values.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Generate a shell completion script.
    Completion {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Arguments of the `fib` command.
#[derive(Args, Debug)]
pub struct FibArgs {
    /// Fibonacci index to compute (non-negative integer).
    #[arg(short, long, default_value = "10", env = "FIBSEQ_N", allow_hyphen_values = true)]
    pub n: String,

    /// Strategy to use: naive, memo, iterative, or all.
    #[arg(long, default_value = "iterative")]
    pub algo: String,

    /// Show detailed information (bits and digits of the result).
    #[arg(short, long)]
    pub details: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Largest index accepted by the naive strategy (0 = default).
    #[arg(long, default_value = "0")]
    pub naive_limit: u64,

    /// Largest index accepted by the memoized strategy (0 = default, at most 5000).
    #[arg(long, default_value = "0")]
    pub recursion_limit: u64,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

impl FibArgs {
    /// Strategy options derived from the limit flags.
    pub fn options(&self) -> Result<Options, FibError> {
        let opts = Options {
            naive_limit: self.naive_limit,
            recursion_limit: self.recursion_limit,
        }
        .normalize();
        opts.validate()?;
        Ok(opts)
    }
}
