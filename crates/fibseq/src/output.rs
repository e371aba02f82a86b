//! CLI output formatting.

use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

use num_bigint::BigUint;

/// Results longer than this many digits are elided unless verbose.
const MAX_INLINE_DIGITS: usize = 100;
/// Digits kept on each side of an elided result.
const ELIDED_EDGE: usize = 40;

/// Format a `BigUint` for display, eliding the middle of long values.
#[must_use]
pub fn format_result(value: &BigUint, verbose: bool) -> String {
    let digits = value.to_string();
    if verbose || digits.len() <= MAX_INLINE_DIGITS {
        return digits;
    }
    format!(
        "{}...{} ({} digits)",
        &digits[..ELIDED_EDGE],
        &digits[digits.len() - ELIDED_EDGE..],
        digits.len()
    )
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Format an index with thousand separators.
#[must_use]
pub fn format_index(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Join values with a separator.
#[must_use]
pub fn join_values<T: Display>(values: &[T], sep: &str) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Write result to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, value: &BigUint) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{value}")?;
    Ok(())
}
