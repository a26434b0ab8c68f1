//! Parsing of amounts typed by the user.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes an amount for parsing: trims whitespace, removes thousands
/// separators and a leading `$` or trailing `%`.
fn normalize_amount(s: &str) -> String {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed);
    trimmed.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles `"1,234.56"`, `"$19.99"` and `"25%"`.
/// Empty or whitespace-only input is treated as 0.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses a string into a [`Decimal`], falling back to zero.
///
/// This is how numeric form fields behave: anything unparseable reads as 0
/// and a warning is logged.
pub fn parse_amount_or_zero(s: &str) -> Decimal {
    let normalized = normalize_amount(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        tracing::warn!(input = %s, "unparseable amount treated as zero: {}", e);
        Decimal::ZERO
    })
}
