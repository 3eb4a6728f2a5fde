//! pt-AO display formatting and decimal input parsing.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing. Whitespace is dropped, then the
/// separator convention is inferred from the rightmost `,`/`.`:
///
/// - `1.234,56` and `1 234,56` read as pt-AO (dot/space grouping, comma
///   decimals), so a displayed amount pastes back unchanged;
/// - `1,234.56` reads as English grouping;
/// - a single comma with no dot is a decimal comma (`1,5` is one and a half).
fn normalize_decimal_input(s: &str) -> String {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    match (compact.rfind(','), compact.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => compact.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => compact.replace(',', ""),
        (Some(_), None) if compact.matches(',').count() == 1 => compact.replace(',', "."),
        (Some(_), None) => compact.replace(',', ""),
        (None, _) => compact,
    }
}

/// Parses a string into a [`Decimal`].
///
/// Accepts both pt-AO (`"1 234,56"`, `"1.234,56"`) and English
/// (`"1,234.56"`) separator conventions.
/// Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Formats a monetary amount the pt-AO way: space-grouped thousands, comma
/// decimals, two decimal places, `Kz` suffix, e.g. `1 234 567,89 Kz`.
pub fn format_kz(value: Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{rounded:.2}");

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped},{frac_part} Kz")
}

/// Formats a ratio as a percentage with two decimals, e.g. `12,50%`.
pub fn format_percent(value: Decimal) -> String {
    let scaled = (value * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    format!("{scaled:.2}%").replace('.', ",")
}
