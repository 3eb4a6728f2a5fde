//! Shared helpers for the financial calculations.

use rust_decimal::Decimal;
use tracing::warn;

/// Rounds a decimal value to exactly two decimal places using half-up
/// rounding (midpoint away from zero), the standard convention for
/// monetary amounts.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pgc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Substitutes 1 for a zero denominator.
///
/// Ratio formulas use this so a period with, say, no current liabilities
/// still yields a defined number instead of a division panic. The result
/// is the bare numerator, defined but not meaningful. A known
/// approximation, not a real zero-handling policy.
pub fn or_one(denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        warn!("zero denominator substituted with 1; the ratio is the bare numerator");
        Decimal::ONE
    } else {
        denominator
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    /// Initializes tracing subscriber for tests that exercise the warn path.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(7812.344)), dec!(7812.34));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(7812.345)), dec!(7812.35));
    }

    #[test]
    fn round_half_up_rounds_away_from_zero_for_negatives() {
        assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(250000.00)), dec!(250000.00));
    }

    // =========================================================================
    // or_one tests
    // =========================================================================

    #[test]
    fn or_one_passes_through_nonzero() {
        assert_eq!(or_one(dec!(32000000)), dec!(32000000));
    }

    #[test]
    fn or_one_substitutes_one_for_zero() {
        let _guard = init_test_tracing();

        assert_eq!(or_one(Decimal::ZERO), Decimal::ONE);
    }

    #[test]
    fn or_one_passes_through_negatives() {
        // Only an exact zero is substituted; negative denominators flow.
        assert_eq!(or_one(dec!(-5)), dec!(-5));
    }
}
