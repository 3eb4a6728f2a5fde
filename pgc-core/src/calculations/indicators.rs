//! Financial ratio calculations over a single reporting period.
//!
//! Computes the ten indicators the dashboard tracks from one
//! [`FinancialRecord`]:
//!
//! | Indicator | Formula |
//! |-----------|---------|
//! | Current liquidity | current assets / current liabilities |
//! | Quick liquidity | (current assets − inventory) / current liabilities |
//! | Immediate liquidity | cash equivalents / current liabilities |
//! | Total leverage | (current + non-current liabilities) / total assets |
//! | Gross margin | gross profit / net revenue |
//! | Operating margin | operating profit / net revenue |
//! | Net margin | net profit / net revenue |
//! | Return on investment | net profit / total assets |
//! | Return on equity | net profit / equity |
//! | Asset turnover | net revenue / total assets |
//!
//! Total assets = current + non-current assets, computed once and reused.
//! Every denominator is run through [`or_one`], so the function is total:
//! a zero denominator yields the bare numerator rather than a panic or an
//! undefined value.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pgc_core::FinancialRecord;
//! use pgc_core::calculations::calculate_indicators;
//!
//! let record = FinancialRecord {
//!     current_assets: dec!(50000000),
//!     inventory: dec!(15000000),
//!     current_liabilities: dec!(32000000),
//!     ..Default::default()
//! };
//!
//! let indicators = calculate_indicators(&record);
//!
//! assert_eq!(indicators.current_liquidity, dec!(1.5625));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::or_one;
use crate::models::FinancialRecord;

/// The ten derived ratios for one period. Never persisted; recomputed on
/// every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicators {
    pub current_liquidity: Decimal,
    pub quick_liquidity: Decimal,
    pub immediate_liquidity: Decimal,
    pub total_leverage: Decimal,
    pub gross_margin: Decimal,
    pub operating_margin: Decimal,
    pub net_margin: Decimal,
    pub return_on_investment: Decimal,
    pub return_on_equity: Decimal,
    pub asset_turnover: Decimal,
}

/// Derives all ten indicators from one period's figures.
///
/// Total over any well-typed record; zero denominators are substituted
/// with 1 (see [`or_one`]).
pub fn calculate_indicators(record: &FinancialRecord) -> Indicators {
    let total_assets = record.total_assets();

    let liabilities = or_one(record.current_liabilities);
    let revenue = or_one(record.net_revenue);
    let assets = or_one(total_assets);

    Indicators {
        current_liquidity: record.current_assets / liabilities,
        quick_liquidity: (record.current_assets - record.inventory) / liabilities,
        immediate_liquidity: record.cash_equivalents / liabilities,
        total_leverage: (record.current_liabilities + record.non_current_liabilities) / assets,
        gross_margin: record.gross_profit / revenue,
        operating_margin: record.operating_profit / revenue,
        net_margin: record.net_profit / revenue,
        return_on_investment: record.net_profit / assets,
        return_on_equity: record.net_profit / or_one(record.equity),
        asset_turnover: record.net_revenue / assets,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    /// The 2024-Q1 sample period from the dashboard's demo dataset.
    fn sample_record() -> FinancialRecord {
        FinancialRecord {
            period: "2024-03-31".parse().unwrap(),
            current_assets: dec!(50000000),
            non_current_assets: dec!(80000000),
            inventory: dec!(15000000),
            cash_equivalents: dec!(8000000),
            current_liabilities: dec!(32000000),
            non_current_liabilities: dec!(40000000),
            equity: dec!(58000000),
            net_revenue: dec!(120000000),
            gross_profit: dec!(40000000),
            operating_profit: dec!(20000000),
            net_profit: dec!(12000000),
            ..Default::default()
        }
    }

    #[test]
    fn current_liquidity_is_exact_division() {
        let indicators = calculate_indicators(&sample_record());

        assert_eq!(indicators.current_liquidity, dec!(50000000) / dec!(32000000));
    }

    #[test]
    fn quick_liquidity_excludes_inventory() {
        let indicators = calculate_indicators(&sample_record());

        assert_eq!(indicators.quick_liquidity, dec!(35000000) / dec!(32000000));
    }

    #[test]
    fn immediate_liquidity_uses_cash_only() {
        let indicators = calculate_indicators(&sample_record());

        assert_eq!(indicators.immediate_liquidity, dec!(0.25));
    }

    #[test]
    fn leverage_divides_total_liabilities_by_total_assets() {
        let indicators = calculate_indicators(&sample_record());

        // (32M + 40M) / 130M
        assert_eq!(indicators.total_leverage, dec!(72000000) / dec!(130000000));
    }

    #[test]
    fn margins_divide_profits_by_net_revenue() {
        let indicators = calculate_indicators(&sample_record());

        assert_eq!(indicators.gross_margin, dec!(40000000) / dec!(120000000));
        assert_eq!(indicators.operating_margin, dec!(20000000) / dec!(120000000));
        assert_eq!(indicators.net_margin, dec!(0.1));
    }

    #[test]
    fn returns_divide_net_profit_by_assets_and_equity() {
        let indicators = calculate_indicators(&sample_record());

        assert_eq!(indicators.return_on_investment, dec!(12000000) / dec!(130000000));
        assert_eq!(indicators.return_on_equity, dec!(12000000) / dec!(58000000));
    }

    #[test]
    fn asset_turnover_divides_revenue_by_total_assets() {
        let indicators = calculate_indicators(&sample_record());

        assert_eq!(indicators.asset_turnover, dec!(120000000) / dec!(130000000));
    }

    #[test]
    fn zero_current_liabilities_substitutes_denominator_one() {
        let record = FinancialRecord {
            current_assets: dec!(50000000),
            inventory: dec!(15000000),
            cash_equivalents: dec!(8000000),
            current_liabilities: Decimal::ZERO,
            ..Default::default()
        };

        let indicators = calculate_indicators(&record);

        // Every liquidity ratio degenerates to its bare numerator.
        assert_eq!(indicators.current_liquidity, dec!(50000000));
        assert_eq!(indicators.quick_liquidity, dec!(35000000));
        assert_eq!(indicators.immediate_liquidity, dec!(8000000));
    }

    #[test]
    fn all_zero_record_yields_all_zero_indicators() {
        let indicators = calculate_indicators(&FinancialRecord::default());

        assert_eq!(indicators.current_liquidity, Decimal::ZERO);
        assert_eq!(indicators.total_leverage, Decimal::ZERO);
        assert_eq!(indicators.net_margin, Decimal::ZERO);
        assert_eq!(indicators.return_on_equity, Decimal::ZERO);
        assert_eq!(indicators.asset_turnover, Decimal::ZERO);
    }

    #[test]
    fn zero_equity_degenerates_roe_to_net_profit() {
        let record = FinancialRecord {
            net_profit: dec!(12000000),
            equity: Decimal::ZERO,
            ..Default::default()
        };

        let indicators = calculate_indicators(&record);

        assert_eq!(indicators.return_on_equity, dec!(12000000));
    }
}
