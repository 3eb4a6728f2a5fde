//! Reference thresholds the dashboard compares key indicators against.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pgc_core::calculations::Indicators;

pub const CURRENT_LIQUIDITY_TARGET: Decimal = dec!(1.5);
pub const NET_MARGIN_TARGET: Decimal = dec!(0.1);
pub const ROE_TARGET: Decimal = dec!(0.15);
/// Leverage is the one indicator where lower is better.
pub const TOTAL_LEVERAGE_CEILING: Decimal = dec!(0.5);

/// How an indicator compares against its benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assessment {
    OnTarget,
    BelowTarget,
}

impl Assessment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnTarget => "ok",
            Self::BelowTarget => "atenção",
        }
    }

    fn meets(condition: bool) -> Self {
        if condition {
            Self::OnTarget
        } else {
            Self::BelowTarget
        }
    }
}

/// Benchmark verdicts for the four tracked indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkReport {
    pub current_liquidity: Assessment,
    pub net_margin: Assessment,
    pub return_on_equity: Assessment,
    pub total_leverage: Assessment,
}

pub fn assess(indicators: &Indicators) -> BenchmarkReport {
    BenchmarkReport {
        current_liquidity: Assessment::meets(
            indicators.current_liquidity >= CURRENT_LIQUIDITY_TARGET,
        ),
        net_margin: Assessment::meets(indicators.net_margin >= NET_MARGIN_TARGET),
        return_on_equity: Assessment::meets(indicators.return_on_equity >= ROE_TARGET),
        total_leverage: Assessment::meets(indicators.total_leverage <= TOTAL_LEVERAGE_CEILING),
    }
}
