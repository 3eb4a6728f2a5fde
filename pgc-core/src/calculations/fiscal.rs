//! Company-level fiscal estimates for the active period.
//!
//! Rough AGT obligation figures the dashboard shows alongside the balance
//! sheet: Imposto Industrial at 25% of a positive operating profit, and
//! IVA estimated at 14% of net revenue. These are planning estimates, not
//! filings.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::models::FinancialRecord;

/// Imposto Industrial rate applied to positive operating profit.
pub const INDUSTRIAL_TAX_RATE: Decimal = dec!(0.25);

/// Standard IVA rate applied to net revenue.
pub const IVA_RATE: Decimal = dec!(0.14);

/// Compliance posture shown next to the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FiscalStatus {
    Regularized,
    Pending,
}

impl FiscalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regularized => "Regularizado",
            Self::Pending => "Pendente",
        }
    }
}

/// Estimated AGT obligations for one period. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalEstimate {
    pub industrial_tax: Decimal,
    pub iva_estimate: Decimal,
    pub total_estimate: Decimal,
    pub status: FiscalStatus,
}

/// Estimates the period's AGT obligations.
///
/// Imposto Industrial applies only when operating profit is positive; a
/// loss-making period owes none. The status is `Regularized` when the
/// period closed with a positive net profit.
pub fn estimate_fiscal(record: &FinancialRecord) -> FiscalEstimate {
    let industrial_tax = if record.operating_profit > Decimal::ZERO {
        round_half_up(record.operating_profit * INDUSTRIAL_TAX_RATE)
    } else {
        Decimal::ZERO
    };
    let iva_estimate = round_half_up(record.net_revenue * IVA_RATE);

    let status = if record.net_profit > Decimal::ZERO {
        FiscalStatus::Regularized
    } else {
        FiscalStatus::Pending
    };

    FiscalEstimate {
        industrial_tax,
        iva_estimate,
        total_estimate: industrial_tax + iva_estimate,
        status,
    }
}
