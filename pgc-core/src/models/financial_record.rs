use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One reporting period's balance-sheet and income figures under the PGC
/// (Plano Geral de Contabilidade angolano). Records are keyed by `period`,
/// unique per period, and kept in chronological order in the stored history.
///
/// Every monetary field defaults to zero when absent from the stored
/// document, so partially-filled periods deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialRecord {
    /// Closing date of the reporting period. Acts as the record key.
    pub period: NaiveDate,

    // Balance sheet
    pub current_assets: Decimal,
    pub non_current_assets: Decimal,
    pub inventory: Decimal,
    /// Cash and cash equivalents (disponibilidades).
    pub cash_equivalents: Decimal,
    pub current_liabilities: Decimal,
    pub non_current_liabilities: Decimal,
    pub equity: Decimal,

    // Income statement
    pub net_revenue: Decimal,
    pub gross_profit: Decimal,
    pub operating_profit: Decimal,
    pub net_profit: Decimal,
    pub sales: Decimal,
    pub costs: Decimal,

    // Revenue by channel. The entry path derives `net_revenue` as the sum
    // of these five; stored records are trusted as-is on read.
    pub revenue_services: Decimal,
    pub revenue_transport: Decimal,
    pub revenue_tuition: Decimal,
    pub revenue_exam_sheets: Decimal,
    pub revenue_uniforms: Decimal,
}

impl Default for FinancialRecord {
    fn default() -> Self {
        Self {
            period: NaiveDate::default(),
            current_assets: Decimal::ZERO,
            non_current_assets: Decimal::ZERO,
            inventory: Decimal::ZERO,
            cash_equivalents: Decimal::ZERO,
            current_liabilities: Decimal::ZERO,
            non_current_liabilities: Decimal::ZERO,
            equity: Decimal::ZERO,
            net_revenue: Decimal::ZERO,
            gross_profit: Decimal::ZERO,
            operating_profit: Decimal::ZERO,
            net_profit: Decimal::ZERO,
            sales: Decimal::ZERO,
            costs: Decimal::ZERO,
            revenue_services: Decimal::ZERO,
            revenue_transport: Decimal::ZERO,
            revenue_tuition: Decimal::ZERO,
            revenue_exam_sheets: Decimal::ZERO,
            revenue_uniforms: Decimal::ZERO,
        }
    }
}

impl FinancialRecord {
    /// Total assets: current plus non-current.
    pub fn total_assets(&self) -> Decimal {
        self.current_assets + self.non_current_assets
    }

    /// Sum of the five revenue channels. The entry path sets `net_revenue`
    /// to this value so the breakdown always reconciles with the total.
    pub fn channel_revenue_total(&self) -> Decimal {
        self.revenue_services
            + self.revenue_transport
            + self.revenue_tuition
            + self.revenue_exam_sheets
            + self.revenue_uniforms
    }
}
