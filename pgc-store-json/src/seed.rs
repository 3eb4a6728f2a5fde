//! Built-in sample dataset used when a stored document does not exist yet.
//!
//! Four 2024 quarters for a small private school (revenue channels:
//! services, transport, tuition, exam sheets, uniforms) and two sample
//! employees. Applies only to the missing-file case; an existing but
//! unreadable document is an error, never silently replaced.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pgc_core::{Employee, FinancialRecord};

// Evaluated at compile time, so a bad literal is a build error rather
// than a runtime panic.
const fn period(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid sample period"),
    }
}

const Q1_2024: NaiveDate = period(2024, 3, 31);
const Q2_2024: NaiveDate = period(2024, 6, 30);
const Q3_2024: NaiveDate = period(2024, 9, 30);
const Q4_2024: NaiveDate = period(2024, 12, 31);

fn quarter(
    period: NaiveDate,
    balance: [Decimal; 7],
    income: [Decimal; 4],
    channels: [Decimal; 5],
) -> FinancialRecord {
    let [current_assets, inventory, cash_equivalents, current_liabilities, non_current_assets, non_current_liabilities, equity] =
        balance;
    let [net_revenue, net_profit, gross_profit, operating_profit] = income;
    let [revenue_services, revenue_transport, revenue_tuition, revenue_exam_sheets, revenue_uniforms] =
        channels;

    FinancialRecord {
        period,
        current_assets,
        non_current_assets,
        inventory,
        cash_equivalents,
        current_liabilities,
        non_current_liabilities,
        equity,
        net_revenue,
        gross_profit,
        operating_profit,
        net_profit,
        revenue_services,
        revenue_transport,
        revenue_tuition,
        revenue_exam_sheets,
        revenue_uniforms,
        ..Default::default()
    }
}

/// The demo period history, ordered chronologically.
pub fn sample_history() -> Vec<FinancialRecord> {
    vec![
        quarter(
            Q1_2024,
            [
                dec!(50000000),
                dec!(15000000),
                dec!(8000000),
                dec!(32000000),
                dec!(80000000),
                dec!(40000000),
                dec!(58000000),
            ],
            [dec!(120000000), dec!(12000000), dec!(40000000), dec!(20000000)],
            [
                dec!(40000000),
                dec!(20000000),
                dec!(45000000),
                dec!(5000000),
                dec!(10000000),
            ],
        ),
        quarter(
            Q2_2024,
            [
                dec!(55000000),
                dec!(16000000),
                dec!(12000000),
                dec!(31000000),
                dec!(81000000),
                dec!(38000000),
                dec!(67000000),
            ],
            [dec!(145000000), dec!(16000000), dec!(48000000), dec!(25000000)],
            [
                dec!(45000000),
                dec!(22000000),
                dec!(60000000),
                dec!(6000000),
                dec!(12000000),
            ],
        ),
        quarter(
            Q3_2024,
            [
                dec!(62000000),
                dec!(14000000),
                dec!(18000000),
                dec!(30000000),
                dec!(82000000),
                dec!(35000000),
                dec!(79000000),
            ],
            [dec!(170000000), dec!(22000000), dec!(55000000), dec!(32000000)],
            [
                dec!(50000000),
                dec!(25000000),
                dec!(75000000),
                dec!(8000000),
                dec!(12000000),
            ],
        ),
        quarter(
            Q4_2024,
            [
                dec!(70000000),
                dec!(18000000),
                dec!(25000000),
                dec!(35000000),
                dec!(85000000),
                dec!(32000000),
                dec!(88000000),
            ],
            [dec!(210000000), dec!(28000000), dec!(70000000), dec!(40000000)],
            [
                dec!(60000000),
                dec!(30000000),
                dec!(90000000),
                dec!(10000000),
                dec!(20000000),
            ],
        ),
    ]
}

/// The demo employee roster.
pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "1".to_string(),
            name: "João Manuel".to_string(),
            base_salary: dec!(250000),
            allowances: dec!(45000),
            bonus: dec!(10000),
        },
        Employee {
            id: "2".to_string(),
            name: "Maria Antónia".to_string(),
            base_salary: dec!(180000),
            allowances: dec!(30000),
            bonus: dec!(5000),
        },
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sample_history_is_chronological() {
        let history = sample_history();

        assert_eq!(history.len(), 4);
        assert!(history.windows(2).all(|w| w[0].period < w[1].period));
    }

    #[test]
    fn sample_periods_are_the_2024_quarter_ends() {
        let periods: Vec<_> = sample_history().iter().map(|r| r.period).collect();

        let expected: Vec<NaiveDate> = ["2024-03-31", "2024-06-30", "2024-09-30", "2024-12-31"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(periods, expected);
    }

    #[test]
    fn sample_revenue_channels_reconcile_with_net_revenue() {
        for record in sample_history() {
            assert_eq!(
                record.channel_revenue_total(),
                record.net_revenue,
                "period {}",
                record.period
            );
        }
    }
}
