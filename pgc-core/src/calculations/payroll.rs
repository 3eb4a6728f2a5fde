//! Angolan payroll calculations: INSS contributions and progressive IRT.
//!
//! Implements the statutory 2024 rules the dashboard applies per employee:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1 | Taxable base = base salary + bonus (allowances are exempt) |
//! | 2 | INSS: 3% worker withholding, 8% employer contribution |
//! | 3 | IRT base = taxable base − worker INSS |
//! | 4 | IRT from the progressive bracket table below |
//! | 5 | Gross salary = base salary + allowances + bonus |
//! | 6 | Net salary = gross − worker INSS − IRT |
//! | 7 | Total employer cost = gross + employer INSS |
//!
//! # IRT bracket table (Kz)
//!
//! | IRT base | Tax |
//! |----------|-----|
//! | ≤ 100 000 | 0 |
//! | ≤ 150 000 | (base − 100 000) × 10% |
//! | ≤ 200 000 | 5 000 + (base − 150 000) × 12.5% |
//! | ≤ 300 000 | 11 250 + (base − 200 000) × 15% |
//! | ≤ 500 000 | 26 250 + (base − 300 000) × 19% |
//! | > 500 000 | 64 250 + (base − 500 000) × 25% |
//!
//! Brackets are strictly marginal: only the excess above each threshold is
//! taxed at that bracket's rate, and the cumulative-floor constants make the
//! schedule continuous at every seam.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pgc_core::{Employee, calculations::calculate_payroll};
//!
//! let employee = Employee {
//!     id: "1".to_string(),
//!     name: "João Manuel".to_string(),
//!     base_salary: dec!(250000),
//!     allowances: dec!(45000),
//!     bonus: dec!(10000),
//! };
//!
//! let result = calculate_payroll(&employee);
//!
//! assert_eq!(result.irt, dec!(19080.00));
//! assert_eq!(result.net_salary, dec!(278120.00));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::models::Employee;

/// Worker share of the INSS contribution.
pub const INSS_WORKER_RATE: Decimal = dec!(0.03);

/// Employer share of the INSS contribution.
pub const INSS_EMPLOYER_RATE: Decimal = dec!(0.08);

/// One row of the progressive IRT schedule.
///
/// `max_income` is `None` for the open-ended top bracket. The applicable
/// bracket is the first whose upper bound covers the IRT base; the tax is
/// `base_tax + (irt_base − min_income) × rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrtBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
    pub base_tax: Decimal,
}

/// Simplified Angolan IRT schedule (exemption up to 100 000 Kz).
pub static IRT_TABLE: [IrtBracket; 6] = [
    IrtBracket {
        min_income: dec!(0),
        max_income: Some(dec!(100000)),
        rate: dec!(0),
        base_tax: dec!(0),
    },
    IrtBracket {
        min_income: dec!(100000),
        max_income: Some(dec!(150000)),
        rate: dec!(0.10),
        base_tax: dec!(0),
    },
    IrtBracket {
        min_income: dec!(150000),
        max_income: Some(dec!(200000)),
        rate: dec!(0.125),
        base_tax: dec!(5000),
    },
    IrtBracket {
        min_income: dec!(200000),
        max_income: Some(dec!(300000)),
        rate: dec!(0.15),
        base_tax: dec!(11250),
    },
    IrtBracket {
        min_income: dec!(300000),
        max_income: Some(dec!(500000)),
        rate: dec!(0.19),
        base_tax: dec!(26250),
    },
    IrtBracket {
        min_income: dec!(500000),
        max_income: None,
        rate: dec!(0.25),
        base_tax: dec!(64250),
    },
];

/// Per-employee payroll outcome. Never persisted; recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    pub employee_id: String,
    pub gross_salary: Decimal,
    pub inss_worker: Decimal,
    pub irt: Decimal,
    pub net_salary: Decimal,
    pub inss_employer: Decimal,
    pub total_cost: Decimal,
}

/// IRT owed for a given IRT base, from the progressive schedule.
///
/// Total over any input: bases at or below the exemption threshold
/// (including negative ones) fall in the zero-rate bracket.
pub fn irt_for_base(irt_base: Decimal) -> Decimal {
    let bracket = IRT_TABLE
        .iter()
        .find(|b| match b.max_income {
            Some(max) => irt_base <= max,
            None => true,
        })
        .unwrap_or(&IRT_TABLE[IRT_TABLE.len() - 1]);

    if irt_base <= bracket.min_income {
        return Decimal::ZERO;
    }

    round_half_up(bracket.base_tax + (irt_base - bracket.min_income) * bracket.rate)
}

/// Computes the full payroll breakdown for one employee.
///
/// Deterministic and total: no error conditions. Negative or zero base
/// salaries are not validated here; whatever the caller supplies flows
/// through the same arithmetic.
///
/// Monetary components (INSS shares, IRT, gross) are rounded half-up to
/// two decimal places; net salary and total cost are derived from the
/// rounded components, so the identities
/// `net = gross − inss_worker − irt` and `total_cost = gross + inss_employer`
/// hold exactly.
pub fn calculate_payroll(employee: &Employee) -> PayrollResult {
    // Allowances are tax-exempt and excluded from the contributory base.
    let taxable_base = employee.base_salary + employee.bonus;
    if taxable_base < Decimal::ZERO {
        warn!(
            employee_id = %employee.id,
            taxable_base = %taxable_base,
            "negative taxable base; contributions flow through unvalidated"
        );
    }

    let inss_worker = round_half_up(taxable_base * INSS_WORKER_RATE);
    let inss_employer = round_half_up(taxable_base * INSS_EMPLOYER_RATE);

    let irt_base = taxable_base - inss_worker;
    let irt = irt_for_base(irt_base);

    let gross_salary = round_half_up(employee.base_salary + employee.allowances + employee.bonus);
    let net_salary = gross_salary - inss_worker - irt;
    let total_cost = gross_salary + inss_employer;

    PayrollResult {
        employee_id: employee.id.clone(),
        gross_salary,
        inss_worker,
        irt,
        net_salary,
        inss_employer,
        total_cost,
    }
}
