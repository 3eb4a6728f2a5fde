//! Deterministic financial calculations over a single period or employee.
//!
//! All functions here are total: they never fail and never panic on
//! well-typed input. Degenerate inputs (zero denominators, negative
//! salaries) produce degenerate but defined numbers, as the dashboard's
//! entry forms are the only validation layer.

pub mod common;
pub mod fiscal;
pub mod indicators;
pub mod payroll;

pub use fiscal::{FiscalEstimate, FiscalStatus, estimate_fiscal};
pub use indicators::{Indicators, calculate_indicators};
pub use payroll::{IrtBracket, PayrollResult, calculate_payroll, irt_for_base};
