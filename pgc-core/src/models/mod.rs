mod employee;
mod financial_record;

pub use employee::{Employee, NewEmployee};
pub use financial_record::FinancialRecord;
