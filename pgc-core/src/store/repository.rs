use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Employee, FinancialRecord, NewEmployee};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("no record for period {0}")]
    RecordNotFound(NaiveDate),

    #[error("no employee with id '{0}'")]
    EmployeeNotFound(String),

    #[error("storage I/O error: {0}")]
    Io(String),

    /// A stored document exists but does not parse. Surfaced as-is; there
    /// is no fallback-to-default for corrupt data, only for a missing file.
    #[error("corrupt stored data: {0}")]
    Corrupt(String),
}

/// Owns the two persisted collections, the chronological period history
/// and the employee roster, and every mutation of them.
///
/// Implementations read both collections once at open and rewrite the
/// affected document in full on every mutation.
#[async_trait]
pub trait FinanceRepository: Send + Sync {
    // Financial records
    async fn list_records(&self) -> Result<Vec<FinancialRecord>, RepositoryError>;

    async fn get_record(&self, period: NaiveDate) -> Result<FinancialRecord, RepositoryError>;

    /// Replaces the record with the matching period in place, or inserts a
    /// new one at its chronological position. Other records are neither
    /// reordered nor duplicated.
    async fn upsert_record(&self, record: FinancialRecord) -> Result<(), RepositoryError>;

    async fn delete_record(&self, period: NaiveDate) -> Result<(), RepositoryError>;

    // Employees
    async fn list_employees(&self) -> Result<Vec<Employee>, RepositoryError>;

    /// Assigns a fresh id and appends the employee to the roster.
    async fn create_employee(&self, new: NewEmployee) -> Result<Employee, RepositoryError>;

    async fn update_employee(&self, employee: &Employee) -> Result<(), RepositoryError>;

    async fn delete_employee(&self, id: &str) -> Result<(), RepositoryError>;
}
