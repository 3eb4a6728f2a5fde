//! JSON-file-backed implementation of [`FinanceRepository`].
//!
//! Two independent documents live in the store directory:
//!
//! | File | Contents |
//! |------|----------|
//! | `history_v4.json` | chronological list of [`FinancialRecord`] |
//! | `employees_v4.json` | employee roster |
//!
//! The `_v4` suffix carries the schema version: a breaking schema change
//! means a new file name, with no migration path from the old one. Each
//! document is read once at [`JsonStore::open`] and rewritten in full on
//! every mutation. A missing file (and only that case) falls back to the
//! built-in sample dataset; a file that exists but fails to parse is a
//! [`RepositoryError::Corrupt`].

pub mod seed;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use pgc_core::{Employee, FinanceRepository, FinancialRecord, NewEmployee, RepositoryError};

const HISTORY_FILE: &str = "history_v4.json";
const EMPLOYEES_FILE: &str = "employees_v4.json";

pub struct JsonStore {
    dir: PathBuf,
    records: RwLock<Vec<FinancialRecord>>,
    employees: RwLock<Vec<Employee>>,
}

impl JsonStore {
    /// Opens the store rooted at `dir`, creating the directory if needed
    /// and loading both documents into memory.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| RepositoryError::Io(e.to_string()))?;

        let records =
            read_document(&dir.join(HISTORY_FILE), seed::sample_history).await?;
        let employees =
            read_document(&dir.join(EMPLOYEES_FILE), seed::sample_employees).await?;

        info!(
            dir = %dir.display(),
            records = records.len(),
            employees = employees.len(),
            "opened store"
        );

        Ok(Self {
            dir,
            records: RwLock::new(records),
            employees: RwLock::new(employees),
        })
    }

    async fn persist_records(&self, records: &[FinancialRecord]) -> Result<(), RepositoryError> {
        write_document(&self.dir.join(HISTORY_FILE), records).await
    }

    async fn persist_employees(&self, employees: &[Employee]) -> Result<(), RepositoryError> {
        write_document(&self.dir.join(EMPLOYEES_FILE), employees).await
    }
}

/// Reads one stored document, substituting the seed data when the file
/// does not exist yet.
async fn read_document<T: DeserializeOwned>(
    path: &Path,
    default: fn() -> Vec<T>,
) -> Result<Vec<T>, RepositoryError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
            RepositoryError::Corrupt(format!("{}: {}", path.display(), e))
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "document missing, using sample data");
            Ok(default())
        }
        Err(e) => Err(RepositoryError::Io(format!("{}: {}", path.display(), e))),
    }
}

/// Rewrites one stored document in full.
async fn write_document<T: Serialize>(path: &Path, values: &[T]) -> Result<(), RepositoryError> {
    let bytes = serde_json::to_vec_pretty(values)
        .map_err(|e| RepositoryError::Io(e.to_string()))?;
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| RepositoryError::Io(format!("{}: {}", path.display(), e)))?;
    debug!(path = %path.display(), "document rewritten");
    Ok(())
}

#[async_trait]
impl FinanceRepository for JsonStore {
    async fn list_records(&self) -> Result<Vec<FinancialRecord>, RepositoryError> {
        Ok(self.records.read().await.clone())
    }

    async fn get_record(&self, period: NaiveDate) -> Result<FinancialRecord, RepositoryError> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.period == period)
            .cloned()
            .ok_or(RepositoryError::RecordNotFound(period))
    }

    async fn upsert_record(&self, record: FinancialRecord) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;

        if let Some(existing) = records.iter_mut().find(|r| r.period == record.period) {
            *existing = record;
        } else {
            // Insert at the chronological position so the history stays
            // ordered without re-sorting the other entries.
            let index = records
                .iter()
                .position(|r| r.period > record.period)
                .unwrap_or(records.len());
            records.insert(index, record);
        }

        self.persist_records(&records).await
    }

    async fn delete_record(&self, period: NaiveDate) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;

        let index = records
            .iter()
            .position(|r| r.period == period)
            .ok_or(RepositoryError::RecordNotFound(period))?;
        records.remove(index);

        self.persist_records(&records).await
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.employees.read().await.clone())
    }

    async fn create_employee(&self, new: NewEmployee) -> Result<Employee, RepositoryError> {
        let employee = new.with_id(Uuid::new_v4().to_string());

        let mut employees = self.employees.write().await;
        employees.push(employee.clone());
        self.persist_employees(&employees).await?;

        Ok(employee)
    }

    async fn update_employee(&self, employee: &Employee) -> Result<(), RepositoryError> {
        let mut employees = self.employees.write().await;

        let existing = employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or_else(|| RepositoryError::EmployeeNotFound(employee.id.clone()))?;
        *existing = employee.clone();

        self.persist_employees(&employees).await
    }

    async fn delete_employee(&self, id: &str) -> Result<(), RepositoryError> {
        let mut employees = self.employees.write().await;

        let index = employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| RepositoryError::EmployeeNotFound(id.to_string()))?;
        employees.remove(index);

        self.persist_employees(&employees).await
    }
}
