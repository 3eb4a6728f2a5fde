//! Integration tests for the JSON-file store against a real directory.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use pgc_core::{FinanceRepository, FinancialRecord, NewEmployee, RepositoryError};
use pgc_store_json::JsonStore;

fn period(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn record_for(period_str: &str, net_revenue: rust_decimal::Decimal) -> FinancialRecord {
    FinancialRecord {
        period: period(period_str),
        net_revenue,
        current_assets: dec!(1000000),
        current_liabilities: dec!(400000),
        ..Default::default()
    }
}

/// An empty store directory: documents are missing, so both collections
/// start from the sample dataset.
async fn open_fresh_store(dir: &tempfile::TempDir) -> JsonStore {
    JsonStore::open(dir.path()).await.expect("open store")
}

#[tokio::test]
async fn missing_documents_fall_back_to_sample_data() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_fresh_store(&dir).await;

    let records = store.list_records().await.unwrap();
    let employees = store.list_employees().await.unwrap();

    assert_eq!(records.len(), 4);
    assert_eq!(employees.len(), 2);
    assert_eq!(records[0].period, period("2024-03-31"));
}

#[tokio::test]
async fn record_list_round_trips_through_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let written = {
        let store = open_fresh_store(&dir).await;
        store
            .upsert_record(record_for("2025-03-31", dec!(99000000)))
            .await
            .unwrap();
        store.list_records().await.unwrap()
    };

    // A second open reads the document back from disk.
    let store = open_fresh_store(&dir).await;
    let reloaded = store.list_records().await.unwrap();

    assert_eq!(reloaded, written);
}

#[tokio::test]
async fn employee_list_round_trips_through_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let created = {
        let store = open_fresh_store(&dir).await;
        store
            .create_employee(NewEmployee {
                name: "Carlos Domingos".to_string(),
                base_salary: dec!(320000),
                allowances: dec!(50000),
                bonus: dec!(15000),
            })
            .await
            .unwrap()
    };

    let store = open_fresh_store(&dir).await;
    let employees = store.list_employees().await.unwrap();

    let found = employees.iter().find(|e| e.id == created.id).unwrap();
    assert_eq!(found, &created);
    assert_eq!(found.base_salary, dec!(320000));
}

#[tokio::test]
async fn upsert_inserts_at_chronological_position() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_fresh_store(&dir).await;

    // Between the sample Q1 (2024-03-31) and Q2 (2024-06-30).
    store
        .upsert_record(record_for("2024-05-15", dec!(1)))
        .await
        .unwrap();

    let periods: Vec<_> = store
        .list_records()
        .await
        .unwrap()
        .iter()
        .map(|r| r.period)
        .collect();

    assert_eq!(periods[0], period("2024-03-31"));
    assert_eq!(periods[1], period("2024-05-15"));
    assert_eq!(periods[2], period("2024-06-30"));
}

#[tokio::test]
async fn upsert_replaces_exactly_the_matching_period() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_fresh_store(&dir).await;

    let before = store.list_records().await.unwrap();
    let edited = record_for("2024-06-30", dec!(999999));

    store.upsert_record(edited.clone()).await.unwrap();
    let after = store.list_records().await.unwrap();

    // Same length, same order, only the matching period changed.
    assert_eq!(after.len(), before.len());
    assert_eq!(
        after.iter().map(|r| r.period).collect::<Vec<_>>(),
        before.iter().map(|r| r.period).collect::<Vec<_>>()
    );
    assert_eq!(after[1], edited);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[3], before[3]);
}

#[tokio::test]
async fn delete_removes_only_the_named_period() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_fresh_store(&dir).await;

    store.delete_record(period("2024-06-30")).await.unwrap();

    let periods: Vec<_> = store
        .list_records()
        .await
        .unwrap()
        .iter()
        .map(|r| r.period)
        .collect();

    assert_eq!(
        periods,
        vec![
            period("2024-03-31"),
            period("2024-09-30"),
            period("2024-12-31")
        ]
    );
}

#[tokio::test]
async fn delete_unknown_period_is_record_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_fresh_store(&dir).await;

    let result = store.delete_record(period("1999-01-01")).await;

    assert_eq!(
        result,
        Err(RepositoryError::RecordNotFound(period("1999-01-01")))
    );
}

#[tokio::test]
async fn get_record_finds_by_period_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_fresh_store(&dir).await;

    let record = store.get_record(period("2024-09-30")).await.unwrap();

    assert_eq!(record.net_revenue, dec!(170000000));
}

#[tokio::test]
async fn created_employees_get_unique_immutable_ids() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_fresh_store(&dir).await;

    let new = |name: &str| NewEmployee {
        name: name.to_string(),
        base_salary: dec!(100000),
        allowances: dec!(0),
        bonus: dec!(0),
    };

    let a = store.create_employee(new("A")).await.unwrap();
    let b = store.create_employee(new("B")).await.unwrap();

    assert!(a.id != b.id);
    assert!(!a.id.is_empty());
}

#[tokio::test]
async fn update_employee_keeps_id_and_changes_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_fresh_store(&dir).await;

    let mut employee = store.list_employees().await.unwrap()[0].clone();
    employee.base_salary = dec!(275000);

    store.update_employee(&employee).await.unwrap();
    let reloaded = store.list_employees().await.unwrap();

    assert_eq!(reloaded[0].id, employee.id);
    assert_eq!(reloaded[0].base_salary, dec!(275000));
}

#[tokio::test]
async fn update_unknown_employee_is_employee_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_fresh_store(&dir).await;

    let ghost = NewEmployee {
        name: "Ghost".to_string(),
        base_salary: dec!(1),
        allowances: dec!(0),
        bonus: dec!(0),
    }
    .with_id("no-such-id");

    let result = store.update_employee(&ghost).await;

    assert_eq!(
        result,
        Err(RepositoryError::EmployeeNotFound("no-such-id".to_string()))
    );
}

#[tokio::test]
async fn delete_employee_shrinks_the_roster() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_fresh_store(&dir).await;

    let before = store.list_employees().await.unwrap();
    store.delete_employee(&before[0].id).await.unwrap();

    let after = store.list_employees().await.unwrap();
    assert_eq!(after.len(), before.len() - 1);
    assert!(after.iter().all(|e| e.id != before[0].id));
}

#[tokio::test]
async fn corrupt_history_document_is_an_error_not_a_reset() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("history_v4.json"), b"{ not json").unwrap();

    let result = JsonStore::open(dir.path()).await;

    assert!(matches!(result, Err(RepositoryError::Corrupt(_))));
}

#[tokio::test]
async fn mutations_rewrite_the_document_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_fresh_store(&dir).await;

    // No file until the first mutation.
    assert!(!dir.path().join("history_v4.json").exists());

    store
        .upsert_record(record_for("2025-06-30", dec!(5)))
        .await
        .unwrap();

    let raw = std::fs::read_to_string(dir.path().join("history_v4.json")).unwrap();
    assert!(raw.contains("2025-06-30"));
}
