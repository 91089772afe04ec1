use finance_hub::allocation::{allocate, fixed_budget_estimate, ContributionRates};
use finance_hub::domain::{Category, ExpenseRecord, MonthKey, Planned};
use finance_hub::storage::{CsvStorage, LoadNotice, TableStore};
use tempfile::TempDir;

fn storage_with_temp_dir() -> (CsvStorage, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    let storage = CsvStorage::new(temp.path()).expect("csv storage");
    (storage, temp)
}

fn month(raw: &str) -> MonthKey {
    raw.parse().expect("valid month key")
}

fn expense(raw_month: &str, amount: f64, category: Category) -> ExpenseRecord {
    ExpenseRecord::new(month(raw_month), amount, category, Planned::No, "logged")
}

#[test]
fn fresh_store_reports_missing_tables_as_empty() {
    let (storage, _guard) = storage_with_temp_dir();
    let budget = storage.load_budget();
    let expenses = storage.load_expenses();
    assert!(budget.rows.is_empty());
    assert_eq!(budget.notice, Some(LoadNotice::Missing));
    assert!(expenses.rows.is_empty());
    assert_eq!(expenses.notice, Some(LoadNotice::Missing));
}

#[test]
fn appended_rows_survive_reload_in_order() {
    let (storage, _guard) = storage_with_temp_dir();
    let rows = vec![
        expense("01/2024", 1200.0, Category::Rent),
        expense("01/2024", 55.25, Category::DiningOut),
        expense("02/2024", 1200.0, Category::Rent),
    ];
    for row in &rows {
        storage.append_expense(row.clone()).expect("append expense");
    }
    let loaded = storage.load_expenses();
    assert_eq!(loaded.notice, None);
    assert_eq!(loaded.rows, rows);
}

#[test]
fn duplicate_months_append_without_upsert() {
    let (storage, _guard) = storage_with_temp_dir();
    let allocation = allocate(
        2000.0,
        ContributionRates::default(),
        &fixed_budget_estimate(&[]),
    );
    storage
        .append_budget(allocation.clone().into_budget_record(month("01/2024")))
        .expect("first submission");
    storage
        .append_budget(allocation.into_budget_record(month("01/2024")))
        .expect("repeated submission");

    let loaded = storage.load_budget();
    assert_eq!(loaded.rows.len(), 2);
    assert_eq!(loaded.rows[0].month, month("01/2024"));
    assert_eq!(loaded.rows[1].month, month("01/2024"));
}

#[test]
fn allocation_round_trips_through_the_budget_table() {
    let (storage, _guard) = storage_with_temp_dir();
    let history = vec![
        expense("12/2023", 600.0, Category::Rent),
        expense("12/2023", 45.0, Category::Gas),
    ];
    for row in &history {
        storage.append_expense(row.clone()).expect("append history");
    }

    let expenses = storage.load_expenses();
    let estimate = fixed_budget_estimate(&expenses.rows);
    let allocation = allocate(2000.0, ContributionRates::new(0.20, 0.15, 0.10), &estimate);
    let record = allocation.into_budget_record(month("01/2024"));
    storage.append_budget(record.clone()).expect("append budget");

    let loaded = storage.load_budget();
    assert_eq!(loaded.rows, vec![record]);
    assert!(loaded.rows[0].invariants_hold(0.01));
}
