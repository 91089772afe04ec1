use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::{BudgetRecord, ExpenseRecord, TableSchema, BUDGET_SCHEMA, EXPENSE_SCHEMA};
use crate::errors::HubError;

use super::{LoadNotice, Result, TableLoad, TableStore};

const BUDGET_FILE: &str = "budget.csv";
const EXPENSES_FILE: &str = "expenses.csv";
const TMP_SUFFIX: &str = "tmp";

/// CSV-backed store for the budget and expense tables.
///
/// Single-writer by design: every append reloads the table, pushes the row,
/// and rewrites the whole file through a temp-file rename.
#[derive(Clone)]
pub struct CsvStorage {
    budget_path: PathBuf,
    expenses_path: PathBuf,
}

impl CsvStorage {
    pub fn new(base_dir: &Path) -> Result<Self> {
        ensure_dir(base_dir)?;
        Ok(Self {
            budget_path: base_dir.join(BUDGET_FILE),
            expenses_path: base_dir.join(EXPENSES_FILE),
        })
    }

    pub fn budget_path(&self) -> &Path {
        &self.budget_path
    }

    pub fn expenses_path(&self) -> &Path {
        &self.expenses_path
    }
}

impl TableStore for CsvStorage {
    fn load_budget(&self) -> TableLoad<BudgetRecord> {
        load_table(&self.budget_path, &BUDGET_SCHEMA)
    }

    fn load_expenses(&self) -> TableLoad<ExpenseRecord> {
        load_table(&self.expenses_path, &EXPENSE_SCHEMA)
    }

    fn append_budget(&self, row: BudgetRecord) -> Result<()> {
        append_row(&self.budget_path, &BUDGET_SCHEMA, row)
    }

    fn append_expense(&self, row: ExpenseRecord) -> Result<()> {
        append_row(&self.expenses_path, &EXPENSE_SCHEMA, row)
    }
}

fn load_table<T: DeserializeOwned>(path: &Path, schema: &TableSchema) -> TableLoad<T> {
    if !path.exists() {
        return TableLoad::empty(LoadNotice::Missing);
    }
    match read_rows(path, schema) {
        Ok(rows) => TableLoad::loaded(rows),
        Err(err) => {
            tracing::warn!(
                table = schema.name,
                path = %path.display(),
                "failed to read table: {err}"
            );
            TableLoad::empty(LoadNotice::Malformed(err.to_string()))
        }
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path, schema: &TableSchema) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    if !schema.matches_header(headers.iter()) {
        return Err(HubError::Storage(format!(
            "`{}` header does not match the {} table schema v{}",
            path.display(),
            schema.name,
            schema.version,
        )));
    }
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

fn append_row<T>(path: &Path, schema: &TableSchema, row: T) -> Result<()>
where
    T: Serialize + DeserializeOwned,
{
    let current = load_table::<T>(path, schema);
    if let Some(LoadNotice::Malformed(reason)) = current.notice {
        // Rewriting over a file we could not parse would silently discard
        // whatever it held.
        return Err(HubError::Storage(format!(
            "refusing to rewrite unreadable {} table: {reason}",
            schema.name
        )));
    }
    let mut rows = current.rows;
    rows.push(row);
    write_table(path, schema, &rows)?;
    tracing::info!(table = schema.name, rows = rows.len(), "table persisted");
    Ok(())
}

fn write_table<T: Serialize>(path: &Path, schema: &TableSchema, rows: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    // Header row is written from the schema, not inferred from field names,
    // so the declared column order is preserved exactly.
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(&tmp)?;
    writer.write_record(schema.columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    drop(writer);
    fs::rename(&tmp, path)?;
    Ok(())
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, MonthKey, Planned};
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (CsvStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = CsvStorage::new(temp.path()).expect("csv storage");
        (storage, temp)
    }

    fn month(raw: &str) -> MonthKey {
        raw.parse().expect("valid month key")
    }

    fn sample_expense(raw_month: &str, amount: f64, category: Category) -> ExpenseRecord {
        ExpenseRecord::new(month(raw_month), amount, category, Planned::Yes, "test row")
    }

    #[test]
    fn missing_file_yields_empty_table_with_notice() {
        let (storage, _guard) = storage_with_temp_dir();
        let load = storage.load_expenses();
        assert!(load.rows.is_empty());
        assert_eq!(load.notice, Some(LoadNotice::Missing));
    }

    #[test]
    fn append_then_reload_preserves_order() {
        let (storage, _guard) = storage_with_temp_dir();
        let first = sample_expense("01/2024", 1200.0, Category::Rent);
        let second = sample_expense("01/2024", 84.5, Category::Groceries);
        storage.append_expense(first.clone()).expect("append first");
        storage.append_expense(second.clone()).expect("append second");

        let load = storage.load_expenses();
        assert_eq!(load.notice, None);
        assert_eq!(load.rows, vec![first, second]);
    }

    #[test]
    fn budget_rows_round_trip() {
        let (storage, _guard) = storage_with_temp_dir();
        let row = BudgetRecord {
            month: month("02/2024"),
            paycheck: 2000.0,
            saving1: 400.0,
            saving2: 300.0,
            saving3: 200.0,
            total_saved: 900.0,
            fixed_expenses: 600.0,
            misc_budget: 500.0,
        };
        storage.append_budget(row.clone()).expect("append budget");
        let load = storage.load_budget();
        assert_eq!(load.rows, vec![row]);
    }

    #[test]
    fn unparsable_file_degrades_to_empty_with_malformed_notice() {
        let (storage, _guard) = storage_with_temp_dir();
        fs::write(storage.expenses_path(), "not,a,known,header\n1,2,3,4\n").expect("write junk");
        let load = storage.load_expenses();
        assert!(load.rows.is_empty());
        assert!(matches!(load.notice, Some(LoadNotice::Malformed(_))));
    }

    #[test]
    fn reordered_header_is_rejected() {
        let (storage, _guard) = storage_with_temp_dir();
        fs::write(
            storage.expenses_path(),
            "Amount,Month,Category,Planned_Unplanned,Description\n",
        )
        .expect("write header");
        let load = storage.load_expenses();
        assert!(matches!(load.notice, Some(LoadNotice::Malformed(_))));
    }

    #[test]
    fn append_refuses_to_overwrite_unreadable_table() {
        let (storage, _guard) = storage_with_temp_dir();
        fs::write(storage.expenses_path(), "garbage").expect("write junk");
        let err = storage
            .append_expense(sample_expense("03/2024", 10.0, Category::Other))
            .expect_err("append must refuse");
        assert!(matches!(err, HubError::Storage(_)));
    }

    #[test]
    fn unset_planned_flag_round_trips_as_empty_field() {
        let (storage, _guard) = storage_with_temp_dir();
        let row = ExpenseRecord::new(
            month("04/2024"),
            12.0,
            Category::Hobbies,
            Planned::Unset,
            "",
        );
        storage.append_expense(row.clone()).expect("append");
        let load = storage.load_expenses();
        assert_eq!(load.rows, vec![row]);
    }
}
