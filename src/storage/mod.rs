pub mod csv_backend;

use crate::domain::{BudgetRecord, ExpenseRecord};
use crate::errors::HubError;

pub type Result<T> = std::result::Result<T, HubError>;

/// Why a load produced an empty table instead of file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadNotice {
    /// No backing file exists yet; an empty table with the canonical schema
    /// stands in. Expected on first run, not an error.
    Missing,
    /// File present but unreadable or not matching the declared schema.
    /// Surfaced as a display-level message, never fatal.
    Malformed(String),
}

/// Result of loading a table: all rows plus an optional notice for the
/// presentation boundary to render.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLoad<T> {
    pub rows: Vec<T>,
    pub notice: Option<LoadNotice>,
}

impl<T> TableLoad<T> {
    pub fn loaded(rows: Vec<T>) -> Self {
        Self { rows, notice: None }
    }

    pub fn empty(notice: LoadNotice) -> Self {
        Self {
            rows: Vec::new(),
            notice: Some(notice),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Abstraction over persistence backends holding the two flat tables.
///
/// Loads never fail: a missing or unreadable file degrades to an empty table
/// carrying a [`LoadNotice`]. Appends persist the full table and may fail.
pub trait TableStore {
    fn load_budget(&self) -> TableLoad<BudgetRecord>;
    fn load_expenses(&self) -> TableLoad<ExpenseRecord>;
    fn append_budget(&self, row: BudgetRecord) -> Result<()>;
    fn append_expense(&self, row: ExpenseRecord) -> Result<()>;
}

pub use csv_backend::CsvStorage;
