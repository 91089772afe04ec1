//! Domain models for the budget and expense tables, plus their wire schemas.

pub mod budget;
pub mod category;
pub mod expense;
pub mod month;

pub use budget::{BudgetRecord, BUDGET_SCHEMA};
pub use category::{Category, FixedStat};
pub use expense::{ExpenseRecord, Planned, EXPENSE_SCHEMA};
pub use month::MonthKey;

/// Declared column layout for one persisted table.
///
/// Rows are positional, so the column order here is load-bearing: storage
/// validates file headers against it and writes rows in exactly this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub version: u32,
    pub columns: &'static [&'static str],
}

impl TableSchema {
    /// Checks a parsed header row against the canonical column list.
    pub fn matches_header<'a>(&self, header: impl IntoIterator<Item = &'a str>) -> bool {
        let mut seen = 0usize;
        for (idx, field) in header.into_iter().enumerate() {
            match self.columns.get(idx) {
                Some(expected) if *expected == field => seen += 1,
                _ => return false,
            }
        }
        seen == self.columns.len()
    }
}
