use serde::{Deserialize, Serialize};

use super::{Category, MonthKey, TableSchema};

/// Wire schema for the expense-log table.
pub const EXPENSE_SCHEMA: TableSchema = TableSchema {
    name: "expenses",
    version: 1,
    columns: &["Month", "Amount", "Category", "Planned_Unplanned", "Description"],
};

/// Whether an expense was anticipated when it was logged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Planned {
    Yes,
    No,
    #[default]
    #[serde(rename = "", alias = "None")]
    Unset,
}

/// One logged expense. Amounts are taken as entered; zero and negative
/// values are allowed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    #[serde(rename = "Month")]
    pub month: MonthKey,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Category")]
    pub category: Category,
    #[serde(rename = "Planned_Unplanned")]
    pub planned: Planned,
    #[serde(rename = "Description")]
    pub description: String,
}

impl ExpenseRecord {
    pub fn new(
        month: MonthKey,
        amount: f64,
        category: Category,
        planned: Planned,
        description: impl Into<String>,
    ) -> Self {
        Self {
            month,
            amount,
            category,
            planned,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planned_flag_defaults_to_unset() {
        assert_eq!(Planned::default(), Planned::Unset);
    }

    #[test]
    fn schema_lists_columns_in_append_order() {
        assert_eq!(EXPENSE_SCHEMA.columns.len(), 5);
        assert_eq!(EXPENSE_SCHEMA.columns[0], "Month");
        assert_eq!(EXPENSE_SCHEMA.columns[4], "Description");
    }
}
