use serde::{Deserialize, Serialize};

use super::{MonthKey, TableSchema};

/// Wire schema for the budget table. One row per logged paycheck event;
/// months are not unique and repeated submissions append duplicate rows.
pub const BUDGET_SCHEMA: TableSchema = TableSchema {
    name: "budget",
    version: 1,
    columns: &[
        "Month",
        "Paycheck",
        "Saving1",
        "Saving2",
        "Saving3",
        "Total_Saved",
        "Fixed_Expenses",
        "Misc_Budget",
    ],
};

/// One paycheck-allocation row.
///
/// Built only by [`crate::allocation::PaycheckAllocation::into_budget_record`],
/// which keeps the derived columns consistent with the paycheck.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetRecord {
    #[serde(rename = "Month")]
    pub month: MonthKey,
    #[serde(rename = "Paycheck")]
    pub paycheck: f64,
    #[serde(rename = "Saving1")]
    pub saving1: f64,
    #[serde(rename = "Saving2")]
    pub saving2: f64,
    #[serde(rename = "Saving3")]
    pub saving3: f64,
    #[serde(rename = "Total_Saved")]
    pub total_saved: f64,
    #[serde(rename = "Fixed_Expenses")]
    pub fixed_expenses: f64,
    #[serde(rename = "Misc_Budget")]
    pub misc_budget: f64,
}

impl BudgetRecord {
    /// Checks the derived-column identities within the given tolerance.
    pub fn invariants_hold(&self, tolerance: f64) -> bool {
        let saved = self.saving1 + self.saving2 + self.saving3;
        let misc = self.paycheck - self.total_saved - self.fixed_expenses;
        (self.total_saved - saved).abs() <= tolerance && (self.misc_budget - misc).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariants_use_cent_tolerance() {
        let row = BudgetRecord {
            month: "01/2024".parse().unwrap(),
            paycheck: 2000.0,
            saving1: 400.0,
            saving2: 300.0,
            saving3: 200.0,
            total_saved: 900.004,
            fixed_expenses: 600.0,
            misc_budget: 500.0,
        };
        assert!(row.invariants_hold(0.01));

        let broken = BudgetRecord {
            total_saved: 950.0,
            ..row
        };
        assert!(!broken.invariants_hold(0.01));
    }
}
