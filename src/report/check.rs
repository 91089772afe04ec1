use crate::domain::{BudgetRecord, ExpenseRecord, MonthKey};

/// Outcome of comparing one month's actual spend against its budgeted amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetComparison {
    /// The month has no budget row to compare against. Expected whenever
    /// expenses are logged before a paycheck is allocated; informational,
    /// not a defect.
    NoBudgetRow,
    Within { remaining: f64 },
    Over { by: f64 },
}

/// Actual spend for one side (fixed or miscellaneous) plus its comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideCheck {
    pub actual: f64,
    pub comparison: BudgetComparison,
}

/// Fixed-vs-miscellaneous budget check for a single month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetCheck {
    pub month: MonthKey,
    pub fixed: SideCheck,
    pub misc: SideCheck,
}

/// First budget row logged for the given month, if any. Months are not
/// unique, so the earliest submission wins for comparison purposes.
pub fn budget_row_for_month(rows: &[BudgetRecord], month: MonthKey) -> Option<&BudgetRecord> {
    rows.iter().find(|row| row.month == month)
}

/// Sums the month's expenses over the fixed-category subset and its
/// complement, then compares each side to the budget row's allocation.
///
/// With no budget row both sides report [`BudgetComparison::NoBudgetRow`];
/// with no expenses the actuals are zero. Never fails.
pub fn fixed_vs_misc_check(
    expenses: &[ExpenseRecord],
    budget_row: Option<&BudgetRecord>,
    month: MonthKey,
) -> BudgetCheck {
    let mut fixed_actual = 0.0;
    let mut misc_actual = 0.0;
    for expense in expenses.iter().filter(|e| e.month == month) {
        if expense.category.is_fixed() {
            fixed_actual += expense.amount;
        } else {
            misc_actual += expense.amount;
        }
    }

    BudgetCheck {
        month,
        fixed: SideCheck {
            actual: fixed_actual,
            comparison: compare(fixed_actual, budget_row.map(|row| row.fixed_expenses)),
        },
        misc: SideCheck {
            actual: misc_actual,
            comparison: compare(misc_actual, budget_row.map(|row| row.misc_budget)),
        },
    }
}

fn compare(actual: f64, budgeted: Option<f64>) -> BudgetComparison {
    match budgeted {
        None => BudgetComparison::NoBudgetRow,
        Some(amount) if actual > amount => BudgetComparison::Over {
            by: actual - amount,
        },
        Some(amount) => BudgetComparison::Within {
            remaining: amount - actual,
        },
    }
}

/// One savings fund's lifetime total across all budget rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundTotal {
    pub fund: SavingsFund,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsFund {
    Fund1,
    Fund2,
    Fund3,
    Total,
}

impl SavingsFund {
    pub fn label(&self) -> &'static str {
        match self {
            SavingsFund::Fund1 => "Savings Fund 1",
            SavingsFund::Fund2 => "Savings Fund 2",
            SavingsFund::Fund3 => "Savings Fund 3",
            SavingsFund::Total => "Total Saved",
        }
    }
}

/// Lifetime savings per fund plus the overall total, bar-chart input.
pub fn savings_by_fund(rows: &[BudgetRecord]) -> Vec<FundTotal> {
    let mut fund1 = 0.0;
    let mut fund2 = 0.0;
    let mut fund3 = 0.0;
    let mut total = 0.0;
    for row in rows {
        fund1 += row.saving1;
        fund2 += row.saving2;
        fund3 += row.saving3;
        total += row.total_saved;
    }
    vec![
        FundTotal {
            fund: SavingsFund::Fund1,
            amount: fund1,
        },
        FundTotal {
            fund: SavingsFund::Fund2,
            amount: fund2,
        },
        FundTotal {
            fund: SavingsFund::Fund3,
            amount: fund3,
        },
        FundTotal {
            fund: SavingsFund::Total,
            amount: total,
        },
    ]
}
