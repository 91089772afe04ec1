//! Aggregation over the expense and budget tables.
//!
//! Everything here is a pure function over slices of records: callers load
//! tables, compute, and render. No shared caches, no I/O.

pub mod check;
pub mod expenses;

pub use check::{
    budget_row_for_month, fixed_vs_misc_check, savings_by_fund, BudgetCheck, BudgetComparison,
    FundTotal, SavingsFund, SideCheck,
};
pub use expenses::{
    average_percent_change, category_trend, month_proportions, month_total,
    percent_change_by_category, sum_by_month_category, CategoryAmount, MonthCategoryTotal,
    PercentChange,
};
