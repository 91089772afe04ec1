use std::collections::BTreeMap;

use crate::domain::{Category, ExpenseRecord, MonthKey};

/// One grouped sum keyed by (month, category).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthCategoryTotal {
    pub month: MonthKey,
    pub category: Category,
    pub amount: f64,
}

/// Month-over-month fractional change of one category's total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentChange {
    pub month: MonthKey,
    pub category: Category,
    pub change: f64,
}

/// Per-category total within a single month, pie-chart input. Division by
/// the month total is left to the charting collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryAmount {
    pub category: Category,
    pub amount: f64,
}

/// Sums `Amount` grouped by (month, category).
///
/// The result is an exact partition of the input: every row contributes to
/// exactly one group. Output is sorted chronologically, then by category
/// declaration order. Empty input yields an empty result.
pub fn sum_by_month_category(expenses: &[ExpenseRecord]) -> Vec<MonthCategoryTotal> {
    let mut totals: BTreeMap<(MonthKey, Category), f64> = BTreeMap::new();
    for expense in expenses {
        *totals.entry((expense.month, expense.category)).or_insert(0.0) += expense.amount;
    }
    totals
        .into_iter()
        .map(|((month, category), amount)| MonthCategoryTotal {
            month,
            category,
            amount,
        })
        .collect()
}

/// Fractional change of each category's monthly total relative to the
/// immediately preceding month with data for that category.
///
/// The first element of each category's series reports 0 (no prior value),
/// as does any step whose prior total is zero.
pub fn percent_change_by_category(totals: &[MonthCategoryTotal]) -> Vec<PercentChange> {
    let mut series: BTreeMap<Category, Vec<(MonthKey, f64)>> = BTreeMap::new();
    for total in totals {
        series
            .entry(total.category)
            .or_default()
            .push((total.month, total.amount));
    }

    let mut changes = Vec::with_capacity(totals.len());
    for (category, mut points) in series {
        points.sort_by_key(|(month, _)| *month);
        let mut prior: Option<f64> = None;
        for (month, amount) in points {
            let change = match prior {
                Some(prev) if prev.abs() > f64::EPSILON => (amount - prev) / prev,
                _ => 0.0,
            };
            changes.push(PercentChange {
                month,
                category,
                change,
            });
            prior = Some(amount);
        }
    }
    changes.sort_by_key(|entry| (entry.month, entry.category));
    changes
}

/// Mean fractional change for one category, `None` when the category has no
/// aggregated history.
pub fn average_percent_change(changes: &[PercentChange], category: Category) -> Option<f64> {
    let values: Vec<f64> = changes
        .iter()
        .filter(|entry| entry.category == category)
        .map(|entry| entry.change)
        .collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Ordered (month, total) series for one category, line-chart input.
pub fn category_trend(expenses: &[ExpenseRecord], category: Category) -> Vec<(MonthKey, f64)> {
    let mut totals: BTreeMap<MonthKey, f64> = BTreeMap::new();
    for expense in expenses.iter().filter(|e| e.category == category) {
        *totals.entry(expense.month).or_insert(0.0) += expense.amount;
    }
    totals.into_iter().collect()
}

/// Per-category totals for one month, in category declaration order.
pub fn month_proportions(expenses: &[ExpenseRecord], month: MonthKey) -> Vec<CategoryAmount> {
    let mut totals: BTreeMap<Category, f64> = BTreeMap::new();
    for expense in expenses.iter().filter(|e| e.month == month) {
        *totals.entry(expense.category).or_insert(0.0) += expense.amount;
    }
    totals
        .into_iter()
        .map(|(category, amount)| CategoryAmount { category, amount })
        .collect()
}

/// Total spend across all categories for one month.
pub fn month_total(expenses: &[ExpenseRecord], month: MonthKey) -> f64 {
    expenses
        .iter()
        .filter(|e| e.month == month)
        .map(|e| e.amount)
        .sum()
}
