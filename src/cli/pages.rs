use std::collections::BTreeSet;

use crate::allocation::{self, fixed_budget_estimate};
use crate::domain::{Category, ExpenseRecord, FixedStat, MonthKey};
use crate::errors::Result;
use crate::report::{
    average_percent_change, budget_row_for_month, category_trend, fixed_vs_misc_check,
    month_proportions, month_total, percent_change_by_category, savings_by_fund,
    sum_by_month_category, BudgetComparison,
};
use crate::storage::TableStore;

use super::forms;
use super::output::{
    currency, describe_notice, info, metric, percent, section, success, table, warning,
};

/// Categories given their own trend panel on the overview page.
const TREND_PANELS: [Category; 3] = [Category::Rent, Category::Utilities, Category::Groceries];

pub fn finances_at_a_glance(store: &impl TableStore) -> Result<()> {
    section("Finances at a Glance");

    let expenses = store.load_expenses();
    if let Some(notice) = &expenses.notice {
        describe_notice("expense", notice);
    }
    if expenses.rows.is_empty() {
        info("There are no logged expenses.");
    } else {
        let totals = sum_by_month_category(&expenses.rows);
        let changes = percent_change_by_category(&totals);

        section("Change in Expense Category by Month");
        for category in TREND_PANELS {
            let trend = category_trend(&expenses.rows, category);
            if trend.is_empty() {
                info(&format!("No {category} expenses logged yet."));
                continue;
            }
            println!("  {category}");
            let rows: Vec<Vec<String>> = trend
                .iter()
                .map(|(month, amount)| vec![month.to_string(), currency(*amount)])
                .collect();
            table(&["Month", "Amount"], &rows);
            if let Some(average) = average_percent_change(&changes, category) {
                metric(
                    &format!("Average percent change in {category} over time"),
                    &percent(average),
                );
            }
        }

        section("Proportion of Total Expenses by Month and Category");
        let months = expense_months(&expenses.rows);
        if let Some(month) = forms::prompt_pick_month(&months)? {
            let proportions = month_proportions(&expenses.rows, month);
            let rows: Vec<Vec<String>> = proportions
                .iter()
                .map(|entry| vec![entry.category.to_string(), currency(entry.amount)])
                .collect();
            table(&["Category", "Amount"], &rows);
            metric(
                &format!("Sum of expenses for {month}"),
                &currency(month_total(&expenses.rows, month)),
            );
        }
    }

    section("Savings by Account Type");
    let budget = store.load_budget();
    if let Some(notice) = &budget.notice {
        describe_notice("budget", notice);
    }
    if budget.rows.is_empty() {
        info("There are no logged savings.");
    } else {
        let rows: Vec<Vec<String>> = savings_by_fund(&budget.rows)
            .iter()
            .map(|total| vec![total.fund.label().to_string(), currency(total.amount)])
            .collect();
        table(&["Account Type", "Amount"], &rows);
    }
    Ok(())
}

pub fn allocate_paycheck(store: &impl TableStore) -> Result<()> {
    section("Allocate my Paycheck");

    let expenses = store.load_expenses();
    if let Some(notice) = &expenses.notice {
        describe_notice("expense", notice);
    }
    let estimate = fixed_budget_estimate(&expenses.rows);

    let rates = forms::prompt_rates()?;
    let month = forms::prompt_month("What's the date?")?;
    let paycheck = forms::prompt_paycheck()?;
    let allocation = allocation::allocate(paycheck, rates, &estimate);

    section("Savings Allocation");
    metric("Savings Fund 1", &currency(allocation.savings[0]));
    metric("Savings Fund 2", &currency(allocation.savings[1]));
    metric("Savings Fund 3", &currency(allocation.savings[2]));
    metric("Total Saved", &currency(allocation.total_saved));

    section("Fixed Expenses");
    let rows: Vec<Vec<String>> = estimate
        .lines
        .iter()
        .map(|line| {
            let stat = match line.stat {
                FixedStat::Max => "max",
                FixedStat::Mean => "mean",
            };
            vec![
                line.category.to_string(),
                stat.to_string(),
                currency(line.amount),
            ]
        })
        .collect();
    table(&["Category", "Statistic", "Estimate"], &rows);
    metric(
        "Total allocation to fixed expenses",
        &currency(allocation.fixed_budget),
    );

    section("Discretionary Spend");
    metric("Total left to spend", &currency(allocation.misc_budget));
    if allocation.misc_budget < 0.0 {
        warning("Savings and fixed expenses exceed this paycheck.");
    }

    if forms::confirm("Submit paycheck?")? {
        store.append_budget(allocation.into_budget_record(month))?;
        success("Your paycheck has been successfully allocated!");
    }
    Ok(())
}

pub fn log_expenses(store: &impl TableStore) -> Result<()> {
    section("Log my Expenses");

    let month = forms::prompt_month("What's the date?")?;
    let amount = forms::prompt_expense_amount()?;
    let category = forms::prompt_category()?;
    let planned = forms::prompt_planned()?;
    let description = forms::prompt_description()?;
    store.append_expense(ExpenseRecord::new(
        month,
        amount,
        category,
        planned,
        description,
    ))?;
    success("Your expense has been successfully logged!");

    expense_summary(store)
}

fn expense_summary(store: &impl TableStore) -> Result<()> {
    section("Expense Summary");

    let expenses = store.load_expenses();
    if let Some(notice) = &expenses.notice {
        describe_notice("expense", notice);
    }
    if expenses.rows.is_empty() {
        info("There are no logged expenses.");
        return Ok(());
    }
    let months = expense_months(&expenses.rows);
    let Some(month) = forms::prompt_pick_month(&months)? else {
        return Ok(());
    };

    let budget = store.load_budget();
    if let Some(notice) = &budget.notice {
        describe_notice("budget", notice);
    }
    let budget_row = budget_row_for_month(&budget.rows, month);
    let check = fixed_vs_misc_check(&expenses.rows, budget_row, month);
    let proportions = month_proportions(&expenses.rows, month);

    section("Miscellaneous Expenses");
    let misc_rows: Vec<Vec<String>> = proportions
        .iter()
        .filter(|entry| !entry.category.is_fixed())
        .map(|entry| vec![entry.category.to_string(), currency(entry.amount)])
        .collect();
    if misc_rows.is_empty() {
        info("There are no miscellaneous expenses logged for this month.");
    } else {
        table(&["Category", "Amount"], &misc_rows);
    }
    metric("Total miscellaneous expenses", &currency(check.misc.actual));
    describe_comparison("miscellaneous spend", &check.misc.comparison);

    section("Fixed Expenses");
    let fixed_rows: Vec<Vec<String>> = proportions
        .iter()
        .filter(|entry| entry.category.is_fixed())
        .map(|entry| vec![entry.category.to_string(), currency(entry.amount)])
        .collect();
    if fixed_rows.is_empty() {
        info("There are no fixed expenses logged for this month.");
    } else {
        table(&["Category", "Amount"], &fixed_rows);
    }
    metric("Total fixed expenses", &currency(check.fixed.actual));
    describe_comparison("fixed expenses", &check.fixed.comparison);
    Ok(())
}

pub fn historical_data(store: &impl TableStore) -> Result<()> {
    section("Historical Data");

    section("Budget History");
    let budget = store.load_budget();
    if let Some(notice) = &budget.notice {
        describe_notice("budget", notice);
    }
    if budget.rows.is_empty() {
        info("There is no budget history yet.");
    } else {
        let mut rows = budget.rows;
        rows.sort_by_key(|row| row.month);
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    row.month.to_string(),
                    currency(row.paycheck),
                    currency(row.saving1),
                    currency(row.saving2),
                    currency(row.saving3),
                    currency(row.total_saved),
                    currency(row.fixed_expenses),
                    currency(row.misc_budget),
                ]
            })
            .collect();
        table(
            &[
                "Month",
                "Paycheck",
                "Fund 1",
                "Fund 2",
                "Fund 3",
                "Total Saved",
                "Fixed",
                "Misc",
            ],
            &cells,
        );
    }

    section("Expense History");
    let expenses = store.load_expenses();
    if let Some(notice) = &expenses.notice {
        describe_notice("expense", notice);
    }
    if expenses.rows.is_empty() {
        info("There is no expense history yet.");
    } else {
        let mut rows = expenses.rows;
        rows.sort_by_key(|row| row.month);
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    row.month.to_string(),
                    currency(row.amount),
                    row.category.to_string(),
                    match row.planned {
                        crate::domain::Planned::Yes => "Yes".to_string(),
                        crate::domain::Planned::No => "No".to_string(),
                        crate::domain::Planned::Unset => String::new(),
                    },
                    row.description.clone(),
                ]
            })
            .collect();
        table(
            &["Month", "Amount", "Category", "Planned", "Description"],
            &cells,
        );
    }
    Ok(())
}

fn describe_comparison(side: &str, comparison: &BudgetComparison) {
    match comparison {
        BudgetComparison::NoBudgetRow => info(&format!(
            "No budget row for this month yet; skipping the {side} comparison."
        )),
        BudgetComparison::Over { by } => warning(&format!(
            "FYI you are over the {side} budget by {}.",
            currency(*by)
        )),
        BudgetComparison::Within { remaining } => info(&format!(
            "You are within the {side} budget ({} remaining).",
            currency(*remaining)
        )),
    }
}

fn expense_months(rows: &[ExpenseRecord]) -> Vec<MonthKey> {
    let months: BTreeSet<MonthKey> = rows.iter().map(|row| row.month).collect();
    months.into_iter().collect()
}
