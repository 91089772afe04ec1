//! Paycheck allocation: savings-fund splits, the rolling fixed-expense
//! estimate derived from expense history, and the discretionary remainder.

use crate::domain::{BudgetRecord, Category, ExpenseRecord, FixedStat, MonthKey};

/// Upper bound the input surface enforces on each contribution fraction.
pub const MAX_CONTRIBUTION: f64 = 0.30;

/// Contribution fractions for the three savings funds, clamped to
/// `[0, MAX_CONTRIBUTION]` on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContributionRates {
    fund1: f64,
    fund2: f64,
    fund3: f64,
}

impl ContributionRates {
    pub fn new(fund1: f64, fund2: f64, fund3: f64) -> Self {
        Self {
            fund1: clamp_rate(fund1),
            fund2: clamp_rate(fund2),
            fund3: clamp_rate(fund3),
        }
    }

    pub fn fund1(&self) -> f64 {
        self.fund1
    }

    pub fn fund2(&self) -> f64 {
        self.fund2
    }

    pub fn fund3(&self) -> f64 {
        self.fund3
    }
}

impl Default for ContributionRates {
    /// The input surface's default sliders: 20%, 15%, 10%.
    fn default() -> Self {
        Self::new(0.20, 0.15, 0.10)
    }
}

fn clamp_rate(rate: f64) -> f64 {
    rate.clamp(0.0, MAX_CONTRIBUTION)
}

/// One fixed category's contribution to the estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedEstimateLine {
    pub category: Category,
    pub stat: FixedStat,
    pub amount: f64,
}

/// Per-category breakdown of the fixed-expense budget estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedBudgetEstimate {
    pub lines: Vec<FixedEstimateLine>,
}

impl FixedBudgetEstimate {
    pub fn total(&self) -> f64 {
        self.lines.iter().map(|line| line.amount).sum()
    }
}

/// Estimates the monthly fixed-expense budget from expense history.
///
/// Each fixed category contributes its configured statistic (max or mean)
/// over every historical amount in that category; a category with no history
/// contributes 0. Never fails.
pub fn fixed_budget_estimate(expenses: &[ExpenseRecord]) -> FixedBudgetEstimate {
    let lines = Category::fixed_categories()
        .map(|category| {
            let stat = category
                .fixed_stat()
                .unwrap_or(FixedStat::Mean);
            let amounts: Vec<f64> = expenses
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.amount)
                .collect();
            let amount = if amounts.is_empty() {
                0.0
            } else {
                match stat {
                    FixedStat::Max => amounts.iter().copied().fold(f64::MIN, f64::max),
                    FixedStat::Mean => amounts.iter().sum::<f64>() / amounts.len() as f64,
                }
            };
            FixedEstimateLine {
                category,
                stat,
                amount,
            }
        })
        .collect();
    FixedBudgetEstimate { lines }
}

/// A fully computed paycheck split. The four output amounts always sum to
/// the paycheck; nothing is rounded here, only at the presentation boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct PaycheckAllocation {
    pub paycheck: f64,
    pub savings: [f64; 3],
    pub total_saved: f64,
    pub fixed_budget: f64,
    pub misc_budget: f64,
}

impl PaycheckAllocation {
    /// Sole constructor of budget rows; keeps the derived columns consistent
    /// with the paycheck by construction. All three fund amounts persist.
    pub fn into_budget_record(self, month: MonthKey) -> BudgetRecord {
        BudgetRecord {
            month,
            paycheck: self.paycheck,
            saving1: self.savings[0],
            saving2: self.savings[1],
            saving3: self.savings[2],
            total_saved: self.total_saved,
            fixed_expenses: self.fixed_budget,
            misc_budget: self.misc_budget,
        }
    }
}

/// Splits a paycheck into savings, fixed, and discretionary amounts.
///
/// `misc_budget` may go negative when savings plus fixed exceed the
/// paycheck; that is surfaced to the user, not rejected.
pub fn allocate(
    paycheck: f64,
    rates: ContributionRates,
    estimate: &FixedBudgetEstimate,
) -> PaycheckAllocation {
    let savings = [
        paycheck * rates.fund1(),
        paycheck * rates.fund2(),
        paycheck * rates.fund3(),
    ];
    let total_saved: f64 = savings.iter().sum();
    let fixed_budget = estimate.total();
    let misc_budget = paycheck - total_saved - fixed_budget;
    PaycheckAllocation {
        paycheck,
        savings,
        total_saved,
        fixed_budget,
        misc_budget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Planned;

    fn month(raw: &str) -> MonthKey {
        raw.parse().expect("valid month key")
    }

    fn expense(raw_month: &str, amount: f64, category: Category) -> ExpenseRecord {
        ExpenseRecord::new(month(raw_month), amount, category, Planned::Unset, "")
    }

    #[test]
    fn rates_clamp_to_the_slider_range() {
        let rates = ContributionRates::new(-0.1, 0.5, 0.25);
        assert_eq!(rates.fund1(), 0.0);
        assert_eq!(rates.fund2(), MAX_CONTRIBUTION);
        assert_eq!(rates.fund3(), 0.25);
    }

    #[test]
    fn mixed_statistics_per_category() {
        let expenses = vec![
            expense("01/2024", 1200.0, Category::Rent),
            expense("02/2024", 1250.0, Category::Rent),
            expense("01/2024", 80.0, Category::Groceries),
            expense("02/2024", 120.0, Category::Groceries),
        ];
        let estimate = fixed_budget_estimate(&expenses);
        let line_for = |category: Category| {
            estimate
                .lines
                .iter()
                .find(|line| line.category == category)
                .copied()
                .expect("line present")
        };
        // Rent is capped at its worst case, groceries are averaged.
        assert!((line_for(Category::Rent).amount - 1250.0).abs() < 1e-9);
        assert!((line_for(Category::Groceries).amount - 100.0).abs() < 1e-9);
        assert_eq!(line_for(Category::Gas).amount, 0.0);
        assert!((estimate.total() - 1350.0).abs() < 1e-9);
    }

    #[test]
    fn allocation_identity_matches_worked_example() {
        let rates = ContributionRates::new(0.20, 0.15, 0.10);
        let estimate = fixed_budget_estimate(&[expense("01/2024", 600.0, Category::Rent)]);
        let allocation = allocate(2000.0, rates, &estimate);

        assert!((allocation.savings[0] - 400.0).abs() < 1e-9);
        assert!((allocation.savings[1] - 300.0).abs() < 1e-9);
        assert!((allocation.savings[2] - 200.0).abs() < 1e-9);
        assert!((allocation.total_saved - 900.0).abs() < 1e-9);
        assert!((allocation.fixed_budget - 600.0).abs() < 1e-9);
        assert!((allocation.misc_budget - 500.0).abs() < 1e-9);

        let sum = allocation.total_saved + allocation.fixed_budget + allocation.misc_budget;
        assert!((sum - allocation.paycheck).abs() < 0.01);
    }

    #[test]
    fn no_history_degrades_to_zero_fixed_budget() {
        let estimate = fixed_budget_estimate(&[]);
        assert_eq!(estimate.total(), 0.0);
        let allocation = allocate(1000.0, ContributionRates::default(), &estimate);
        assert!((allocation.misc_budget - 550.0).abs() < 1e-9);
    }

    #[test]
    fn misc_budget_may_go_negative() {
        let estimate = fixed_budget_estimate(&[expense("01/2024", 5000.0, Category::Rent)]);
        let allocation = allocate(2000.0, ContributionRates::default(), &estimate);
        assert!(allocation.misc_budget < 0.0);
        let sum = allocation.total_saved + allocation.fixed_budget + allocation.misc_budget;
        assert!((sum - 2000.0).abs() < 0.01);
    }

    #[test]
    fn budget_record_keeps_all_three_funds() {
        let allocation = allocate(
            2000.0,
            ContributionRates::new(0.20, 0.15, 0.10),
            &FixedBudgetEstimate { lines: Vec::new() },
        );
        let row = allocation.into_budget_record(month("01/2024"));
        assert!((row.saving3 - 200.0).abs() < 1e-9);
        assert!(row.invariants_hold(0.01));
    }
}
