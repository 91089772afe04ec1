use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};

use crate::allocation::{ContributionRates, MAX_CONTRIBUTION};
use crate::domain::{Category, MonthKey, Planned};
use crate::errors::{HubError, Result};

const DATE_FORMAT: &str = "%m/%d/%Y";

/// Asks for a calendar date and reduces it to the `MM/YYYY` period key.
pub fn prompt_month(prompt: &str) -> Result<MonthKey> {
    let raw: String = Input::new()
        .with_prompt(format!("{prompt} (MM/DD/YYYY)"))
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
                .map(|_| ())
                .map_err(|_| "enter a date as MM/DD/YYYY".to_string())
        })
        .interact_text()?;
    let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|err| HubError::InvalidInput(err.to_string()))?;
    Ok(MonthKey::from_date(date))
}

/// Take-home paycheck amount; the form floors it at zero.
pub fn prompt_paycheck() -> Result<f64> {
    let amount: f64 = Input::new()
        .with_prompt("Take-home paycheck amount")
        .validate_with(|value: &f64| -> std::result::Result<(), String> {
            if *value >= 0.0 {
                Ok(())
            } else {
                Err("paycheck cannot be negative".to_string())
            }
        })
        .interact_text()?;
    Ok(amount)
}

/// Expense amount; zero and negative values (refunds) are accepted as-is.
pub fn prompt_expense_amount() -> Result<f64> {
    Ok(Input::new()
        .with_prompt("How much did you spend?")
        .interact_text()?)
}

pub fn prompt_rates() -> Result<ContributionRates> {
    let fund1 = prompt_rate("Contribution fraction for Savings Fund 1", 0.20)?;
    let fund2 = prompt_rate("Contribution fraction for Savings Fund 2", 0.15)?;
    let fund3 = prompt_rate("Contribution fraction for Savings Fund 3", 0.10)?;
    Ok(ContributionRates::new(fund1, fund2, fund3))
}

fn prompt_rate(prompt: &str, default: f64) -> Result<f64> {
    // Out-of-range entries are clamped by ContributionRates::new.
    Ok(Input::new()
        .with_prompt(format!("{prompt} (0.00-{MAX_CONTRIBUTION:.2})"))
        .default(default)
        .interact_text()?)
}

pub fn prompt_category() -> Result<Category> {
    let labels: Vec<&str> = Category::ALL.iter().map(Category::label).collect();
    let index = Select::new()
        .with_prompt("What category does this fall into?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Category::ALL[index])
}

pub fn prompt_planned() -> Result<Planned> {
    let index = Select::new()
        .with_prompt("Was this expense planned?")
        .items(&["Yes", "No", "Skip"])
        .default(0)
        .interact()?;
    Ok(match index {
        0 => Planned::Yes,
        1 => Planned::No,
        _ => Planned::Unset,
    })
}

pub fn prompt_description() -> Result<String> {
    Ok(Input::new()
        .with_prompt("What was this expense?")
        .allow_empty(true)
        .interact_text()?)
}

/// Picks one of the months present in the data; `None` when there are none.
pub fn prompt_pick_month(months: &[MonthKey]) -> Result<Option<MonthKey>> {
    if months.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = months.iter().map(MonthKey::to_string).collect();
    let index = Select::new()
        .with_prompt("Select month")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(months[index]))
}

pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()?)
}
