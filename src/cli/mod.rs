//! Menu-driven presentation layer mirroring the dashboard's four pages.
//!
//! Failures inside a page are rendered inline and never end the session.

pub mod forms;
pub mod output;
pub mod pages;

use dialoguer::Select;

use crate::config::{Config, ConfigManager};
use crate::errors::Result;
use crate::storage::CsvStorage;

const NAVIGATION: [&str; 5] = [
    "Finances at a Glance",
    "Allocate my Paycheck",
    "Log my Expenses",
    "Historical Data",
    "Exit",
];

pub fn run_cli() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = match manager.load() {
        Ok(config) => config,
        Err(err) => {
            output::warning(&format!("{err}; continuing with defaults."));
            Config::default()
        }
    };
    let storage = CsvStorage::new(&manager.data_dir(&config))?;

    loop {
        let choice = Select::new()
            .with_prompt("Navigation")
            .items(&NAVIGATION)
            .default(0)
            .interact()?;
        let outcome = match choice {
            0 => pages::finances_at_a_glance(&storage),
            1 => pages::allocate_paycheck(&storage),
            2 => pages::log_expenses(&storage),
            3 => pages::historical_data(&storage),
            _ => break,
        };
        if let Err(err) = outcome {
            output::error_line(&err.to_string());
        }
    }
    Ok(())
}
