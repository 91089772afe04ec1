use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::HubError;

/// The `MM/YYYY` period key identifying the reporting month a record belongs to.
///
/// Ordering is chronological (year-major), not lexicographic on the rendered
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(month: u32, year: i32) -> Result<Self, HubError> {
        if !(1..=12).contains(&month) {
            return Err(HubError::InvalidInput(format!(
                "month must be 01-12, got {month}"
            )));
        }
        if !(1000..=9999).contains(&year) {
            return Err(HubError::InvalidInput(format!(
                "year must be four digits, got {year}"
            )));
        }
        Ok(Self { year, month })
    }

    /// Derives the period key from a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

impl FromStr for MonthKey {
    type Err = HubError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || HubError::InvalidInput(format!("expected MM/YYYY period key, got `{raw}`"));
        let (month_part, year_part) = raw.trim().split_once('/').ok_or_else(invalid)?;
        if month_part.len() != 2 || year_part.len() != 4 {
            return Err(invalid());
        }
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        Self::new(month, year)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
