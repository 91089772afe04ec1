use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::HubError;

/// Closed set of expense categories offered by the logging form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Rent,
    Utilities,
    #[serde(rename = "Car Insurance")]
    CarInsurance,
    Gas,
    #[serde(rename = "Public Transportation")]
    PublicTransportation,
    Groceries,
    #[serde(rename = "Dining Out")]
    DiningOut,
    #[serde(rename = "Delivery Services")]
    DeliveryServices,
    #[serde(rename = "Renters Insurance")]
    RentersInsurance,
    #[serde(rename = "Medical Expenses")]
    MedicalExpenses,
    #[serde(rename = "Gym Membership")]
    GymMembership,
    #[serde(rename = "Health-Related Products")]
    HealthRelatedProducts,
    Subscriptions,
    #[serde(rename = "Movies, Concerts, Events")]
    MoviesConcertsEvents,
    Hobbies,
    Travel,
    Haircut,
    #[serde(rename = "Skincare, Makeup")]
    SkincareMakeup,
    Clothes,
    #[serde(rename = "Toiletries (soap, toothpaste, etc.)")]
    Toiletries,
    Gifts,
    #[serde(rename = "Pet Expenses")]
    PetExpenses,
    Other,
}

/// Statistic applied to a fixed category's history when estimating its
/// monthly budget. Worst-case costs are capped at their max; variable but
/// recurring costs are averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedStat {
    Max,
    Mean,
}

impl Category {
    pub const ALL: [Category; 23] = [
        Category::Rent,
        Category::Utilities,
        Category::CarInsurance,
        Category::Gas,
        Category::PublicTransportation,
        Category::Groceries,
        Category::DiningOut,
        Category::DeliveryServices,
        Category::RentersInsurance,
        Category::MedicalExpenses,
        Category::GymMembership,
        Category::HealthRelatedProducts,
        Category::Subscriptions,
        Category::MoviesConcertsEvents,
        Category::Hobbies,
        Category::Travel,
        Category::Haircut,
        Category::SkincareMakeup,
        Category::Clothes,
        Category::Toiletries,
        Category::Gifts,
        Category::PetExpenses,
        Category::Other,
    ];

    /// Display label, identical to the value persisted in the expense table.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Rent => "Rent",
            Category::Utilities => "Utilities",
            Category::CarInsurance => "Car Insurance",
            Category::Gas => "Gas",
            Category::PublicTransportation => "Public Transportation",
            Category::Groceries => "Groceries",
            Category::DiningOut => "Dining Out",
            Category::DeliveryServices => "Delivery Services",
            Category::RentersInsurance => "Renters Insurance",
            Category::MedicalExpenses => "Medical Expenses",
            Category::GymMembership => "Gym Membership",
            Category::HealthRelatedProducts => "Health-Related Products",
            Category::Subscriptions => "Subscriptions",
            Category::MoviesConcertsEvents => "Movies, Concerts, Events",
            Category::Hobbies => "Hobbies",
            Category::Travel => "Travel",
            Category::Haircut => "Haircut",
            Category::SkincareMakeup => "Skincare, Makeup",
            Category::Clothes => "Clothes",
            Category::Toiletries => "Toiletries (soap, toothpaste, etc.)",
            Category::Gifts => "Gifts",
            Category::PetExpenses => "Pet Expenses",
            Category::Other => "Other",
        }
    }

    /// Returns the budgeting statistic for fixed categories, `None` for
    /// discretionary ones.
    pub fn fixed_stat(&self) -> Option<FixedStat> {
        match self {
            Category::Rent
            | Category::Subscriptions
            | Category::Utilities
            | Category::GymMembership => Some(FixedStat::Max),
            Category::Groceries | Category::Gas | Category::PetExpenses => Some(FixedStat::Mean),
            _ => None,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed_stat().is_some()
    }

    /// The fixed-category subset, in `ALL` order.
    pub fn fixed_categories() -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(Category::is_fixed)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = HubError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == raw.trim())
            .ok_or_else(|| HubError::InvalidInput(format!("unknown expense category `{raw}`")))
    }
}
