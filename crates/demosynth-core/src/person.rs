use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::group::DeclarationGroup;

/// A fully-populated fictitious individual.
///
/// Persons are produced only by the synthesizer and are immutable after
/// creation; query operations borrow them and never mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Person {
    /// Unique, monotonically issued digit string (simulated national id).
    pub id: String,
    pub first_name: String,
    /// Two surnames joined by a single space.
    pub last_name: String,
    /// Always a member of [`crate::reference::CITIES`].
    pub birth_city: String,
    /// Day in 1..=28, month in 1..=12, year in 1960..=2009.
    pub birth_date: NaiveDate,
    /// Derived as `REFERENCE_YEAR - birth year`, so 16..=65.
    pub age: u32,
    /// Tax-filing bucket derived from the last two digits of `id`.
    pub declaration_group: DeclarationGroup,
    /// Annual income in pesos, uniform in [10e6, 500e6].
    pub annual_income: f64,
    /// Total asset value in pesos, uniform in [0, 2e9].
    pub net_worth: f64,
    /// Outstanding debt, at most 70% of `net_worth`.
    pub debt: f64,
    /// Obligated to file a tax declaration.
    pub is_filing_taxpayer: bool,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// One-line summary for listings; the interactive shell prints this.
    pub fn summary(&self) -> String {
        format!(
            "[{}] {} | {} | ${:.2}",
            self.id,
            self.full_name(),
            self.birth_city,
            self.annual_income
        )
    }
}
