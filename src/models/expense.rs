//! Expense model
//!
//! One recorded spending event. Expenses are immutable once created; edits
//! are out of scope for the ledger format.

use chrono::NaiveDate;
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SpendlogError, SpendlogResult};

use super::category::Category;
use super::money::Money;

/// Number of fields in a ledger record: date, amount, category, description
pub const LEDGER_FIELDS: usize = 4;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Category the expense is filed under
    pub category: Category,

    /// Free-text description
    pub description: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> SpendlogResult<()> {
        if !self.amount.is_positive() {
            return Err(SpendlogError::Validation(format!(
                "expense amount must be positive, got {}",
                self.amount
            )));
        }
        Ok(())
    }

    /// Convert to a ledger record in file field order
    pub fn to_record(&self) -> [String; LEDGER_FIELDS] {
        [
            self.date.format("%Y-%m-%d").to_string(),
            self.amount.format_plain(),
            self.category.to_string(),
            self.description.clone(),
        ]
    }

    /// Parse an expense from a ledger record
    ///
    /// `line` is the 1-based line number, used only for error reporting.
    pub fn from_record(record: &StringRecord, line: usize) -> SpendlogResult<Self> {
        if record.len() != LEDGER_FIELDS {
            return Err(SpendlogError::parse(
                line,
                format!("expected {} fields, got {}", LEDGER_FIELDS, record.len()),
            ));
        }

        let date = NaiveDate::parse_from_str(&record[0], "%Y-%m-%d")
            .map_err(|e| SpendlogError::parse(line, format!("bad date '{}': {}", &record[0], e)))?;

        let amount = Money::parse(&record[1])
            .map_err(|e| SpendlogError::parse(line, e.to_string()))?;

        // Category parsing is infallible
        let category = record[2].parse::<Category>().unwrap_or_default();

        Ok(Self::new(date, amount, category, record[3].to_string()))
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.category,
            self.description
        )
    }
}
