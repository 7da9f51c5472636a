//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger and report layers.

use std::str::FromStr;

use chrono::NaiveDate;
use clap::ValueEnum;

use crate::display::format_expense_list;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Category, Expense, Money, SummaryWindow};
use crate::reports::SummaryReport;
use crate::storage::Ledger;

/// The period a summary covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryPeriod {
    /// A single calendar day
    Day,
    /// Monday of the anchor's week through the anchor day
    Week,
    /// The anchor's calendar month
    Month,
}

impl SummaryPeriod {
    /// Build the summary window anchored at the given date
    pub fn window(&self, anchor: NaiveDate) -> SummaryWindow {
        match self {
            Self::Day => SummaryWindow::day(anchor),
            Self::Week => SummaryWindow::week_to_date(anchor),
            Self::Month => SummaryWindow::month_of(anchor),
        }
    }
}

/// Parse a YYYY-MM-DD date argument, defaulting to today
pub fn parse_date_arg(date: Option<&str>) -> SpendlogResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
            SpendlogError::Validation(format!("invalid date '{}' (expected YYYY-MM-DD): {}", s, e))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Handle `spendlog add`
pub fn handle_add(
    ledger: &mut Ledger,
    amount: &str,
    category: &str,
    description: &str,
    date: Option<&str>,
) -> SpendlogResult<()> {
    let amount =
        Money::parse(amount).map_err(|e| SpendlogError::Validation(e.to_string()))?;
    let category = Category::from_str(category).unwrap_or_default();
    let date = parse_date_arg(date)?;

    let expense = Expense::new(date, amount, category, description);
    let count = ledger.add(expense.clone())?;

    println!("Recorded: {}", expense);
    println!(
        "Ledger now holds {} expense{}.",
        count,
        if count == 1 { "" } else { "s" }
    );
    Ok(())
}

/// Handle `spendlog summary`
pub fn handle_summary(
    ledger: &Ledger,
    period: SummaryPeriod,
    date: Option<&str>,
) -> SpendlogResult<()> {
    let anchor = parse_date_arg(date)?;
    let report = SummaryReport::generate(ledger, period.window(anchor));
    print!("{}", report.format_terminal());
    Ok(())
}

/// Handle `spendlog list`
pub fn handle_list(ledger: &Ledger) {
    print!("{}", format_expense_list(ledger.expenses()));
}
