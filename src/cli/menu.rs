//! Interactive menu loop
//!
//! The numbered menu that runs when spendlog is started without a
//! subcommand. Invalid input reprompts; file errors are printed and the
//! loop continues.

use std::io::{self, Write};
use std::str::FromStr;

use chrono::NaiveDate;

use crate::display::format_expense_list;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Category, Expense, Money};
use crate::reports::SummaryReport;
use crate::storage::Ledger;

use super::commands::SummaryPeriod;

/// Run the interactive menu loop until the user exits
pub fn run_menu(ledger: &mut Ledger) -> SpendlogResult<()> {
    println!();
    println!("spendlog - personal expense log");
    println!("Ledger: {}", ledger.path().display());
    if ledger.skipped_lines() > 0 {
        println!(
            "Note: {} malformed line(s) were skipped on load.",
            ledger.skipped_lines()
        );
    }

    loop {
        println!();
        println!("1. Add expense");
        println!("2. View summary");
        println!("3. View all expenses");
        println!("4. Exit");

        let choice = match prompt_string("Choice [1-4]: ") {
            Ok(choice) => choice,
            // Stdin closed; treat like exit
            Err(_) => break,
        };

        match choice.as_str() {
            "1" => {
                if let Err(e) = add_expense_flow(ledger) {
                    println!("Error: {}", e);
                }
            }
            "2" => {
                if let Err(e) = summary_flow(ledger) {
                    println!("Error: {}", e);
                }
            }
            "3" => {
                println!();
                print!("{}", format_expense_list(ledger.expenses()));
            }
            "4" => break,
            _ => println!("Invalid choice, enter a number from 1 to 4."),
        }
    }

    println!("Goodbye.");
    Ok(())
}

/// Prompt for a new expense and add it to the ledger
fn add_expense_flow(ledger: &mut Ledger) -> SpendlogResult<()> {
    let amount = loop {
        let input = prompt_string("Amount: ")?;
        match Money::parse(&input) {
            Ok(amount) if amount.is_positive() => break amount,
            Ok(_) => println!("Amount must be positive."),
            Err(e) => println!("{}", e),
        }
    };

    let category_input = prompt_string(&format!(
        "Category ({}) [other]: ",
        Category::SUGGESTED.join("/")
    ))?;
    let category = Category::from_str(&category_input).unwrap_or_default();

    let description = prompt_string("Description: ")?;

    let date = loop {
        let input = prompt_string("Date (YYYY-MM-DD) [today]: ")?;
        if input.is_empty() {
            break chrono::Local::now().date_naive();
        }
        match NaiveDate::parse_from_str(&input, "%Y-%m-%d") {
            Ok(date) => break date,
            Err(_) => println!("Invalid date, expected YYYY-MM-DD."),
        }
    };

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

/// Prompt for a summary period and print the report
fn summary_flow(ledger: &Ledger) -> SpendlogResult<()> {
    let period = loop {
        let input = prompt_string("Period (day/week/month): ")?;
        match input.to_lowercase().as_str() {
            "day" | "d" => break SummaryPeriod::Day,
            "week" | "w" => break SummaryPeriod::Week,
            "month" | "m" => break SummaryPeriod::Month,
            _ => println!("Enter day, week, or month."),
        }
    };

    let today = chrono::Local::now().date_naive();
    let report = SummaryReport::generate(ledger, period.window(today));
    println!();
    print!("{}", report.format_terminal());
    Ok(())
}

/// Prompt for a line of input, trimmed
///
/// Errors on closed stdin so reprompt loops cannot spin forever when input
/// is piped.
fn prompt_string(prompt: &str) -> SpendlogResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| SpendlogError::Io(e.to_string()))?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| SpendlogError::Io(e.to_string()))?;

    if bytes == 0 {
        return Err(SpendlogError::Io("unexpected end of input".into()));
    }

    Ok(input.trim().to_string())
}
