//! Expense display formatting
//!
//! Provides utilities for formatting expenses for terminal display.

use crate::models::Expense;

/// Format a single expense for display (register row)
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{} {:>10}  {:<12} {}",
        expense.date.format("%Y-%m-%d"),
        expense.amount.to_string(),
        truncate(expense.category.name(), 12),
        expense.description
    )
}

/// Format a list of expenses as a register, newest first
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:>10}  {:<12} {}\n",
        "Date", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    let mut sorted: Vec<&Expense> = expenses.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    for expense in sorted {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output.push_str(&"-".repeat(50));
    output.push('\n');
    output.push_str(&format!(
        "{} expense{}\n",
        expenses.len(),
        if expenses.len() == 1 { "" } else { "s" }
    ));

    output
}

/// Truncate a string to a maximum length in characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn lunch() -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Money::from_cents(1250),
            Category::Food,
            "lunch",
        )
    }

    #[test]
    fn test_format_expense_row() {
        let formatted = format_expense_row(&lunch());
        assert!(formatted.contains("2025-01-15"));
        assert!(formatted.contains("$12.50"));
        assert!(formatted.contains("food"));
        assert!(formatted.contains("lunch"));
    }

    #[test]
    fn test_format_empty_list() {
        let formatted = format_expense_list(&[]);
        assert!(formatted.contains("No expenses recorded"));
    }

    #[test]
    fn test_format_list_newest_first() {
        let older = Expense::new(
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            Money::from_cents(500),
            Category::Travel,
            "bus",
        );
        let formatted = format_expense_list(&[older, lunch()]);

        let newer_pos = formatted.find("2025-01-15").unwrap();
        let older_pos = formatted.find("2025-01-10").unwrap();
        assert!(newer_pos < older_pos);
        assert!(formatted.contains("2 expenses"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10).trim(), "short");
        let result = truncate("a very long category name", 10);
        assert!(result.len() <= 10);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_on_char_boundaries() {
        // The cut point must not split a multi-byte character
        let result = truncate("aaaaaaaa\u{e9}-longer", 12);
        assert_eq!(result.chars().count(), 12);
        assert!(result.ends_with("..."));

        // Short non-ASCII strings pass through padded
        assert_eq!(truncate("caf\u{e9}", 8).trim(), "caf\u{e9}");
    }

    #[test]
    fn test_format_list_with_non_ascii_category() {
        let exp = Expense::new(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Money::from_cents(900),
            Category::Other("caf\u{e9}-und-kuchen".into()),
            "afternoon treat",
        );

        let formatted = format_expense_list(&[exp]);
        assert!(formatted.contains("2025-01-15"));
        assert!(formatted.contains("afternoon treat"));
    }
}
