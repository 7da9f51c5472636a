//! Summary report
//!
//! Totals the expenses that fall inside a summary window, with a
//! per-category breakdown.

use std::collections::HashMap;

use crate::models::{Category, Money, SummaryWindow};
use crate::storage::Ledger;

/// Spending subtotal for one category
#[derive(Debug, Clone)]
pub struct CategoryTotal {
    /// The category
    pub category: Category,
    /// Total spending in this category
    pub total: Money,
    /// Number of expenses
    pub count: usize,
}

/// Summary of spending within a window
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// The window the report covers
    pub window: SummaryWindow,
    /// Total spending across all categories
    pub total: Money,
    /// Number of matching expenses
    pub count: usize,
    /// Per-category subtotals, largest first
    pub by_category: Vec<CategoryTotal>,
}

impl SummaryReport {
    /// Generate a summary for the given window
    ///
    /// A single O(n) pass over the ledger.
    pub fn generate(ledger: &Ledger, window: SummaryWindow) -> Self {
        let mut total = Money::zero();
        let mut count = 0;
        let mut per_category: HashMap<Category, (Money, usize)> = HashMap::new();

        for expense in ledger.expenses() {
            if !window.contains(expense.date) {
                continue;
            }

            total += expense.amount;
            count += 1;

            let entry = per_category
                .entry(expense.category.clone())
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let mut by_category: Vec<CategoryTotal> = per_category
            .into_iter()
            .map(|(category, (total, count))| CategoryTotal {
                category,
                total,
                count,
            })
            .collect();

        // Largest spending first; ties broken by name for stable output
        by_category.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.name().cmp(b.category.name()))
        });

        Self {
            window,
            total,
            count,
            by_category,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} summary ({})\n",
            self.window.label(),
            self.window
        ));
        output.push_str(&"-".repeat(44));
        output.push('\n');

        if self.count == 0 {
            output.push_str("No expenses in this period.\n");
            return output;
        }

        for entry in &self.by_category {
            output.push_str(&format!(
                "  {:<20} {:>10}  ({})\n",
                entry.category.to_string(),
                entry.total.to_string(),
                entry.count
            ));
        }

        output.push_str(&"-".repeat(44));
        output.push('\n');
        output.push_str(&format!(
            "  {:<20} {:>10}  ({} expense{})\n",
            "Total:",
            self.total.to_string(),
            self.count,
            if self.count == 1 { "" } else { "s" }
        ));

        output
    }
}
