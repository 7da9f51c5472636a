//! Core data models for spendlog
//!
//! This module contains the data structures that represent the expense
//! logging domain: monetary amounts, categories, expenses, and the date
//! windows summaries are computed over.

pub mod category;
pub mod expense;
pub mod money;
pub mod window;

pub use category::Category;
pub use expense::{Expense, LEDGER_FIELDS};
pub use money::Money;
pub use window::SummaryWindow;
