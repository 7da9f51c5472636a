//! Report generation over the expense ledger

pub mod summary;

pub use summary::{CategoryTotal, SummaryReport};
