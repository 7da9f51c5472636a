//! spendlog - personal expense logging from the command line
//!
//! This library provides the core functionality for the spendlog CLI:
//! a flat-file expense ledger with daily, weekly, and monthly summaries.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the data directory
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, windows)
//! - `storage`: CSV file storage layer with atomic writes
//! - `reports`: Summary aggregation over date windows
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::config::SpendlogPaths;
//! use spendlog::storage::Ledger;
//!
//! let paths = SpendlogPaths::new()?;
//! let ledger = Ledger::open(paths.ledger_file())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{SpendlogError, SpendlogResult};
