//! Storage layer for spendlog
//!
//! Flat-file CSV storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod ledger;

pub use file_io::write_atomic;
pub use ledger::Ledger;
