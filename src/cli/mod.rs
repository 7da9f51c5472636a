//! CLI command handlers and the interactive menu

pub mod commands;
pub mod menu;

pub use commands::{handle_add, handle_list, handle_summary, SummaryPeriod};
pub use menu::run_menu;
