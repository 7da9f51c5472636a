use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{handle_add, handle_list, handle_summary, run_menu, SummaryPeriod};
use spendlog::config::SpendlogPaths;
use spendlog::storage::Ledger;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Personal expense logging from the command line",
    long_about = "spendlog records dated expenses (amount, category, description) \
                  in a flat CSV ledger and reports daily, weekly, and monthly \
                  totals. Run without a subcommand for the interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g. 12.50)
        amount: String,
        /// Category (food/travel/utilities, or free text)
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Show a spending summary
    Summary {
        /// Period to summarize
        #[arg(value_enum)]
        period: SummaryPeriod,
        /// Anchor date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// List all recorded expenses, newest first
    List,

    /// Show resolved paths and ledger status
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendlogPaths::new()?;
    paths.ensure_directories()?;

    let mut ledger = Ledger::open(paths.ledger_file())?;

    match cli.command {
        Some(Commands::Add {
            amount,
            category,
            description,
            date,
        }) => {
            handle_add(&mut ledger, &amount, &category, &description, date.as_deref())?;
        }
        Some(Commands::Summary { period, date }) => {
            handle_summary(&ledger, period, date.as_deref())?;
        }
        Some(Commands::List) => {
            handle_list(&ledger);
        }
        Some(Commands::Config) => {
            println!("spendlog configuration");
            println!("======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Expenses:       {}", ledger.len());
            if ledger.skipped_lines() > 0 {
                println!("Skipped lines:  {}", ledger.skipped_lines());
            }
        }
        None => {
            run_menu(&mut ledger)?;
        }
    }

    Ok(())
}
