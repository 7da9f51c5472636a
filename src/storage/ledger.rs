//! Expense ledger backed by a flat CSV file
//!
//! The ledger owns the in-memory list of expenses and the backing file.
//! Every mutation rewrites the whole file; the file and the in-memory list
//! hold the same records after each save.
//!
//! The file format is one CSV record per line, `date,amount,category,description`,
//! with RFC 4180 quoting so descriptions containing commas or quotes
//! round-trip intact.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Expense, Money, SummaryWindow};

use super::file_io::write_atomic;

/// Repository for expense persistence
pub struct Ledger {
    path: PathBuf,
    expenses: Vec<Expense>,
    skipped_lines: usize,
}

impl Ledger {
    /// Create an empty ledger backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            expenses: Vec::new(),
            skipped_lines: 0,
        }
    }

    /// Create a ledger and load existing records from disk
    pub fn open(path: impl Into<PathBuf>) -> SpendlogResult<Self> {
        let mut ledger = Self::new(path);
        ledger.load()?;
        Ok(ledger)
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load expenses from disk
    ///
    /// A missing file means an empty ledger. Records with the wrong field
    /// count or an unparseable date/amount are skipped; only I/O failures
    /// are errors. The number of skipped lines is available through
    /// [`skipped_lines`](Self::skipped_lines) afterwards.
    pub fn load(&mut self) -> SpendlogResult<()> {
        self.expenses.clear();
        self.skipped_lines = 0;

        if !self.path.exists() {
            return Ok(());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                SpendlogError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        for (index, result) in reader.records().enumerate() {
            let line = index + 1;
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    eprintln!("Warning: skipping line {}: {}", line, e);
                    self.skipped_lines += 1;
                    continue;
                }
            };

            match Expense::from_record(&record, line) {
                Ok(expense) => self.expenses.push(expense),
                Err(e) => {
                    eprintln!("Warning: {}", e);
                    self.skipped_lines += 1;
                }
            }
        }

        Ok(())
    }

    /// Save all expenses to disk, one record per line
    ///
    /// The whole file is rewritten and replaced atomically, so a crash
    /// mid-write leaves the previous contents intact.
    pub fn save(&self) -> SpendlogResult<()> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        for expense in &self.expenses {
            writer.write_record(&expense.to_record())?;
        }

        let buffer = writer
            .into_inner()
            .map_err(|e| SpendlogError::Storage(format!("Failed to serialize ledger: {}", e)))?;

        write_atomic(&self.path, &buffer)
    }

    /// Validate and add an expense, persisting the ledger
    ///
    /// Returns the new record count. If the save fails the expense is not
    /// kept in memory either, so file and list stay in step.
    pub fn add(&mut self, expense: Expense) -> SpendlogResult<usize> {
        expense.validate()?;
        self.expenses.push(expense);

        if let Err(e) = self.save() {
            self.expenses.pop();
            return Err(e);
        }

        Ok(self.expenses.len())
    }

    /// All expenses, in insertion (file) order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of expenses in the ledger
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if the ledger has no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Number of malformed lines skipped by the last load
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Sum of expense amounts whose dates fall within the window
    pub fn total_in(&self, window: &SummaryWindow) -> Money {
        self.expenses
            .iter()
            .filter(|e| window.contains(e.date))
            .map(|e| e.amount)
            .sum()
    }
}
