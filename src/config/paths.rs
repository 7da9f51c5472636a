//! Path management for spendlog
//!
//! Provides XDG-compliant path resolution for the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `SPENDLOG_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_DATA_HOME/spendlog` or `~/.local/share/spendlog`
//! 3. Windows: `%APPDATA%\spendlog`

use std::path::PathBuf;

use crate::error::SpendlogError;

/// Manages all paths used by spendlog
#[derive(Debug, Clone)]
pub struct SpendlogPaths {
    /// Base directory for all spendlog data
    base_dir: PathBuf,
}

impl SpendlogPaths {
    /// Create a new SpendlogPaths instance
    ///
    /// Path resolution:
    /// 1. `SPENDLOG_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_DATA_HOME/spendlog` or `~/.local/share/spendlog`
    /// 3. Windows: `%APPDATA%\spendlog`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SpendlogError> {
        let base_dir = if let Ok(custom) = std::env::var("SPENDLOG_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SpendlogPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the expense ledger file
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("expenses.csv")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), SpendlogError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SpendlogError::Io(format!("Failed to create data directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SpendlogError> {
    // Unix (Linux/macOS): Use XDG_DATA_HOME if set, otherwise ~/.local/share
    let data_base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".local").join("share"))
                .map_err(|_| SpendlogError::Config("HOME environment variable not set".into()))
        })?;
    Ok(data_base.join("spendlog"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SpendlogError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SpendlogError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("spendlog"))
}
