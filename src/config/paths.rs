//! Path management for tally
//!
//! Resolves where the ledger data file and its audit log live.
//!
//! ## Path Resolution Order
//!
//! 1. Explicit path (the `--file` command-line flag)
//! 2. `TALLY_FILE` environment variable (if set)
//! 3. `transactions.csv` in the current working directory
//!
//! The working-directory default keeps data files written by earlier
//! versions of the tracker readable without any migration step.

use std::path::{Path, PathBuf};

/// Default ledger filename in the working directory
pub const DEFAULT_DATA_FILE: &str = "transactions.csv";

/// Environment variable that overrides the data file location
pub const DATA_FILE_ENV: &str = "TALLY_FILE";

/// Manages all paths used by tally
#[derive(Debug, Clone)]
pub struct TallyPaths {
    /// The ledger data file
    data_file: PathBuf,
}

impl TallyPaths {
    /// Create a new TallyPaths instance
    ///
    /// Path resolution:
    /// 1. `TALLY_FILE` env var (explicit override)
    /// 2. `transactions.csv` in the current working directory
    pub fn new() -> Self {
        let data_file = std::env::var(DATA_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

        Self { data_file }
    }

    /// Create TallyPaths with an explicit data file (the `--file` flag, tests)
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Get the ledger data file path
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Get the audit log path, derived from the data file
    ///
    /// `transactions.csv` gets `transactions.audit.jsonl` next to it.
    pub fn audit_log(&self) -> PathBuf {
        self.data_file.with_extension("audit.jsonl")
    }
}

impl Default for TallyPaths {
    fn default() -> Self {
        Self::new()
    }
}
