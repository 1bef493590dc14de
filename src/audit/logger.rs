//! Append-only audit log
//!
//! One JSON object per line (JSONL). Every write appends and flushes, so
//! a crash mid-session loses at most the entry being written. Reads
//! tolerate stray blank lines but reject anything that does not parse.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{TallyError, TallyResult};

use super::entry::AuditEntry;

/// Reads and writes the JSONL audit log kept next to the data file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a logger over the given log file path
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }

    /// Append one entry and flush
    pub fn log(&self, entry: &AuditEntry) -> TallyResult<()> {
        let json = serde_json::to_string(entry)
            .map_err(|e| TallyError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| TallyError::Io(format!("Failed to open audit log: {}", e)))?;

        writeln!(file, "{}", json)
            .and_then(|_| file.flush())
            .map_err(|e| TallyError::Io(format!("Failed to write audit entry: {}", e)))?;

        Ok(())
    }

    /// All entries, oldest first
    ///
    /// A missing log file reads as no entries. Blank lines are skipped; a
    /// line that is not a valid entry is an error naming its 1-based line
    /// number.
    pub fn read_all(&self) -> TallyResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let raw = std::fs::read_to_string(&self.log_path)
            .map_err(|e| TallyError::Io(format!("Failed to read audit log: {}", e)))?;

        let mut entries = Vec::new();
        for (idx, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str(line).map_err(|e| {
                TallyError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    idx + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The most recent `count` entries, oldest of them first
    pub fn read_recent(&self, count: usize) -> TallyResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        Ok(entries.split_off(skip))
    }

    /// Number of entries currently in the log
    pub fn entry_count(&self) -> TallyResult<usize> {
        Ok(self.read_all()?.len())
    }

    /// Check if the audit log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// The audit log file path
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
