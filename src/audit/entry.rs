//! Audit log entries
//!
//! What goes into the log: which ledger operation ran, when, and the
//! ledger size it left behind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Ledger operations that appear in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Ledger was loaded from the data file
    Load,
    /// A transaction was appended
    Add,
    /// Ledger was written back to the data file
    Save,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Load => write!(f, "LOAD"),
            Operation::Add => write!(f, "ADD"),
            Operation::Save => write!(f, "SAVE"),
        }
    }
}

/// One line of the audit log
///
/// Add entries carry a snapshot of the transaction that was appended;
/// load and save entries only record the resulting ledger size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Wall-clock time of the operation (UTC)
    pub timestamp: DateTime<Utc>,

    /// The operation performed
    pub operation: Operation,

    /// Number of transactions in the ledger after the operation
    pub ledger_len: usize,

    /// Snapshot of the appended transaction (add operations only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Transaction>,
}

impl AuditEntry {
    /// Create an audit entry for an add operation
    pub fn add(txn: &Transaction, ledger_len: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Add,
            ledger_len,
            transaction: Some(txn.clone()),
        }
    }

    /// Create an audit entry for a load operation
    pub fn load(ledger_len: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Load,
            ledger_len,
            transaction: None,
        }
    }

    /// Create an audit entry for a save operation
    pub fn save(ledger_len: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Save,
            ledger_len,
            transaction: None,
        }
    }

    /// Render the entry for the `tally audit` listing
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} ({} transaction(s))",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.ledger_len
        );

        if let Some(txn) = &self.transaction {
            output.push_str(&format!(
                "\n  {} {} {} {:.2} {}",
                txn.date.format("%Y-%m-%d"),
                txn.kind,
                txn.category,
                txn.amount,
                txn.description
            ));
        }

        output
    }
}
