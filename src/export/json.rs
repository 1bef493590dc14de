//! JSON export
//!
//! Writes the complete ledger as a schema-versioned JSON document.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TallyResult;
use crate::models::Transaction;

/// Schema version stamped into every export
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Layout version, bumped when the shape of this document changes
    pub schema_version: String,

    /// When the export was produced (UTC)
    pub exported_at: DateTime<Utc>,

    /// tally version that wrote the file
    pub app_version: String,

    /// Record count, duplicated here for quick inspection
    pub transaction_count: usize,

    /// All transactions in ledger order
    pub transactions: Vec<Transaction>,
}

/// Export the full ledger as pretty-printed JSON
pub fn export_full_json<W: Write>(writer: &mut W, transactions: &[Transaction]) -> TallyResult<()> {
    let export = FullExport {
        schema_version: EXPORT_SCHEMA_VERSION.to_string(),
        exported_at: Utc::now(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        transaction_count: transactions.len(),
        transactions: transactions.to_vec(),
    };

    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;

    Ok(())
}
