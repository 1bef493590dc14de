//! Audit logging system for tally
//!
//! Records ledger operations (load, add, save) in an append-only audit
//! log kept next to the data file.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single entry with timestamp, operation, the resulting
//!   ledger size, and a snapshot of the appended transaction for adds.
//! - `AuditLogger`: writes entries to the log file using a line-delimited
//!   JSON format (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::add(&txn, ledger.len()))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
