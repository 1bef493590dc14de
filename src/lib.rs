//! tally - Single-user personal finance ledger for the terminal
//!
//! This library provides the core functionality for the tally ledger:
//! recording income and expense transactions, persisting them to a
//! line-oriented flat file, and producing per-month summaries. The data
//! file format is byte-compatible with the legacy expense tracker, so
//! existing `transactions.csv` files keep working unchanged.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file and audit log path resolution
//! - `error`: Custom error types
//! - `models`: The transaction record and its line codec
//! - `storage`: Flat-file ledger store
//! - `reports`: Monthly aggregation
//! - `display`: Terminal register formatting
//! - `audit`: Append-only JSONL audit log
//! - `export`: CSV and JSON export
//! - `shell`: Interactive menu loop
//! - `cli`: Non-interactive command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::config::TallyPaths;
//! use tally::storage::Ledger;
//!
//! let paths = TallyPaths::new();
//! let ledger = Ledger::load(paths.data_file())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod shell;
pub mod storage;

pub use error::{TallyError, TallyResult};
