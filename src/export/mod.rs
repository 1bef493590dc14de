//! Export module for tally
//!
//! Provides ledger export functionality in multiple formats:
//! - CSV: spreadsheet-compatible, properly quoted
//! - JSON: machine-readable full ledger export with schema versioning

pub mod csv;
pub mod json;

pub use csv::export_transactions_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
