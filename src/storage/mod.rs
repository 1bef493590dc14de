//! Storage layer for tally
//!
//! Provides the flat-file ledger store: one encoded record per line,
//! rewritten in full on every save.

pub mod ledger;

pub use ledger::Ledger;
