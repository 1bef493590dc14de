//! Core data models for tally
//!
//! This module contains the transaction record, its kind enum, and the
//! line-record codec shared by the flat-file store.

pub mod transaction;

pub use transaction::{RecordError, Transaction, TransactionKind};
