//! Reports module for tally
//!
//! Provides the monthly income/expense summary over the whole ledger.

pub mod monthly;

pub use monthly::{MonthKey, MonthSummary, MonthlyReport};
