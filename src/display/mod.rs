//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions for terminal display.

pub mod transaction;

pub use transaction::{format_transaction_register, format_transaction_row};
