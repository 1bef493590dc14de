//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing in `main` with the core modules.

pub mod audit;
pub mod export;
pub mod report;
pub mod transaction;

pub use audit::handle_audit_command;
pub use export::{handle_export_command, ExportFormat};
pub use report::handle_summary_command;
pub use transaction::{handle_add_command, handle_list_command};
