//! CLI command for the monthly summary report
//!
//! Prints the same per-month breakdown the interactive shell shows.

use crate::error::TallyResult;
use crate::reports::MonthlyReport;
use crate::storage::Ledger;

/// Handle the `summary` command
pub fn handle_summary_command(ledger: &Ledger) -> TallyResult<()> {
    if ledger.is_empty() {
        println!("No transactions available.");
        return Ok(());
    }

    let report = MonthlyReport::generate(ledger.transactions());
    print!("{}", report.format_terminal());
    Ok(())
}
