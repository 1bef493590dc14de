//! CLI command for ledger export
//!
//! Exports the ledger to a file or stdout in CSV or JSON format.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::error::{TallyError, TallyResult};
use crate::export::{export_full_json, export_transactions_csv};
use crate::storage::Ledger;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Standard quoted CSV with a header row
    Csv,
    /// Full ledger export with schema versioning
    Json,
}

/// Handle the `export` command
///
/// With an output path the data goes to that file and a confirmation is
/// printed; without one it goes straight to stdout for piping.
pub fn handle_export_command(
    ledger: &Ledger,
    format: ExportFormat,
    output: Option<&Path>,
) -> TallyResult<()> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TallyError::Io(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&mut writer, ledger, format)?;
            writer.flush()?;

            println!(
                "Exported {} transaction(s) to: {}",
                ledger.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(&mut writer, ledger, format)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(writer: &mut W, ledger: &Ledger, format: ExportFormat) -> TallyResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(writer, ledger.transactions()),
        ExportFormat::Json => export_full_json(writer, ledger.transactions()),
    }
}
