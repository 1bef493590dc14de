use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::audit::AuditLogger;
use tally::cli::{
    handle_add_command, handle_audit_command, handle_export_command, handle_list_command,
    handle_summary_command, ExportFormat,
};
use tally::config::TallyPaths;
use tally::shell;
use tally::storage::Ledger;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Single-user personal finance ledger for the terminal",
    long_about = "tally records income and expense transactions in a plain text \
                  file and summarizes them month by month. Run it without a \
                  subcommand for the interactive menu the legacy tracker had."
)]
struct Cli {
    /// Ledger file (defaults to $TALLY_FILE, then transactions.csv in the working directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record one transaction without entering the menu
    Add {
        /// income or expense (anything other than income counts as expense)
        #[arg(short, long)]
        kind: String,
        /// Category label (e.g. salary, food, rent)
        #[arg(short, long)]
        category: String,
        /// Amount (e.g. "42.50"; sign and range are not checked)
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// List recorded transactions as a register
    List {
        /// Only show one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Show at most N transactions (most recently added)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the monthly income/expense summary
    Summary,

    /// Export the ledger
    Export {
        /// Export format
        #[arg(short = 'F', long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.file {
        Some(file) => TallyPaths::with_data_file(file),
        None => TallyPaths::new(),
    };
    let audit = AuditLogger::new(paths.audit_log());

    match cli.command {
        None => {
            // no subcommand: the interactive menu, like the legacy tracker
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            shell::run_session(&paths, &audit, &mut input, &mut out)?;
        }
        Some(Commands::Add {
            kind,
            category,
            amount,
            description,
            date,
        }) => {
            let mut ledger = Ledger::load(paths.data_file())?;
            handle_add_command(
                &mut ledger,
                &audit,
                &kind,
                &category,
                &amount,
                &description,
                date.as_deref(),
            )?;
        }
        Some(Commands::List { month, limit }) => {
            let ledger = Ledger::load(paths.data_file())?;
            handle_list_command(&ledger, month.as_deref(), limit)?;
        }
        Some(Commands::Summary) => {
            let ledger = Ledger::load(paths.data_file())?;
            handle_summary_command(&ledger)?;
        }
        Some(Commands::Export { format, output }) => {
            let ledger = Ledger::load(paths.data_file())?;
            handle_export_command(&ledger, format, output.as_deref())?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&audit, limit)?;
        }
    }

    Ok(())
}
