//! Interactive menu shell
//!
//! Presents the numbered three-item menu (add transaction, monthly
//! summary, exit) and drives the ledger from free-text prompts. The loop
//! is generic over its input and output streams so whole sessions can be
//! scripted in tests.
//!
//! The prompt wording and message strings match the legacy tracker, so
//! anyone migrating sees the exact interface they already know.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::TallyPaths;
use crate::error::{TallyError, TallyResult};
use crate::models::{Transaction, TransactionKind};
use crate::reports::MonthlyReport;
use crate::storage::Ledger;

/// Load the ledger, announce the result, and run the menu loop until exit
///
/// A missing data file is a normal first run. An unreadable one is
/// reported and the session continues with an empty ledger; the next save
/// rewrites the file, exactly as the legacy tracker recovered.
pub fn run_session<R: BufRead, W: Write>(
    paths: &TallyPaths,
    audit: &AuditLogger,
    input: &mut R,
    out: &mut W,
) -> TallyResult<()> {
    let data_file = paths.data_file();

    let mut ledger = if data_file.exists() {
        match Ledger::load(data_file) {
            Ok(ledger) => {
                writeln!(out, "Loaded transactions from file.")?;
                if let Err(err) = audit.log(&AuditEntry::load(ledger.len())) {
                    warn_audit(&err);
                }
                ledger
            }
            Err(err) => {
                writeln!(out, "Failed to load file: {}", err)?;
                Ledger::new(data_file)
            }
        }
    } else {
        writeln!(out, "No previous data found.")?;
        Ledger::new(data_file)
    };

    Shell::new(&mut ledger, audit).run(input, out)
}

/// Interactive menu session over a loaded ledger
pub struct Shell<'a> {
    ledger: &'a mut Ledger,
    audit: &'a AuditLogger,
}

impl<'a> Shell<'a> {
    /// Create a shell over a ledger and audit logger
    pub fn new(ledger: &'a mut Ledger, audit: &'a AuditLogger) -> Self {
        Self { ledger, audit }
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> TallyResult<()> {
        loop {
            writeln!(out)?;
            writeln!(out, "=== Tally Menu ===")?;
            writeln!(out, "1. Add Transaction")?;
            writeln!(out, "2. View Monthly Summary")?;
            writeln!(out, "3. Exit")?;

            let Some(choice) = prompt(input, out, "Choose an option: ")? else {
                // end of input behaves like exit, minus the farewell
                break;
            };

            // the choice is a number, so spellings like 03 still select
            match choice.parse::<u32>() {
                Ok(1) => self.add_transaction(input, out)?,
                Ok(2) => self.show_summary(out)?,
                Ok(3) => {
                    self.save_ledger(out)?;
                    writeln!(out, "Goodbye!")?;
                    break;
                }
                _ => writeln!(out, "Invalid choice.")?,
            }
        }

        Ok(())
    }

    /// Prompt for every field of one transaction, append it, and save
    ///
    /// The kind and category are lowercased; anything other than `income`
    /// counts as an expense. The amount re-prompts until it parses, and a
    /// bad or empty date falls back to today with a warning. Sign and
    /// range of the amount are not checked.
    fn add_transaction<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> TallyResult<()> {
        let Some(kind_raw) = prompt(input, out, "Enter type (income/expense): ")? else {
            return Ok(());
        };
        let kind = TransactionKind::parse(&kind_raw.to_lowercase());

        let category_prompt = match kind {
            TransactionKind::Income => "Enter category (salary/business): ",
            TransactionKind::Expense => "Enter category (food/rent/travel): ",
        };
        let Some(category) = prompt(input, out, category_prompt)? else {
            return Ok(());
        };
        let category = category.to_lowercase();

        let amount = loop {
            let Some(raw) = prompt(input, out, "Enter amount: ")? else {
                return Ok(());
            };
            match Decimal::from_str(&raw) {
                Ok(amount) => break amount,
                Err(_) => writeln!(out, "Invalid amount, try again.")?,
            }
        };

        let Some(description) = prompt(input, out, "Enter description (optional): ")? else {
            return Ok(());
        };

        let Some(date_raw) = prompt(input, out, "Enter date (yyyy-MM-dd) or 'today': ")? else {
            return Ok(());
        };
        let date = parse_date_or_today(&date_raw, out)?;

        let txn = Transaction::new(kind, category, amount, description, date);
        self.ledger.add(txn.clone());
        if let Err(err) = self.audit.log(&AuditEntry::add(&txn, self.ledger.len())) {
            warn_audit(&err);
        }

        self.save_ledger(out)?;
        writeln!(out, "Transaction added and saved.")?;
        Ok(())
    }

    /// Print the monthly summary for the whole ledger
    fn show_summary<W: Write>(&self, out: &mut W) -> TallyResult<()> {
        if self.ledger.is_empty() {
            writeln!(out, "No transactions available.")?;
            return Ok(());
        }

        let report = MonthlyReport::generate(self.ledger.transactions());
        write!(out, "{}", report.format_terminal())?;
        Ok(())
    }

    /// Write the ledger back to its file, reporting success or failure
    ///
    /// A failed save is reported and the session continues; the records
    /// are still in memory and the next save retries the write.
    fn save_ledger<W: Write>(&self, out: &mut W) -> TallyResult<()> {
        match self.ledger.save() {
            Ok(()) => {
                writeln!(out, "Transactions saved to file.")?;
                if let Err(err) = self.audit.log(&AuditEntry::save(self.ledger.len())) {
                    warn_audit(&err);
                }
            }
            Err(err) => writeln!(out, "Failed to save file: {}", err)?,
        }
        Ok(())
    }
}

/// Print a prompt, flush, and read one trimmed line
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> TallyResult<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Resolve a date answer: `today` (any case) or `YYYY-MM-DD`
///
/// Anything else, including an empty answer, warns and falls back to the
/// current local date.
fn parse_date_or_today<W: Write>(raw: &str, out: &mut W) -> TallyResult<NaiveDate> {
    if raw.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => {
            writeln!(out, "Invalid date. Using today.")?;
            Ok(Local::now().date_naive())
        }
    }
}

fn warn_audit(err: &TallyError) {
    eprintln!("warning: audit log write failed: {}", err);
}
