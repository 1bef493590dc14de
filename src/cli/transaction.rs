//! CLI commands for recording and listing transactions
//!
//! Non-interactive counterparts of the menu shell: `tally add` appends
//! one transaction and saves, `tally list` prints a register view.

use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::audit::{AuditEntry, AuditLogger};
use crate::display::format_transaction_register;
use crate::error::{TallyError, TallyResult};
use crate::models::{Transaction, TransactionKind};
use crate::reports::MonthKey;
use crate::storage::Ledger;

/// Handle the `add` command
///
/// Applies the same coercions as the interactive shell: kind and category
/// are lowercased, anything other than `income` is an expense, and a bad
/// date falls back to today with a warning. A missing date means today.
/// The amount must parse as a decimal but its sign and range are not
/// checked.
pub fn handle_add_command(
    ledger: &mut Ledger,
    audit: &AuditLogger,
    kind: &str,
    category: &str,
    amount: &str,
    description: &str,
    date: Option<&str>,
) -> TallyResult<()> {
    let amount = Decimal::from_str(amount.trim())
        .map_err(|_| TallyError::validation(format!("Invalid amount: '{}'", amount)))?;

    let date = match date {
        None => Local::now().date_naive(),
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                println!("Invalid date. Using today.");
                Local::now().date_naive()
            }
        },
    };

    let txn = Transaction::new(
        TransactionKind::parse(&kind.trim().to_lowercase()),
        category.trim().to_lowercase(),
        amount,
        description,
        date,
    );

    ledger.add(txn.clone());
    if let Err(err) = audit.log(&AuditEntry::add(&txn, ledger.len())) {
        eprintln!("warning: audit log write failed: {}", err);
    }
    ledger.save()?;

    println!("Transaction added and saved.");
    Ok(())
}

/// Handle the `list` command
///
/// Optionally filters to one `YYYY-MM` month and keeps only the last
/// `limit` matching records (the ledger is insertion-ordered, so the last
/// records are the most recently added).
pub fn handle_list_command(
    ledger: &Ledger,
    month: Option<&str>,
    limit: Option<usize>,
) -> TallyResult<()> {
    let filtered: Vec<Transaction> = ledger
        .transactions()
        .iter()
        .filter(|txn| match month {
            Some(wanted) => MonthKey::from(txn.date).to_string() == wanted,
            None => true,
        })
        .cloned()
        .collect();

    let shown = match limit {
        Some(n) => &filtered[filtered.len().saturating_sub(n)..],
        None => &filtered[..],
    };

    print!("{}", format_transaction_register(shown));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_add_command_appends_and_saves() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.csv");
        let mut ledger = Ledger::new(&path);
        let audit = AuditLogger::new(dir.path().join("transactions.audit.jsonl"));

        handle_add_command(
            &mut ledger,
            &audit,
            "Income",
            "Salary",
            "1000.00",
            "January salary",
            Some("2024-01-15"),
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "2024-01-15,income,salary,1000.00,January salary\n");
        assert_eq!(audit.entry_count().unwrap(), 1);
    }

    #[test]
    fn test_add_command_rejects_unparseable_amount() {
        let dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(dir.path().join("transactions.csv"));
        let audit = AuditLogger::new(dir.path().join("transactions.audit.jsonl"));

        let err = handle_add_command(&mut ledger, &audit, "expense", "food", "abc", "", None)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_command_bad_date_falls_back_to_today() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.csv");
        let mut ledger = Ledger::new(&path);
        let audit = AuditLogger::new(dir.path().join("transactions.audit.jsonl"));

        handle_add_command(
            &mut ledger,
            &audit,
            "expense",
            "food",
            "5",
            "",
            Some("not-a-date"),
        )
        .unwrap();

        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, format!("{},expense,food,5,\n", today));
    }

    #[test]
    fn test_add_command_accepts_negative_amount() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.csv");
        let mut ledger = Ledger::new(&path);
        let audit = AuditLogger::new(dir.path().join("transactions.audit.jsonl"));

        handle_add_command(
            &mut ledger,
            &audit,
            "income",
            "salary",
            "-20",
            "",
            Some("2024-03-01"),
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "2024-03-01,income,salary,-20,\n");
    }

    #[test]
    fn test_list_command_runs_with_filters() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.csv");
        std::fs::write(
            &path,
            "2024-01-15,income,salary,1000.00,\n\
             2024-01-20,expense,food,12.50,lunch\n\
             2024-02-01,expense,rent,800,\n",
        )
        .unwrap();
        let ledger = Ledger::load(&path).unwrap();

        let january: Vec<Transaction> = ledger
            .transactions()
            .iter()
            .filter(|t| MonthKey::from(t.date).to_string() == "2024-01")
            .cloned()
            .collect();
        assert_eq!(january.len(), 2);

        handle_list_command(&ledger, Some("2024-01"), None).unwrap();
        handle_list_command(&ledger, None, Some(1)).unwrap();
    }
}
