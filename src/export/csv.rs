//! CSV Export functionality
//!
//! Exports the ledger as standard quoted CSV. Unlike the line-record
//! store format, fields here survive embedded commas unchanged, so this
//! is the way to hand data to a spreadsheet.

use std::io::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::TallyResult;
use crate::models::{Transaction, TransactionKind};

/// Row shape for CSV export; field order fixes the column order
#[derive(Serialize)]
struct CsvRow<'a> {
    date: NaiveDate,
    kind: TransactionKind,
    category: &'a str,
    amount: &'a Decimal,
    description: &'a str,
}

/// Export all transactions to CSV with a header row
pub fn export_transactions_csv<W: Write>(
    writer: &mut W,
    transactions: &[Transaction],
) -> TallyResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if transactions.is_empty() {
        // serialize() only emits the header with the first record
        csv_writer.write_record(["date", "kind", "category", "amount", "description"])?;
    }

    for txn in transactions {
        csv_writer.serialize(CsvRow {
            date: txn.date,
            kind: txn.kind,
            category: &txn.category,
            amount: &txn.amount,
            description: &txn.description,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn txn(kind: TransactionKind, category: &str, amount: Decimal, description: &str) -> Transaction {
        Transaction::new(
            kind,
            category,
            amount,
            description,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_export_csv() {
        let transactions = vec![
            txn(TransactionKind::Income, "salary", dec!(1000.00), "January salary"),
            txn(TransactionKind::Expense, "food", dec!(12.5), "lunch"),
        ];

        let mut buf = Vec::new();
        export_transactions_csv(&mut buf, &transactions).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(
            output,
            "date,kind,category,amount,description\n\
             2024-01-15,income,salary,1000.00,January salary\n\
             2024-01-15,expense,food,12.5,lunch\n"
        );
    }

    #[test]
    fn test_export_csv_quotes_embedded_commas() {
        let transactions = vec![txn(
            TransactionKind::Expense,
            "food",
            dec!(12.5),
            "lunch, with friends",
        )];

        let mut buf = Vec::new();
        export_transactions_csv(&mut buf, &transactions).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"lunch, with friends\""));
    }

    #[test]
    fn test_export_csv_empty_ledger_still_has_header() {
        let mut buf = Vec::new();
        export_transactions_csv(&mut buf, &[]).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output, "date,kind,category,amount,description\n");
    }
}
