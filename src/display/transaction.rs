//! Terminal register formatting
//!
//! Renders transactions as fixed-width rows for `tally list`.

use crate::models::Transaction;

/// One register row: date, kind, category, amount, description
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{} {:<7} {} {:>10}  {}",
        txn.date.format("%Y-%m-%d"),
        txn.kind,
        truncate(&txn.category, 12),
        format!("{:.2}", txn.amount),
        txn.description
    )
}

/// A header line, a separator, and one row per transaction in the order given
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = format!(
        "{:<10} {:<7} {:<12} {:>10}  {}\n",
        "Date", "Kind", "Category", "Amount", "Description"
    );
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Pad to `max_len` columns, or cut with a `...` tail
///
/// Counts chars rather than bytes so a multibyte category never splits a
/// codepoint.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
