//! Monthly Summary Report
//!
//! Aggregates the full ledger into per-month income/expense totals with
//! per-category subtotals and a net balance.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionKind};

/// Calendar month used to group transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl From<NaiveDate> for MonthKey {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Aggregates for a single calendar month
#[derive(Debug, Clone)]
pub struct MonthSummary {
    /// The month being summarized
    pub month: MonthKey,
    /// Sum of all income amounts
    pub income_total: Decimal,
    /// Sum of all expense amounts
    pub expense_total: Decimal,
    /// Per-category income subtotals, alphabetical
    pub income_by_category: BTreeMap<String, Decimal>,
    /// Per-category expense subtotals, alphabetical
    pub expense_by_category: BTreeMap<String, Decimal>,
}

impl MonthSummary {
    fn new(month: MonthKey) -> Self {
        Self {
            month,
            income_total: Decimal::ZERO,
            expense_total: Decimal::ZERO,
            income_by_category: BTreeMap::new(),
            expense_by_category: BTreeMap::new(),
        }
    }

    /// Net balance: income minus expenses
    ///
    /// Amounts are summed as stored, so a negative income entry lowers
    /// the net exactly as it did in the legacy tracker.
    pub fn net(&self) -> Decimal {
        self.income_total - self.expense_total
    }

    fn record(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionKind::Income => {
                self.income_total += txn.amount;
                *self
                    .income_by_category
                    .entry(txn.category.clone())
                    .or_insert(Decimal::ZERO) += txn.amount;
            }
            TransactionKind::Expense => {
                self.expense_total += txn.amount;
                *self
                    .expense_by_category
                    .entry(txn.category.clone())
                    .or_insert(Decimal::ZERO) += txn.amount;
            }
        }
    }
}

/// Month-by-month aggregation of the whole ledger
#[derive(Debug, Clone, Default)]
pub struct MonthlyReport {
    months: BTreeMap<MonthKey, MonthSummary>,
}

impl MonthlyReport {
    /// Generate the report from a transaction slice
    ///
    /// Every transaction lands in exactly one month bucket. Months come
    /// out in chronological order and categories in alphabetical order.
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut months: BTreeMap<MonthKey, MonthSummary> = BTreeMap::new();

        for txn in transactions {
            let key = MonthKey::from(txn.date);
            months
                .entry(key)
                .or_insert_with(|| MonthSummary::new(key))
                .record(txn);
        }

        Self { months }
    }

    /// Summaries in chronological month order
    pub fn months(&self) -> impl Iterator<Item = &MonthSummary> {
        self.months.values()
    }

    /// Look up a single month
    pub fn month(&self, key: MonthKey) -> Option<&MonthSummary> {
        self.months.get(&key)
    }

    /// Number of months with at least one transaction
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Check if the report covers no months at all
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Format the report for terminal display
    ///
    /// One block per month: income total, income categories indented by
    /// two spaces, expense total, expense categories, net balance. All
    /// amounts print with two decimal places.
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        for summary in self.months.values() {
            output.push_str(&format!("\n--- {} Summary ---\n", summary.month));

            output.push_str(&format!("Total Income: {:.2}\n", summary.income_total));
            for (category, subtotal) in &summary.income_by_category {
                output.push_str(&format!("  {}: {:.2}\n", category, subtotal));
            }

            output.push_str(&format!("Total Expense: {:.2}\n", summary.expense_total));
            for (category, subtotal) in &summary.expense_by_category {
                output.push_str(&format!("  {}: {:.2}\n", category, subtotal));
            }

            output.push_str(&format!("Net Balance: {:.2}\n", summary.net()));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn txn(date: &str, kind: TransactionKind, category: &str, amount: Decimal) -> Transaction {
        Transaction::new(
            kind,
            category,
            amount,
            "",
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
    }

    #[test]
    fn test_month_key_display_pads() {
        let key = MonthKey::from(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(key.to_string(), "2024-03");
    }

    #[test]
    fn test_month_key_ordering() {
        let a = MonthKey { year: 2023, month: 12 };
        let b = MonthKey { year: 2024, month: 1 };
        let c = MonthKey { year: 2024, month: 2 };
        assert!(a < b && b < c);
    }

    #[test]
    fn test_generate_groups_by_month() {
        let transactions = vec![
            txn("2024-01-15", TransactionKind::Income, "salary", dec!(1000.00)),
            txn("2024-01-20", TransactionKind::Expense, "food", dec!(200.00)),
            txn("2024-02-02", TransactionKind::Expense, "rent", dec!(800.00)),
        ];

        let report = MonthlyReport::generate(&transactions);
        assert_eq!(report.len(), 2);

        let jan = report.month(MonthKey { year: 2024, month: 1 }).unwrap();
        assert_eq!(jan.income_total, dec!(1000.00));
        assert_eq!(jan.expense_total, dec!(200.00));
        assert_eq!(jan.net(), dec!(800.00));

        let feb = report.month(MonthKey { year: 2024, month: 2 }).unwrap();
        assert_eq!(feb.income_total, Decimal::ZERO);
        assert_eq!(feb.net(), dec!(-800.00));
    }

    #[test]
    fn test_same_category_accumulates_within_kind() {
        let transactions = vec![
            txn("2024-01-05", TransactionKind::Expense, "food", dec!(10.50)),
            txn("2024-01-09", TransactionKind::Expense, "food", dec!(4.50)),
            txn("2024-01-12", TransactionKind::Income, "food", dec!(3.00)),
        ];

        let report = MonthlyReport::generate(&transactions);
        let jan = report.month(MonthKey { year: 2024, month: 1 }).unwrap();

        // the same label is tracked separately per kind
        assert_eq!(jan.expense_by_category["food"], dec!(15.00));
        assert_eq!(jan.income_by_category["food"], dec!(3.00));
    }

    #[test]
    fn test_repeated_category_totals_in_one_month() {
        let transactions = vec![
            txn("2024-01-01", TransactionKind::Income, "salary", dec!(100.00)),
            txn("2024-01-15", TransactionKind::Income, "salary", dec!(50.00)),
            txn("2024-01-20", TransactionKind::Expense, "food", dec!(30.00)),
        ];

        let formatted = MonthlyReport::generate(&transactions).format_terminal();
        assert!(formatted.contains("Total Income: 150.00"));
        assert!(formatted.contains("  salary: 150.00"));
        assert!(formatted.contains("Total Expense: 30.00"));
        assert!(formatted.contains("  food: 30.00"));
        assert!(formatted.contains("Net Balance: 120.00"));
    }

    #[test]
    fn test_negative_amounts_flow_into_totals() {
        let transactions = vec![
            txn("2024-01-05", TransactionKind::Income, "salary", dec!(-20)),
            txn("2024-01-09", TransactionKind::Expense, "food", dec!(30)),
        ];

        let report = MonthlyReport::generate(&transactions);
        let jan = report.month(MonthKey { year: 2024, month: 1 }).unwrap();
        assert_eq!(jan.income_total, dec!(-20));
        assert_eq!(jan.net(), dec!(-50));
    }

    #[test]
    fn test_format_terminal_layout() {
        let transactions = vec![
            txn("2024-01-15", TransactionKind::Income, "salary", dec!(1000.00)),
            txn("2024-01-20", TransactionKind::Expense, "food", dec!(300)),
            txn("2024-01-25", TransactionKind::Expense, "rent", dec!(200)),
        ];

        let formatted = MonthlyReport::generate(&transactions).format_terminal();
        let expected = "\n--- 2024-01 Summary ---\n\
                        Total Income: 1000.00\n\
                        \x20 salary: 1000.00\n\
                        Total Expense: 500.00\n\
                        \x20 food: 300.00\n\
                        \x20 rent: 200.00\n\
                        Net Balance: 500.00\n";
        assert_eq!(formatted, expected);
    }

    #[test]
    fn test_format_terminal_months_in_order() {
        let transactions = vec![
            txn("2024-02-01", TransactionKind::Expense, "rent", dec!(800)),
            txn("2023-12-31", TransactionKind::Income, "salary", dec!(100)),
        ];

        let report = MonthlyReport::generate(&transactions);
        let keys: Vec<String> = report.months().map(|s| s.month.to_string()).collect();
        assert_eq!(keys, vec!["2023-12", "2024-02"]);

        let formatted = report.format_terminal();
        let dec_pos = formatted.find("2023-12").unwrap();
        let feb_pos = formatted.find("2024-02").unwrap();
        assert!(dec_pos < feb_pos);
    }

    #[test]
    fn test_empty_report() {
        let report = MonthlyReport::generate(&[]);
        assert!(report.is_empty());
        assert_eq!(report.format_terminal(), "");
    }
}
