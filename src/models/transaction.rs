//! Transaction model
//!
//! Represents a single income or expense record together with the
//! comma-separated line codec used by the flat-file store.
//!
//! Records are immutable once constructed; the ledger only ever appends.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in (salary, business, ...)
    Income,
    /// Money going out (food, rent, travel, ...)
    Expense,
}

impl TransactionKind {
    /// Classify a stored label
    ///
    /// Only the exact `income` label counts as income; every other value is
    /// an expense. Files written by the legacy tracker only ever contain
    /// lowercase labels, so no case-folding happens here. Interactive input
    /// is lowercased before it reaches this function.
    pub fn parse(label: &str) -> Self {
        match label {
            "income" => Self::Income,
            _ => Self::Expense,
        }
    }

    /// The canonical lowercase label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width specifiers in register output apply
        f.pad(self.as_str())
    }
}

/// Why a stored record line failed to decode
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// Fewer than the four mandatory fields were present
    #[error("record has only {found} of 4 required fields")]
    MissingField { found: usize },

    /// The date field was not a valid `YYYY-MM-DD` date
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    Date { value: String },

    /// The amount field was not a decimal number
    #[error("invalid amount '{value}'")]
    Amount { value: String },
}

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date (no time component)
    pub date: NaiveDate,

    /// Income or expense
    pub kind: TransactionKind,

    /// Free-form category label (e.g. `salary`, `food`, `rent`)
    pub category: String,

    /// Amount as entered; sign and range are deliberately not checked
    pub amount: Decimal,

    /// Free-text description, possibly empty
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Decimal,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            date,
            kind,
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Encode as one line of the flat-file store
    ///
    /// Format: `date,kind,category,amount,description`. Commas in the
    /// description become semicolons so the line keeps exactly five fields;
    /// no other field is escaped, so a comma in a category would corrupt
    /// the row. The amount keeps the scale it was entered with.
    pub fn to_record(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount,
            self.description.replace(',', ";")
        )
    }

    /// Decode one line of the flat-file store
    ///
    /// At least four comma-separated fields are required; the fifth
    /// (description) may be absent, and any tokens past the fifth are
    /// silently dropped. Semicolons in the description turn back into
    /// commas. An unknown kind label decodes as expense.
    pub fn from_record(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 4 {
            return Err(RecordError::MissingField {
                found: fields.len(),
            });
        }

        let date = NaiveDate::parse_from_str(fields[0], "%Y-%m-%d").map_err(|_| {
            RecordError::Date {
                value: fields[0].to_string(),
            }
        })?;
        let amount = Decimal::from_str(fields[3]).map_err(|_| RecordError::Amount {
            value: fields[3].to_string(),
        })?;

        Ok(Self {
            date,
            kind: TransactionKind::parse(fields[1]),
            category: fields[2].to_string(),
            amount,
            description: fields
                .get(4)
                .map_or_else(String::new, |d| d.replace(';', ",")),
        })
    }
}
