//! Flat-file ledger store
//!
//! Manages loading and saving the transaction sequence to the data file,
//! one encoded record per line in insertion order.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;

/// The ordered transaction sequence plus its backing file
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            transactions: Vec::new(),
        }
    }

    /// Load a ledger from its data file
    ///
    /// A missing file is not an error: it yields an empty ledger, matching
    /// first-run behavior. A line that fails to decode aborts the whole
    /// load; no partially loaded ledger is ever returned. The error names
    /// the offending 1-based line number.
    pub fn load(path: impl Into<PathBuf>) -> TallyResult<Self> {
        let path = path.into();
        let mut transactions = Vec::new();

        if path.exists() {
            let file = File::open(&path)?;
            let reader = BufReader::new(file);

            for (idx, line) in reader.lines().enumerate() {
                let line = line?;
                let txn = Transaction::from_record(&line)
                    .map_err(|source| TallyError::record(idx + 1, source))?;
                transactions.push(txn);
            }
        }

        Ok(Self { path, transactions })
    }

    /// Save the ledger to its data file
    ///
    /// The file is rewritten in full on every save: one line per
    /// transaction in ledger order, each terminated by a newline. An empty
    /// ledger produces a zero-byte file. The rewrite happens in place, so
    /// a crash mid-write can truncate the file; that durability trade-off
    /// is part of the format's contract with the legacy tracker.
    pub fn save(&self) -> TallyResult<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        for txn in &self.transactions {
            writeln!(writer, "{}", txn.to_record())?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Append a transaction to the in-memory sequence
    ///
    /// Persistence is explicit: call [`save`](Self::save) afterwards.
    pub fn add(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the ledger holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The backing data file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
