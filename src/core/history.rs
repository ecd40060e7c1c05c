//! Transaction history of a single account
//!
//! The history is append-only: transactions are kept in the order they were
//! recorded and are never reordered or removed. It is owned exclusively by
//! its account.

use crate::types::Transaction;
use std::slice;

/// Text used in place of the statement body when nothing was recorded
pub const EMPTY_HISTORY: &str = "No transactions recorded.";

/// Append-only, insertion-ordered list of transactions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    transactions: Vec<Transaction>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        History {
            transactions: Vec::new(),
        }
    }

    /// Append a transaction at the end of the history
    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Iterate over transactions in the order they were recorded
    pub fn iter(&self) -> slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Most recent transaction, if any
    pub fn last(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Render one line per transaction, oldest first
    ///
    /// Returns [`EMPTY_HISTORY`] when nothing was recorded.
    pub fn render(&self) -> String {
        if self.transactions.is_empty() {
            return EMPTY_HISTORY.to_string();
        }

        self.transactions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Transaction;
    type IntoIter = slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
