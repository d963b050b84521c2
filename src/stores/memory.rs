//! A transaction store that keeps transactions in memory.

use crate::{
    Error,
    stores::{TransactionQuery, TransactionStore},
    transaction::Transaction,
};

/// A [TransactionStore] that keeps transactions in a plain list in memory.
///
/// Nothing is persisted, so the contents are gone once the store is dropped.
/// Useful for trying the application out without touching the file system,
/// and for tests.
#[derive(Debug, Default)]
pub struct MemoryTransactionStore {
    transactions: Vec<Transaction>,
}

impl MemoryTransactionStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn append(&mut self, transaction: Transaction) -> Result<Transaction, Error> {
        self.transactions.push(transaction.clone());

        Ok(transaction)
    }

    fn query(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error> {
        let transactions = self
            .transactions
            .iter()
            .filter(|transaction| match &query.date_range {
                Some(date_range) => date_range.contains(&transaction.date),
                None => true,
            })
            .cloned()
            .collect();

        Ok(transactions)
    }
}
