//! Defines the transaction store trait.

use std::ops::RangeInclusive;

use time::Date;

use crate::{Error, transaction::Transaction};

/// Handles the persistence and retrieval of transactions.
pub trait TransactionStore {
    /// Append `transaction` to the end of the store and return it.
    ///
    /// # Errors
    /// This function will return an [Error] if the transaction could not be
    /// written to the underlying storage.
    fn append(&mut self, transaction: Transaction) -> Result<Transaction, Error>;

    /// Retrieve transactions from the store in the way defined by `query`.
    ///
    /// Transactions are returned in the order they were appended.
    ///
    /// # Errors
    /// This function will return an [Error] if the underlying storage could
    /// not be read.
    fn query(&self, query: TransactionQuery) -> Result<Vec<Transaction>, Error>;
}

/// Defines which transactions should be fetched from [TransactionStore::query].
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Include transactions within `date_range` (inclusive at both ends).
    /// None returns every transaction.
    ///
    /// A range whose start is after its end contains no dates, so such a
    /// query matches nothing.
    pub date_range: Option<RangeInclusive<Date>>,
}
