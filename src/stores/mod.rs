//! Contains the transaction store trait and its file and in-memory backends.

mod csv_file;
mod memory;
mod transaction;

pub use csv_file::{CSV_HEADER, CsvTransactionStore};
pub use memory::MemoryTransactionStore;
pub use transaction::{TransactionQuery, TransactionStore};
