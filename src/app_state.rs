//! Defines the state shared between route handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, stores::TransactionStore};

/// The state shared between all route handlers.
///
/// Handlers take turns on the transaction store through a single mutex, which
/// keeps concurrent appends to the underlying file from interleaving.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<dyn TransactionStore + Send>>,
}

impl AppState {
    /// Create the app state from the store that holds the transactions.
    pub fn new(store: impl TransactionStore + Send + 'static) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Lock the transaction store for the duration of one operation.
    ///
    /// The trait object outlives the guard, so the bound is `'static` rather
    /// than the guard's own lifetime.
    pub(crate) fn lock_store(
        &self,
    ) -> Result<MutexGuard<'_, dyn TransactionStore + Send + 'static>, Error> {
        self.store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire the store lock: {error}"))
            .map_err(|_| Error::StoreLockError)
    }
}

#[cfg(test)]
mod app_state_tests {
    use time::macros::date;

    use crate::{
        AppState,
        stores::{MemoryTransactionStore, TransactionQuery},
        transaction::{Category, Transaction},
    };

    #[test]
    fn clones_share_the_same_store() {
        let state = AppState::new(MemoryTransactionStore::new());
        let clone = state.clone();

        state
            .lock_store()
            .expect("Could not lock store.")
            .append(Transaction::new(date!(2024 - 01 - 05), 1.0, Category::Income))
            .expect("Could not append transaction.");

        let transactions = clone
            .lock_store()
            .expect("Could not lock store.")
            .query(TransactionQuery::default())
            .expect("Could not query transactions.");
        assert_eq!(transactions.len(), 1);
    }

    #[test]
    fn one_guard_spans_an_append_and_a_query() {
        let state = AppState::new(MemoryTransactionStore::new());

        let mut store = state.lock_store().expect("Could not lock store.");
        store
            .append(Transaction::new(date!(2024 - 01 - 05), 1000.0, Category::Income))
            .expect("Could not append transaction.");
        let transactions = store
            .query(TransactionQuery::default())
            .expect("Could not query transactions.");

        assert_eq!(transactions.len(), 1);
    }
}
