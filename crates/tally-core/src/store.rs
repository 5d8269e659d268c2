use tally_domain::Transaction;
use uuid::Uuid;

use crate::CoreError;

/// Abstraction over persistence backends that hold the durable transaction set.
///
/// No ordering guarantee is assumed from implementations; the ledger imposes
/// its own date-descending sort after every fetch. Mutating operations fail
/// with [`CoreError::StoreWrite`], reads with [`CoreError::StoreRead`].
pub trait TransactionStore: Send + Sync {
    /// Returns every stored transaction.
    fn fetch_all(&self) -> Result<Vec<Transaction>, CoreError>;

    /// Persists a new transaction.
    fn insert(&self, transaction: &Transaction) -> Result<(), CoreError>;

    /// Deletes the transaction with `id`. Deleting an absent id is a no-op.
    fn delete_by_id(&self, id: Uuid) -> Result<(), CoreError>;
}
