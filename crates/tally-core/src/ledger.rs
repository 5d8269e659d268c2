//! In-memory ledger state kept in sync with the durable store.

use tally_domain::Transaction;
use uuid::Uuid;

use crate::error::CoreError;
use crate::store::TransactionStore;

/// Facade that coordinates the transaction snapshot, balance, and store access.
///
/// The snapshot always mirrors the last confirmed store read: mutations write
/// through to the store and then re-fetch rather than patching in memory, so
/// a failed store call leaves the previous snapshot intact. Mutations take
/// `&mut self`, which serialises writers; the derived-view services borrow
/// [`Ledger::snapshot`] immutably and may run concurrently over it.
pub struct Ledger {
    store: Box<dyn TransactionStore>,
    transactions: Vec<Transaction>,
    balance: f64,
}

impl Ledger {
    /// Creates an empty ledger over `store`. Call [`Ledger::load`] to populate it.
    pub fn new(store: Box<dyn TransactionStore>) -> Self {
        Self {
            store,
            transactions: Vec::new(),
            balance: 0.0,
        }
    }

    /// Replaces the snapshot with the store's current contents and recomputes
    /// the balance. On failure the previous snapshot is retained unchanged.
    pub fn load(&mut self) -> Result<(), CoreError> {
        let mut fetched = self.store.fetch_all()?;
        // Stable sort: same-date entries keep the store's order.
        fetched.sort_by(|a, b| b.date.cmp(&a.date));
        self.balance = fetched.iter().map(Transaction::signed_amount).sum();
        self.transactions = fetched;
        tracing::debug!(
            count = self.transactions.len(),
            balance = self.balance,
            "ledger reloaded"
        );
        Ok(())
    }

    /// Validates and persists `transaction`, then re-derives the snapshot.
    ///
    /// Validation failures reject the transaction before any store
    /// interaction; a failed write leaves the snapshot unchanged.
    pub fn add(&mut self, transaction: Transaction) -> Result<Uuid, CoreError> {
        validate(&transaction)?;
        let id = transaction.id;
        self.store.insert(&transaction)?;
        self.load()?;
        Ok(id)
    }

    /// Deletes the transaction with `id` from the store, then re-derives the
    /// snapshot.
    ///
    /// Fails with [`CoreError::NotFound`] before touching the store when the
    /// id is absent from the current snapshot.
    pub fn remove(&mut self, id: Uuid) -> Result<(), CoreError> {
        if self.transaction(id).is_none() {
            return Err(CoreError::NotFound(id));
        }
        self.store.delete_by_id(id)?;
        self.load()
    }

    /// Current balance: income minus expenses over the snapshot.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Read-only view of the snapshot, sorted by date descending.
    pub fn snapshot(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

fn validate(transaction: &Transaction) -> Result<(), CoreError> {
    // `!(x > 0.0)` also rejects NaN.
    if !(transaction.amount > 0.0) {
        return Err(CoreError::InvalidTransaction(format!(
            "amount must be positive, got {}",
            transaction.amount
        )));
    }
    if transaction.description.trim().is_empty() {
        return Err(CoreError::InvalidTransaction(
            "description must not be empty".into(),
        ));
    }
    Ok(())
}
