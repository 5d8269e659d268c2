use std::sync::Mutex;

use chrono::NaiveDate;
use tally_core::{CoreError, Ledger, TransactionStore};
use tally_domain::{Category, Transaction, TransactionKind};
use uuid::Uuid;

/// In-memory store double; rows live behind a mutex so the trait's `&self`
/// contract holds.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Transaction>>,
}

impl TransactionStore for MemoryStore {
    fn fetch_all(&self) -> Result<Vec<Transaction>, CoreError> {
        Ok(self.rows.lock().expect("lock rows").clone())
    }

    fn insert(&self, transaction: &Transaction) -> Result<(), CoreError> {
        self.rows.lock().expect("lock rows").push(transaction.clone());
        Ok(())
    }

    fn delete_by_id(&self, id: Uuid) -> Result<(), CoreError> {
        self.rows.lock().expect("lock rows").retain(|txn| txn.id != id);
        Ok(())
    }
}

/// Creates an empty ledger backed by a fresh in-memory store.
pub fn memory_ledger() -> Ledger {
    Ledger::new(Box::<MemoryStore>::default())
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn expense(amount: f64, description: &str, category: Category, day: NaiveDate) -> Transaction {
    Transaction::new(amount, description, category, TransactionKind::Expense, day)
}

pub fn income(amount: f64, description: &str, day: NaiveDate) -> Transaction {
    Transaction::new(
        amount,
        description,
        Category::Other,
        TransactionKind::Income,
        day,
    )
}
