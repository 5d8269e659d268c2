use thiserror::Error;
use uuid::Uuid;

/// Failures surfaced by ledger operations and the store boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),
    #[error("Transaction not found: {0}")]
    NotFound(Uuid),
    #[error("Store read failed: {0}")]
    StoreRead(String),
    #[error("Store write failed: {0}")]
    StoreWrite(String),
}
