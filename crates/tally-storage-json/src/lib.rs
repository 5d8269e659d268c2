//! Filesystem-backed JSON persistence for the transaction store.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tally_core::{CoreError, TransactionStore};
use tally_domain::Transaction;
use uuid::Uuid;

const TMP_SUFFIX: &str = "tmp";
const CURRENT_SCHEMA_VERSION: u8 = 1;

/// On-disk document wrapping the transaction set.
#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default = "StoreDocument::schema_version_default")]
    schema_version: u8,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl StoreDocument {
    fn empty() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            transactions: Vec::new(),
        }
    }

    fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

/// JSON-file transaction store.
///
/// A missing file reads as an empty transaction set, so a fresh path is a
/// valid empty store. Writes replace the whole document atomically via a
/// temporary file.
#[derive(Debug, Clone)]
pub struct JsonTransactionStore {
    path: PathBuf,
}

impl JsonTransactionStore {
    /// Opens a store at `path`, creating parent directories as needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| CoreError::StoreWrite(err.to_string()))?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<StoreDocument, CoreError> {
        if !self.path.exists() {
            return Ok(StoreDocument::empty());
        }
        let data =
            fs::read_to_string(&self.path).map_err(|err| CoreError::StoreRead(err.to_string()))?;
        serde_json::from_str(&data).map_err(|err| CoreError::StoreRead(err.to_string()))
    }

    fn write_document(&self, document: &StoreDocument) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(document)
            .map_err(|err| CoreError::StoreWrite(err.to_string()))?;
        write_atomic(&self.path, &json).map_err(|err| CoreError::StoreWrite(err.to_string()))
    }
}

impl TransactionStore for JsonTransactionStore {
    fn fetch_all(&self) -> Result<Vec<Transaction>, CoreError> {
        Ok(self.read_document()?.transactions)
    }

    fn insert(&self, transaction: &Transaction) -> Result<(), CoreError> {
        let mut document = self.read_document().map_err(as_write_error)?;
        document.transactions.push(transaction.clone());
        self.write_document(&document)
    }

    fn delete_by_id(&self, id: Uuid) -> Result<(), CoreError> {
        let mut document = self.read_document().map_err(as_write_error)?;
        document.transactions.retain(|txn| txn.id != id);
        self.write_document(&document)
    }
}

// The store contract promises mutation operations fail only with a write
// error, including the read leg of the read-modify-write.
fn as_write_error(err: CoreError) -> CoreError {
    match err {
        CoreError::StoreRead(message) => CoreError::StoreWrite(message),
        other => other,
    }
}

fn write_atomic(path: &Path, data: &str) -> std::io::Result<()> {
    let tmp = path.with_extension(TMP_SUFFIX);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.flush()?;
    }
    fs::rename(&tmp, path)
}
