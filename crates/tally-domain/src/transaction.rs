//! Domain model for ledger transactions.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::Category;
use crate::common::{Amounted, Displayable, Identifiable};

/// A single income or expense entry.
///
/// Immutable once created: the ledger only ever adds or removes whole
/// transactions, never edits fields in place. Dates carry day granularity;
/// no comparison in the engine uses time of day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub description: String,
    pub category: Category,
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        category: Category,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
            category,
            kind,
            date,
        }
    }

    /// Signed contribution to the ledger balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} [{}]", self.id, self.kind)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Whether a transaction adds to or subtracts from the balance.
pub enum TransactionKind {
    Expense,
    Income,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Expense => "Expense",
            TransactionKind::Income => "Income",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn signed_amount_follows_kind() {
        let income = Transaction::new(
            100.0,
            "Salary",
            Category::Other,
            TransactionKind::Income,
            date(2024, 5, 1),
        );
        let expense = Transaction::new(
            40.0,
            "Groceries",
            Category::Food,
            TransactionKind::Expense,
            date(2024, 5, 2),
        );
        assert_eq!(income.signed_amount(), 100.0);
        assert_eq!(expense.signed_amount(), -40.0);
    }

    #[test]
    fn new_assigns_unique_ids() {
        let a = Transaction::new(
            1.0,
            "a",
            Category::Other,
            TransactionKind::Expense,
            date(2024, 1, 1),
        );
        let b = Transaction::new(
            1.0,
            "b",
            Category::Other,
            TransactionKind::Expense,
            date(2024, 1, 1),
        );
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn transaction_survives_serde() {
        let txn = Transaction::new(
            12.5,
            "Bus ticket",
            Category::Transport,
            TransactionKind::Expense,
            date(2024, 6, 3),
        );
        let json = serde_json::to_string(&txn).expect("serialize");
        let back: Transaction = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, txn);
    }
}
