//! Predicate-based narrowing of the transaction list.

use chrono::NaiveDate;
use tally_domain::{DateRange, FilterCriteria, KindFilter, Transaction, TransactionKind};

/// Applies [`FilterCriteria`] to a transaction snapshot.
pub struct FilterService;

impl FilterService {
    /// Returns the transactions matching every criterion, preserving input
    /// order.
    ///
    /// `today` is the reference date for the open-ended date ranges; callers
    /// supply it (usually via [`crate::Clock::today`]) so results stay
    /// reproducible under test.
    pub fn apply<'a>(
        transactions: &'a [Transaction],
        criteria: &FilterCriteria,
        today: NaiveDate,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|txn| Self::matches(txn, criteria, today))
            .collect()
    }

    /// Evaluates a single transaction against the criteria.
    pub fn matches(transaction: &Transaction, criteria: &FilterCriteria, today: NaiveDate) -> bool {
        Self::matches_search(transaction, &criteria.search_text)
            && Self::matches_kind(transaction, criteria.kind)
            && criteria
                .category
                .map_or(true, |category| transaction.category == category)
            && Self::matches_date(transaction, criteria.date_range, today)
    }

    fn matches_search(transaction: &Transaction, search: &str) -> bool {
        if search.is_empty() {
            return true;
        }
        transaction
            .description
            .to_lowercase()
            .contains(&search.to_lowercase())
    }

    fn matches_kind(transaction: &Transaction, kind: KindFilter) -> bool {
        match kind {
            KindFilter::All => true,
            KindFilter::Expenses => transaction.kind == TransactionKind::Expense,
            KindFilter::Income => transaction.kind == TransactionKind::Income,
        }
    }

    fn matches_date(transaction: &Transaction, range: DateRange, today: NaiveDate) -> bool {
        match range.period() {
            // Open-ended: no upper bound is applied.
            Some(period) => transaction.date >= period.start_date(today),
            None => true,
        }
    }
}
