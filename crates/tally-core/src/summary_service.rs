//! Per-category expense aggregation for breakdown views.

use std::cmp::Ordering;

use chrono::NaiveDate;
use tally_domain::{Category, CategorySummary, Period, Transaction, TransactionKind};

/// Aggregates expense activity per category over a period.
pub struct SummaryService;

impl SummaryService {
    /// Sums the period's expenses per category and derives each category's
    /// share of the total.
    ///
    /// Categories with no spending are dropped. Rows sort descending by
    /// amount; the stable sort keeps ties in [`Category::ALL`] declaration
    /// order. When the period has no expenses at all the result is empty, and
    /// a zero total can never produce NaN or infinite percentages.
    pub fn breakdown(
        transactions: &[Transaction],
        period: Period,
        today: NaiveDate,
    ) -> Vec<CategorySummary> {
        let start = period.start_date(today);
        let in_period: Vec<&Transaction> = transactions
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Expense && txn.date >= start)
            .collect();

        let mut rows: Vec<CategorySummary> = Category::ALL
            .iter()
            .map(|&category| {
                let amount = in_period
                    .iter()
                    .filter(|txn| txn.category == category)
                    .map(|txn| txn.amount)
                    .sum();
                CategorySummary {
                    category,
                    amount,
                    percentage: 0.0,
                }
            })
            .filter(|row| row.amount > 0.0)
            .collect();

        let total: f64 = rows.iter().map(|row| row.amount).sum();
        if total > 0.0 {
            for row in &mut rows {
                row.percentage = row.amount / total * 100.0;
            }
        }
        rows.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
        rows
    }

    /// Expense total for the period; equals the sum of breakdown amounts.
    pub fn total_expenses(transactions: &[Transaction], period: Period, today: NaiveDate) -> f64 {
        let start = period.start_date(today);
        transactions
            .iter()
            .filter(|txn| txn.kind == TransactionKind::Expense && txn.date >= start)
            .map(|txn| txn.amount)
            .sum()
    }
}
