//! Time-bucketed aggregation for trend charts.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tally_domain::{Period, PeriodBucket, Transaction, TransactionKind};

/// Groups period activity into ascending date buckets.
pub struct TrendService;

impl TrendService {
    /// Buckets the period's transactions by truncated date and sums expense
    /// and income amounts separately.
    ///
    /// Output is ascending by bucket key. Only keys present in the data are
    /// emitted; gaps are not filled with empty buckets. Empty input yields an
    /// empty series.
    pub fn buckets(
        transactions: &[Transaction],
        period: Period,
        today: NaiveDate,
    ) -> Vec<PeriodBucket> {
        let start = period.start_date(today);
        let mut grouped: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
        for txn in transactions.iter().filter(|txn| txn.date >= start) {
            let entry = grouped.entry(period.bucket_key(txn.date)).or_default();
            match txn.kind {
                TransactionKind::Expense => entry.0 += txn.amount,
                TransactionKind::Income => entry.1 += txn.amount,
            }
        }
        grouped
            .into_iter()
            .map(|(bucket, (expense_total, income_total))| PeriodBucket {
                bucket,
                expense_total,
                income_total,
            })
            .collect()
    }
}
