//! Row types returned by the reporting services.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One point in a trend series: summed activity for a single bucket key.
///
/// Produced transiently for charting; never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PeriodBucket {
    pub bucket: NaiveDate,
    pub expense_total: f64,
    pub income_total: f64,
}

/// Per-category expense total with its share of the period's spending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub amount: f64,
    pub percentage: f64,
}
