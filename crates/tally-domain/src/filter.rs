//! Criteria for narrowing the transaction list.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::common::Period;

/// Caller-supplied filter configuration.
///
/// A plain value: the filter engine receives it per query and owns no state
/// between calls. `Default` is the neutral criteria that matches every
/// transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub kind: KindFilter,
    pub category: Option<Category>,
    pub date_range: DateRange,
}

impl FilterCriteria {
    pub fn with_search(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    pub fn with_kind(mut self, kind: KindFilter) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Narrows the list by transaction kind.
#[derive(Default)]
pub enum KindFilter {
    #[default]
    All,
    Expenses,
    Income,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Open-ended "since the start of" window, relative to a reference date.
#[derive(Default)]
pub enum DateRange {
    Week,
    Month,
    Year,
    #[default]
    All,
}

impl DateRange {
    /// The period window backing the range, if it is bounded.
    pub fn period(self) -> Option<Period> {
        match self {
            DateRange::Week => Some(Period::Week),
            DateRange::Month => Some(Period::Month),
            DateRange::Year => Some(Period::Year),
            DateRange::All => None,
        }
    }
}
