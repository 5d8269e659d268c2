//! Shared traits and period arithmetic for ledger primitives.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities held in the ledger.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// Reference-time window used to scope trend and breakdown reports.
#[derive(Default)]
pub enum Period {
    Week,
    #[default]
    Month,
    Year,
}

impl Period {
    /// First day of the window containing `reference`.
    ///
    /// Weeks start on Monday (ISO 8601). Months start on the 1st, years on
    /// January 1st. The convention is fixed; no locale lookup is involved.
    pub fn start_date(self, reference: NaiveDate) -> NaiveDate {
        match self {
            Period::Week => {
                let delta = reference.weekday().num_days_from_monday() as i64;
                reference - Duration::days(delta)
            }
            Period::Month => reference.with_day(1).unwrap(),
            Period::Year => NaiveDate::from_ymd_opt(reference.year(), 1, 1).unwrap(),
        }
    }

    /// Truncates `date` to the grouping key used by trend buckets.
    ///
    /// Week and month trends group by day; year trends group by month.
    pub fn bucket_key(self, date: NaiveDate) -> NaiveDate {
        match self {
            Period::Week | Period::Month => date,
            Period::Year => date.with_day(1).unwrap(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Period::Week => "Week",
            Period::Month => "Month",
            Period::Year => "Year",
        };
        f.write_str(label)
    }
}
