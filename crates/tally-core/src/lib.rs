//! tally-core
//!
//! Ledger state and the reporting services behind the finance tracker.
//! Depends on tally-domain. No terminal I/O, no direct filesystem access;
//! persistence goes through the [`store::TransactionStore`] trait.

pub mod error;
pub mod filter_service;
pub mod ledger;
pub mod store;
pub mod summary_service;
pub mod time;
pub mod trend_service;

pub use error::CoreError;
pub use filter_service::FilterService;
pub use ledger::Ledger;
pub use store::TransactionStore;
pub use summary_service::SummaryService;
pub use time::{Clock, SystemClock};
pub use trend_service::TrendService;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("tally_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Tally core tracing initialized.");
    });
}
