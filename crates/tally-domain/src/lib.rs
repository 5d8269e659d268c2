//! tally-domain
//!
//! Pure domain models for the finance tracker (Transaction, Category,
//! filter criteria, report rows). No I/O, no storage. Only data types
//! and core enums.

pub mod category;
pub mod common;
pub mod filter;
pub mod report;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use filter::*;
pub use report::*;
pub use transaction::*;
