//! tally-core: shared types for the statement pipeline (transactions, categories, summaries)

pub mod error;
pub mod fmt;
pub mod summary;
pub mod transaction;

pub use error::{Error, Result};
pub use summary::{CategoryTotals, Summary};
pub use transaction::{Category, Direction, Transaction};
