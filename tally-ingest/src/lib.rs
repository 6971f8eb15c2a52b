//! tally-ingest: statement ingestion into typed transactions.

pub mod parsers;

pub use parsers::statement_csv::{load_transactions, parse_statement};
