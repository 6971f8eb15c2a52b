//! Error types for the statement pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File '{}' not found.", .0.display())]
    FileNotFound(PathBuf),

    #[error("Parse error at row {row}: {message}")]
    Parse { row: u64, message: String },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn parse(row: u64, message: impl Into<String>) -> Self {
        Error::Parse {
            row,
            message: message.into(),
        }
    }

    /// True for malformed input (as opposed to a missing file or I/O failure)
    pub fn is_parse(&self) -> bool {
        match self {
            Error::Parse { .. } | Error::MissingColumn(_) => true,
            Error::Csv(e) => !e.is_io_error(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
