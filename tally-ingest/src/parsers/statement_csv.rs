//! Generic bank statement CSV parser
//!
//! Expected header (any column order, extra columns ignored):
//!   Date,Description,Amount,Type
//!   2024-01-05,Walmart Grocery,54.23,Debit
//!   2024-01-10,Payroll Deposit,2000.00,Credit

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

use tally_core::{Direction, Error, Result, Transaction};

const DATE: &str = "Date";
const DESCRIPTION: &str = "Description";
const AMOUNT: &str = "Amount";
const TYPE: &str = "Type";

/// Positions of the required columns in the header row
struct Columns {
    date: usize,
    description: usize,
    amount: usize,
    kind: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| Error::MissingColumn(name.to_string()))
        };
        Ok(Self {
            date: find(DATE)?,
            description: find(DESCRIPTION)?,
            amount: find(AMOUNT)?,
            kind: find(TYPE)?,
        })
    }
}

/// Load every transaction from a statement file, preserving row order.
///
/// A missing file is reported as `Error::FileNotFound`; any malformed row
/// aborts the whole load.
pub fn load_transactions(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;

    let txns = parse_statement(file)?;
    debug!(count = txns.len(), path = %path.display(), "loaded statement");
    Ok(txns)
}

/// Parse statement CSV from any reader.
pub fn parse_statement<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let mut txns = Vec::new();

    for result in rdr.records() {
        let record = result?;
        // Line 1 is the header
        let row = record
            .position()
            .map(|p| p.line())
            .unwrap_or(txns.len() as u64 + 2);
        txns.push(parse_row(&record, &columns, row)?);
    }

    Ok(txns)
}

fn parse_row(record: &StringRecord, columns: &Columns, row: u64) -> Result<Transaction> {
    let field = |idx: usize, name: &str| {
        record
            .get(idx)
            .map(str::trim)
            .ok_or_else(|| Error::parse(row, format!("missing value for column '{name}'")))
    };

    let date_str = field(columns.date, DATE)?;
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| Error::parse(row, format!("invalid date '{date_str}' (expected YYYY-MM-DD)")))?;

    let amount_str = field(columns.amount, AMOUNT)?;
    let amount: f64 = amount_str
        .parse()
        .map_err(|_| Error::parse(row, format!("invalid amount '{amount_str}'")))?;

    Ok(Transaction::new(
        date,
        field(columns.description, DESCRIPTION)?,
        amount,
        Direction::parse(field(columns.kind, TYPE)?),
    ))
}
