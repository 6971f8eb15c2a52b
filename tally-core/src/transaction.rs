//! Transaction record types loaded from a statement export

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// One row of a statement, annotated with its spending category
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Transaction {
    /// Date of the transaction (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Human-readable description, trimmed
    pub description: String,
    /// Always the magnitude; direction lives in `kind`
    pub amount: f64,
    /// Credit/Debit flag as it appeared in the export
    #[serde(rename = "type")]
    pub kind: Direction,
    /// Set by the categorizer; `Other` until then
    pub category: Category,
}

impl Transaction {
    /// Create an uncategorized transaction
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        kind: Direction,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            kind,
            category: Category::Other,
        }
    }

    /// Returns true if this row counts toward income
    pub fn is_income(&self) -> bool {
        self.kind.is_credit()
    }

    /// Everything that is not a credit is spending
    pub fn is_expense(&self) -> bool {
        !self.kind.is_credit()
    }
}

/// Direction of money movement.
///
/// The export is not validated: unknown values are kept verbatim in `Other`
/// and treated as expenses downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Credit,
    Debit,
    Other(String),
}

impl Direction {
    /// Parse the raw `Type` column. Matching is exact (case-sensitive).
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Credit" => Direction::Credit,
            "Debit" => Direction::Debit,
            other => Direction::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Direction::Credit => "Credit",
            Direction::Debit => "Debit",
            Direction::Other(s) => s,
        }
    }

    pub fn is_credit(&self) -> bool {
        matches!(self, Direction::Credit)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Spending categories assigned by keyword rules
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Groceries,
    Dining,
    Utilities,
    Transportation,
    Entertainment,
    Housing,
    Shopping,
    Income,
    Other,
}

impl Category {
    /// Display label used by reports and JSON output
    pub fn label(&self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Dining => "Dining",
            Category::Utilities => "Utilities",
            Category::Transportation => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Housing => "Housing",
            Category::Shopping => "Shopping",
            Category::Income => "Income",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse_keeps_unknown_values() {
        assert_eq!(Direction::parse(" Credit "), Direction::Credit);
        assert_eq!(Direction::parse("Debit"), Direction::Debit);
        assert_eq!(Direction::parse("credit"), Direction::Other("credit".to_string()));
        assert_eq!(Direction::parse("Refund").as_str(), "Refund");
    }

    #[test]
    fn test_only_credit_is_income() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let credit = Transaction::new(date, "Payroll", 10.0, Direction::Credit);
        let odd = Transaction::new(date, "Mystery", 10.0, Direction::parse("Transfer"));
        assert!(credit.is_income());
        assert!(odd.is_expense());
        assert_eq!(odd.category, Category::Other);
    }

    #[test]
    fn test_transaction_serializes_type_as_text() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let txn = Transaction::new(date, "Walmart", 54.23, Direction::Debit);
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "Debit");
        assert_eq!(json["date"], "2024-01-05");
        assert_eq!(json["category"], "Other");
    }
}
