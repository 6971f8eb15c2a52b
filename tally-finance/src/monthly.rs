//! Per-month top expenses for the HTML report.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use tally_core::Transaction;
use tally_core::fmt::truncate;

/// Number of most recent months shown
pub const MONTHS_SHOWN: usize = 2;
/// Expenses listed per month
pub const PER_MONTH: usize = 5;
/// Chart labels are cut to this many characters
pub const DESCRIPTION_WIDTH: usize = 25;

/// The largest expenses of one calendar month
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyTop {
    /// Sortable key, e.g. "2024-03"
    pub key: String,
    /// Display label, e.g. "Mar 2024"
    pub label: String,
    pub items: Vec<MonthlyItem>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyItem {
    pub description: String,
    pub amount: f64,
}

/// Top expenses of the most recent months present in `txns`.
///
/// Recency is decided by the data, not the clock. Months come back oldest
/// first; within a month items are largest first, ties in input order.
pub fn monthly_top_expenses(txns: &[Transaction]) -> Vec<MonthlyTop> {
    let mut by_month: BTreeMap<(i32, u32), Vec<&Transaction>> = BTreeMap::new();
    for txn in txns.iter().filter(|t| t.is_expense()) {
        by_month
            .entry((txn.date.year(), txn.date.month()))
            .or_default()
            .push(txn);
    }

    let skip = by_month.len().saturating_sub(MONTHS_SHOWN);
    by_month
        .into_iter()
        .skip(skip)
        .map(|((year, month), mut items)| {
            items.sort_by(|a, b| b.amount.total_cmp(&a.amount));
            let key = format!("{year:04}-{month:02}");
            let label = NaiveDate::from_ymd_opt(year, month, 1)
                .map(|first| first.format("%b %Y").to_string())
                .unwrap_or_else(|| key.clone());
            MonthlyTop {
                key,
                label,
                items: items
                    .into_iter()
                    .take(PER_MONTH)
                    .map(|t| MonthlyItem {
                        description: truncate(&t.description, DESCRIPTION_WIDTH),
                        amount: round2(t.amount),
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Round to cents for chart data
pub fn round2(val: f64) -> f64 {
    (val * 100.0).round() / 100.0
}
