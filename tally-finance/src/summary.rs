//! Aggregation of a categorized statement into a single `Summary`.

use tally_core::{CategoryTotals, Summary, Transaction};
use tracing::debug;

/// How many expenses the summary highlights
pub const TOP_EXPENSES: usize = 5;

/// Compute totals, per-category sums and the largest expenses.
///
/// Credits count as income and everything else as an expense. Every amount
/// also lands in its category bucket regardless of direction, so `Income`
/// shows up in `category_totals` next to the spending categories.
pub fn summarize(txns: &[Transaction]) -> Summary {
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    let mut category_totals = CategoryTotals::new();
    let mut expenses: Vec<&Transaction> = Vec::new();

    for txn in txns {
        if txn.is_income() {
            total_income += txn.amount;
        } else {
            total_expenses += txn.amount;
            expenses.push(txn);
        }
        category_totals.add(txn.category, txn.amount);
    }

    // Stable sort: equal amounts stay in input order
    expenses.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    let top_expenses = expenses
        .into_iter()
        .take(TOP_EXPENSES)
        .cloned()
        .collect();

    debug!(
        count = txns.len(),
        total_income,
        total_expenses,
        categories = category_totals.len(),
        "summarized statement"
    );

    Summary {
        total_income,
        total_expenses,
        net_balance: total_income - total_expenses,
        category_totals,
        top_expenses,
        transaction_count: txns.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category_rules::categorize_all;
    use chrono::NaiveDate;
    use tally_core::{Category, Direction};

    const EPS: f64 = 1e-9;

    fn txn(day: u32, desc: &str, amount: f64, kind: Direction) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        Transaction::new(date, desc, amount, kind)
    }

    fn categorized(mut txns: Vec<Transaction>) -> Vec<Transaction> {
        categorize_all(&mut txns);
        txns
    }

    #[test]
    fn test_grocery_and_payroll() {
        let txns = categorized(vec![
            txn(5, "Walmart Grocery", 54.23, Direction::Debit),
            txn(10, "Payroll Deposit", 2000.00, Direction::Credit),
        ]);
        let s = summarize(&txns);

        assert!((s.total_income - 2000.00).abs() < EPS);
        assert!((s.total_expenses - 54.23).abs() < EPS);
        assert!((s.net_balance - 1945.77).abs() < 1e-6);
        assert_eq!(s.transaction_count, 2);
        assert_eq!(s.category_totals.len(), 2);
        assert_eq!(s.category_totals.get(Category::Groceries), Some(54.23));
        assert_eq!(s.category_totals.get(Category::Income), Some(2000.00));
        assert_eq!(s.top_expenses.len(), 1);
        assert_eq!(s.top_expenses[0].description, "Walmart Grocery");
    }

    #[test]
    fn test_empty_input() {
        let s = summarize(&[]);
        assert_eq!(s.total_income, 0.0);
        assert_eq!(s.total_expenses, 0.0);
        assert_eq!(s.net_balance, 0.0);
        assert!(s.category_totals.is_empty());
        assert!(s.top_expenses.is_empty());
        assert_eq!(s.transaction_count, 0);
    }

    #[test]
    fn test_top_expenses_sorted_capped_and_stable() {
        let txns = categorized(vec![
            txn(1, "A", 10.0, Direction::Debit),
            txn(2, "B", 50.0, Direction::Debit),
            txn(3, "Salary", 9000.0, Direction::Credit),
            txn(4, "C", 30.0, Direction::Debit),
            txn(5, "D", 50.0, Direction::Debit),
            txn(6, "E", 5.0, Direction::Debit),
            txn(7, "F", 30.0, Direction::Debit),
            txn(8, "G", 1.0, Direction::Debit),
        ]);
        let s = summarize(&txns);
        let names: Vec<_> = s.top_expenses.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["B", "D", "C", "F", "A"]);
        assert!(s.top_expenses.iter().all(|t| t.is_expense()));
    }

    #[test]
    fn test_non_credit_types_are_expenses() {
        let txns = categorized(vec![
            txn(1, "Mystery charge", 12.0, Direction::parse("Pending")),
            txn(2, "credit lowercase", 8.0, Direction::parse("credit")),
        ]);
        let s = summarize(&txns);
        assert_eq!(s.total_income, 0.0);
        assert!((s.total_expenses - 20.0).abs() < EPS);
        assert_eq!(s.top_expenses.len(), 2);
    }

    #[test]
    fn test_income_category_counts_debits_too() {
        // A debit whose description hits an Income keyword still lands in Income
        let txns = categorized(vec![
            txn(1, "Refund reversal", 15.0, Direction::Debit),
            txn(2, "Amazon order", 40.0, Direction::Debit),
        ]);
        let s = summarize(&txns);
        assert_eq!(s.category_totals.get(Category::Income), Some(15.0));
        assert!((s.total_expenses - 55.0).abs() < EPS);
    }

    #[test]
    fn test_totals_balance() {
        let txns = categorized(vec![
            txn(1, "Kroger", 81.19, Direction::Debit),
            txn(2, "Uber", 23.5, Direction::Debit),
            txn(3, "Payroll", 2500.0, Direction::Credit),
            txn(4, "Refund from store", 19.99, Direction::Credit),
            txn(5, "Spotify", 10.99, Direction::Debit),
            txn(6, "XYZ Corp Invoice 9182", 300.0, Direction::Debit),
        ]);
        let s = summarize(&txns);
        assert!((s.category_totals.sum() - (s.total_income + s.total_expenses)).abs() < 1e-6);
        assert_eq!(s.net_balance, s.total_income - s.total_expenses);
        assert_eq!(s.category_totals.get(Category::Other), Some(300.0));
    }
}
