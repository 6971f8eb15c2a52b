//! Fixed-width console report.

use tally_core::Summary;
use tally_core::fmt::{fit, grouped, money};

/// Width of the header/footer rules
pub const WIDTH: usize = 55;
const DESCRIPTION_WIDTH: usize = 28;
/// Markers drawn for a 100% share
const BAR_MAX: f64 = 50.0;

/// Render the summary as console text (newline terminated).
///
/// Output depends only on `summary`, so rendering twice is byte-identical.
pub fn render_text(summary: &Summary) -> String {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);
    let mut lines: Vec<String> = Vec::new();

    lines.push(heavy.clone());
    lines.push("         PERSONAL FINANCE REPORT".to_string());
    lines.push(heavy.clone());

    lines.push(String::new());
    lines.push(format!("  Total Income:    {}", money(summary.total_income, 10)));
    lines.push(format!("  Total Expenses:  {}", money(summary.total_expenses, 10)));
    lines.push(format!("  Net Balance:     {}", money(summary.net_balance, 10)));
    lines.push(format!("  Transactions:    {:>10}", summary.transaction_count));

    lines.push(String::new());
    lines.push(light.clone());
    lines.push("  SPENDING BY CATEGORY".to_string());
    lines.push(light.clone());

    for (category, amount) in summary.expense_categories() {
        let pct = summary.expense_share(amount);
        // Negative amounts can push a share past 100%
        let bar = "#".repeat((pct / 2.0).clamp(0.0, BAR_MAX).floor() as usize);
        lines.push(format!(
            "  {:<16} {}  ({:5.1}%)  {}",
            category.label(),
            money(amount, 9),
            pct,
            bar
        ));
    }

    lines.push(String::new());
    lines.push(light.clone());
    lines.push("  TOP 5 LARGEST EXPENSES".to_string());
    lines.push(light);

    for (i, txn) in summary.top_expenses.iter().enumerate() {
        lines.push(format!(
            "  {}. {}  {} ${:>9}",
            i + 1,
            txn.date.format("%Y-%m-%d"),
            fit(&txn.description, DESCRIPTION_WIDTH),
            grouped(txn.amount)
        ));
    }

    lines.push(String::new());
    lines.push(heavy);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category_rules::categorize_all;
    use crate::summary::summarize;
    use chrono::NaiveDate;
    use tally_core::{Direction, Transaction};

    fn txn(m: u32, d: u32, desc: &str, amount: f64, kind: Direction) -> Transaction {
        Transaction::new(NaiveDate::from_ymd_opt(2024, m, d).unwrap(), desc, amount, kind)
    }

    fn report(mut txns: Vec<Transaction>) -> String {
        categorize_all(&mut txns);
        render_text(&summarize(&txns))
    }

    #[test]
    fn test_basic_report_layout() {
        let out = report(vec![
            txn(1, 5, "Walmart Grocery", 54.23, Direction::Debit),
            txn(1, 10, "Payroll Deposit", 2000.00, Direction::Credit),
        ]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "=".repeat(55));
        assert_eq!(lines[1], "         PERSONAL FINANCE REPORT");
        assert!(out.contains("  Total Income:    $  2,000.00\n"));
        assert!(out.contains("  Total Expenses:  $     54.23\n"));
        assert!(out.contains("  Net Balance:     $  1,945.77\n"));
        assert!(out.contains("  Transactions:             2\n"));
        assert!(out.contains(&format!(
            "  Groceries        $    54.23  (100.0%)  {}\n",
            "#".repeat(50)
        )));
        assert!(out.contains("  1. 2024-01-05  Walmart Grocery              $    54.23\n"));
        assert!(!out.contains("Income  "), "income bucket must not be listed");
        assert_eq!(*lines.last().unwrap(), "=".repeat(55));
    }

    #[test]
    fn test_empty_statement() {
        let out = report(Vec::new());
        assert!(out.contains("  Total Expenses:  $      0.00\n"));
        assert!(out.contains("  Transactions:             0\n"));
        let section = out
            .split("SPENDING BY CATEGORY")
            .nth(1)
            .unwrap();
        let rows_before_top = section
            .split("TOP 5 LARGEST EXPENSES")
            .next()
            .unwrap()
            .lines()
            .filter(|l| l.contains('$'))
            .count();
        assert_eq!(rows_before_top, 0);
        assert!(!out.contains("1. "));
    }

    #[test]
    fn test_categories_sorted_with_proportional_bars() {
        let out = report(vec![
            txn(2, 1, "Starbucks", 25.0, Direction::Debit),
            txn(2, 2, "Monthly Rent", 75.0, Direction::Debit),
        ]);
        let housing = out.find("  Housing").unwrap();
        let dining = out.find("  Dining").unwrap();
        assert!(housing < dining);
        assert!(out.contains(&format!("  Housing          $    75.00  ( 75.0%)  {}\n", "#".repeat(37))));
        assert!(out.contains(&format!("  Dining           $    25.00  ( 25.0%)  {}\n", "#".repeat(12))));
    }

    #[test]
    fn test_long_descriptions_truncated() {
        let out = report(vec![txn(
            3,
            1,
            "An extremely long description that keeps going",
            1234.5,
            Direction::Debit,
        )]);
        assert!(out.contains("  1. 2024-03-01  An extremely long descriptio $ 1,234.50\n"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut txns = vec![
            txn(1, 1, "Kroger", 80.0, Direction::Debit),
            txn(1, 2, "Shell", 40.0, Direction::Debit),
            txn(1, 3, "Salary", 3000.0, Direction::Credit),
        ];
        categorize_all(&mut txns);
        let summary = summarize(&txns);
        assert_eq!(render_text(&summary), render_text(&summary));
    }

    #[test]
    fn test_bar_capped_when_negative_debit_shrinks_expenses() {
        let out = report(vec![
            txn(1, 1, "Kroger", 1.0e6, Direction::Debit),
            txn(1, 2, "Uber refund", -999_999.0, Direction::Debit),
        ]);
        let groceries = out.lines().find(|l| l.starts_with("  Groceries")).unwrap();
        assert!(groceries.ends_with(&format!("  {}", "#".repeat(50))));
        assert!(out.len() < 4096);

        let huge = report(vec![
            txn(1, 1, "Kroger", 1.0e15, Direction::Debit),
            txn(1, 2, "Uber refund", -1.0e15 + 1.0, Direction::Debit),
        ]);
        assert!(huge.len() < 4096);
    }

    #[test]
    fn test_negative_net_balance() {
        let out = report(vec![txn(1, 1, "Rent", 1500.0, Direction::Debit)]);
        assert!(out.contains("  Net Balance:     $ -1,500.00\n"));
    }
}
