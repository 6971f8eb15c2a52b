//! Self-contained HTML report with embedded chart data.
//!
//! Chart datasets are plain serializable structs; the page hands them to
//! Chart.js (loaded from a CDN) on the client side.

use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use tally_core::fmt::grouped;
use tally_core::{Result, Summary, Transaction};

use crate::monthly::{monthly_top_expenses, round2, MonthlyTop};

/// File name the report is written under
pub const REPORT_FILENAME: &str = "finance_report.html";

const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Parallel labels/values, one chart dataset
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Series {
    fn push(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.values.push(value);
    }
}

/// Everything the client-side charts need
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartData {
    /// Spending categories, largest first, `Income` excluded
    pub categories: Series,
    pub income_vs_expenses: Series,
    /// Two most recent months, oldest first
    pub monthly: Vec<MonthlyTop>,
}

impl ChartData {
    pub fn build(summary: &Summary, txns: &[Transaction]) -> Self {
        let mut categories = Series::default();
        for (category, amount) in summary.expense_categories() {
            categories.push(category.label(), round2(amount));
        }

        let mut income_vs_expenses = Series::default();
        income_vs_expenses.push("Income", round2(summary.total_income));
        income_vs_expenses.push("Expenses", round2(summary.total_expenses));

        Self {
            categories,
            income_vs_expenses,
            monthly: monthly_top_expenses(txns),
        }
    }

    /// JSON safe to inline inside a `<script>` element
    pub fn to_script_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json.replace('<', "\\u003c"))
    }
}

/// Render the full HTML document.
pub fn render_html(summary: &Summary, txns: &[Transaction]) -> Result<String> {
    let data = ChartData::build(summary, txns).to_script_json()?;
    let net_class = if summary.net_balance >= 0.0 {
        "positive"
    } else {
        "negative"
    };

    let mut rows = String::new();
    for (i, txn) in summary.top_expenses.iter().enumerate() {
        // Writing to a String cannot fail
        let _ = writeln!(
            rows,
            "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"num\">${}</td></tr>",
            i + 1,
            txn.date.format("%Y-%m-%d"),
            escape_html(&txn.description),
            escape_html(txn.category.label()),
            grouped(txn.amount)
        );
    }

    let mut html = String::with_capacity(8 * 1024);
    html.push_str(HEAD);
    let _ = write!(
        html,
        r#"<body>
  <h1>Personal Finance Report</h1>
  <div class="cards">
    <div class="card"><span>Total Income</span><strong>${income}</strong></div>
    <div class="card"><span>Total Expenses</span><strong>${expenses}</strong></div>
    <div class="card"><span>Net Balance</span><strong class="{net_class}">${net}</strong></div>
    <div class="card"><span>Transactions</span><strong>{count}</strong></div>
  </div>
  <div class="grid">
    <section><h2>Spending by Category</h2><canvas id="categoryChart"></canvas></section>
    <section><h2>Income vs Expenses</h2><canvas id="incomeChart"></canvas></section>
  </div>
  <h2>Top Expenses by Month</h2>
  <div class="grid" id="monthly"></div>
  <section>
    <h2>Top 5 Largest Expenses</h2>
    <table>
      <thead><tr><th>#</th><th>Date</th><th>Description</th><th>Category</th><th class="num">Amount</th></tr></thead>
      <tbody>
{rows}      </tbody>
    </table>
  </section>
  <script src="{cdn}"></script>
  <script>
    const reportData = {data};
{script}  </script>
</body>
</html>
"#,
        income = grouped(summary.total_income),
        expenses = grouped(summary.total_expenses),
        net = grouped(summary.net_balance),
        count = summary.transaction_count,
        cdn = CHART_JS_CDN,
        script = SCRIPT,
    );
    Ok(html)
}

/// Write the report to `dir/filename`, replacing any previous file.
///
/// Returns the resolved path so the caller can open it.
pub fn write_html_report(
    summary: &Summary,
    txns: &[Transaction],
    dir: &Path,
    filename: &str,
) -> Result<PathBuf> {
    let html = render_html(summary, txns)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, html)?;
    let path = fs::canonicalize(&path)?;
    info!(path = %path.display(), "wrote HTML report");
    Ok(path)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Personal Finance Report</title>
  <style>
    body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 2rem auto; max-width: 1100px; color: #1f2933; background: #f5f7fa; }
    h1 { margin-bottom: 1rem; }
    h2 { font-size: 1.1rem; margin: 1.5rem 0 0.75rem; }
    .cards { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
    .card { background: #fff; border-radius: 8px; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
    .card span { display: block; color: #616e7c; font-size: 0.85rem; }
    .card strong { font-size: 1.4rem; }
    .positive { color: #2f9e44; }
    .negative { color: #e03131; }
    .grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
    section { background: #fff; border-radius: 8px; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
    table { width: 100%; border-collapse: collapse; }
    th, td { padding: 0.4rem 0.6rem; border-bottom: 1px solid #e4e7eb; text-align: left; }
    .num { text-align: right; font-variant-numeric: tabular-nums; }
  </style>
</head>
"#;

const SCRIPT: &str = r#"    const money = (v) => '$' + v.toLocaleString(undefined, { minimumFractionDigits: 2, maximumFractionDigits: 2 });
    const tooltip = { callbacks: { label: (ctx) => ctx.label + ': ' + money(ctx.parsed.x ?? ctx.parsed) } };

    new Chart(document.getElementById('categoryChart'), {
      type: 'doughnut',
      data: { labels: reportData.categories.labels, datasets: [{ data: reportData.categories.values }] },
      options: { plugins: { tooltip: { callbacks: { label: (ctx) => ctx.label + ': ' + money(ctx.parsed) } } } }
    });

    new Chart(document.getElementById('incomeChart'), {
      type: 'bar',
      data: {
        labels: reportData.income_vs_expenses.labels,
        datasets: [{ data: reportData.income_vs_expenses.values, backgroundColor: ['#2f9e44', '#e03131'] }]
      },
      options: { plugins: { legend: { display: false } } }
    });

    const monthly = document.getElementById('monthly');
    reportData.monthly.forEach((month) => {
      const section = document.createElement('section');
      const title = document.createElement('h2');
      title.textContent = month.label;
      const canvas = document.createElement('canvas');
      section.append(title, canvas);
      monthly.appendChild(section);
      new Chart(canvas, {
        type: 'bar',
        data: {
          labels: month.items.map((i) => i.description),
          datasets: [{ data: month.items.map((i) => i.amount), backgroundColor: '#4263eb' }]
        },
        options: { indexAxis: 'y', plugins: { legend: { display: false }, tooltip } }
      });
    });
"#;
