//! tally-finance: keyword categorizer, aggregator, and text/HTML reports

pub mod category_rules;
pub mod html_report;
pub mod monthly;
pub mod summary;
pub mod text_report;

pub use category_rules::{categorize, categorize_all, categorize_with, CategoryRule, DEFAULT_RULES};
pub use html_report::{render_html, write_html_report, ChartData, Series, REPORT_FILENAME};
pub use monthly::{monthly_top_expenses, MonthlyTop};
pub use summary::summarize;
pub use text_report::render_text;
