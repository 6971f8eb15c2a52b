//! Aggregate results consumed by the text and HTML reports

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::transaction::{Category, Transaction};

/// Totals derived from one categorized statement
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Always `total_income - total_expenses`
    pub net_balance: f64,
    /// Raw amount per category, income included
    pub category_totals: CategoryTotals,
    /// Up to 5 largest expenses, descending, ties in input order
    pub top_expenses: Vec<Transaction>,
    pub transaction_count: usize,
}

impl Summary {
    /// Category totals without the `Income` bucket, largest first.
    ///
    /// Equal amounts keep the order the categories were first seen in.
    pub fn expense_categories(&self) -> Vec<(Category, f64)> {
        let mut rows: Vec<(Category, f64)> = self
            .category_totals
            .iter()
            .filter(|(cat, _)| *cat != Category::Income)
            .collect();
        rows.sort_by(|a, b| b.1.total_cmp(&a.1));
        rows
    }

    /// Share of total expenses in percent; 0 when there were no expenses
    pub fn expense_share(&self, amount: f64) -> f64 {
        if self.total_expenses > 0.0 {
            amount / self.total_expenses * 100.0
        } else {
            0.0
        }
    }
}

/// Per-category sums that iterate in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(Category, f64)>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the bucket, creating it at 0 if absent
    pub fn add(&mut self, category: Category, amount: f64) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category, amount)),
        }
    }

    pub fn get(&self, category: Category) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, total)| *total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, total)| total).sum()
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, total) in &self.entries {
            map.serialize_entry(category.label(), total)?;
        }
        map.end()
    }
}
