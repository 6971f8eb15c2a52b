//! Deterministic keyword rules mapping descriptions to spending categories.
//!
//! Rules are checked in declaration order and the first category with a
//! matching keyword wins, so a description like "amazon fresh grocery order"
//! lands in Groceries rather than Shopping.

use tally_core::{Category, Transaction};
use tracing::debug;

/// One category and the lowercase substrings that select it
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// The built-in rule table. Order is significant.
pub const DEFAULT_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Groceries,
        keywords: &["walmart", "kroger", "trader joe", "whole foods", "grocery", "market"],
    },
    CategoryRule {
        category: Category::Dining,
        keywords: &["restaurant", "mcdonald", "starbucks", "pizza", "burger", "cafe", "coffee"],
    },
    CategoryRule {
        category: Category::Utilities,
        keywords: &["electric", "water", "gas bill", "internet", "phone bill", "utility"],
    },
    CategoryRule {
        category: Category::Transportation,
        keywords: &["uber", "lyft", "shell", "chevron", "parking", "gas station", "fuel"],
    },
    CategoryRule {
        category: Category::Entertainment,
        keywords: &["netflix", "spotify", "cinema", "steam", "hulu", "game"],
    },
    CategoryRule {
        category: Category::Housing,
        keywords: &["rent", "mortgage"],
    },
    CategoryRule {
        category: Category::Shopping,
        keywords: &["amazon", "target", "best buy", "ebay"],
    },
    CategoryRule {
        category: Category::Income,
        keywords: &["salary", "deposit", "transfer in", "payroll", "refund"],
    },
];

impl CategoryRule {
    /// `desc_lower` must already be lowercased
    fn matches(&self, desc_lower: &str) -> bool {
        self.keywords.iter().any(|kw| desc_lower.contains(kw))
    }
}

/// Categorize a description against `rules`; `Other` when nothing matches.
pub fn categorize_with(rules: &[CategoryRule], description: &str) -> Category {
    let desc = description.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&desc))
        .map(|rule| rule.category)
        .unwrap_or(Category::Other)
}

/// Categorize a description with the built-in rule table.
pub fn categorize(description: &str) -> Category {
    categorize_with(DEFAULT_RULES, description)
}

/// Assign a category to every transaction in place, keeping order.
pub fn categorize_all(txns: &mut [Transaction]) {
    for txn in txns.iter_mut() {
        txn.category = categorize(&txn.description);
    }
    debug!(count = txns.len(), "categorized transactions");
}
