//! Category coverage tracking for a prompt batch.

use serde::Serialize;
use std::collections::HashMap;

use super::taxonomy::Category;

/// Counts accepted prompts per category.
#[derive(Debug, Clone, Default)]
pub struct CategoryCoverage {
    counts: HashMap<Category, usize>,
}

impl CategoryCoverage {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Builds a tracker from an iterator of tags.
    pub fn from_tags(tags: impl IntoIterator<Item = Category>) -> Self {
        let mut coverage = Self::new();
        for tag in tags {
            coverage.record(tag);
        }
        coverage
    }

    /// Records one prompt carrying `category`.
    pub fn record(&mut self, category: Category) {
        *self.counts.entry(category).or_default() += 1;
    }

    /// Returns how many prompts carry `category`.
    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Returns the categories with no prompts, in canonical order.
    pub fn missing(&self) -> Vec<Category> {
        Category::all()
            .into_iter()
            .filter(|category| self.count(*category) == 0)
            .collect()
    }

    /// Returns true when every canonical category is represented.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Returns per-category counts in canonical order, zeros included.
    pub fn distribution(&self) -> Vec<CategoryCount> {
        Category::all()
            .into_iter()
            .map(|category| CategoryCount {
                category,
                count: self.count(category),
            })
            .collect()
    }
}

/// One row of [`CategoryCoverage::distribution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Returns the canonical categories absent from `tags`, in canonical order.
pub fn missing_categories(tags: impl IntoIterator<Item = Category>) -> Vec<Category> {
    CategoryCoverage::from_tags(tags).missing()
}
