//! Domain tag taxonomy for MCbench prompts.
//!
//! Defines the six canonical domain tags and the synonym table used to map
//! free-text tag labels back onto them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// The canonical domain tags, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "History/Science")]
    HistoryScience,
    Myth,
    Pop,
    Tech,
    Arch,
    Nature,
}

impl Category {
    /// Returns all categories in canonical order.
    pub fn all() -> Vec<Category> {
        vec![
            Category::HistoryScience,
            Category::Myth,
            Category::Pop,
            Category::Tech,
            Category::Arch,
            Category::Nature,
        ]
    }

    /// Returns the canonical tag text, as it appears inside the parentheses.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::HistoryScience => "History/Science",
            Category::Myth => "Myth",
            Category::Pop => "Pop",
            Category::Tech => "Tech",
            Category::Arch => "Arch",
            Category::Nature => "Nature",
        }
    }

    /// Returns the short description given to the model for this tag.
    pub fn description(&self) -> &'static str {
        match self {
            Category::HistoryScience => "space missions, inventions, historical events",
            Category::Myth => "legends, religions, literature classics",
            Category::Pop => "brands, pop culture, modern media",
            Category::Tech => "gadgets, machines, everyday tech objects",
            Category::Arch => "architecture, cities, civil engineering",
            Category::Nature => "natural scenes, phenomena, animals",
        }
    }

    /// Returns the lowercase labels that resolve to this category.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Category::HistoryScience => &["history", "science"],
            Category::Myth => &["myth"],
            Category::Pop => &["pop"],
            Category::Tech => &["tech"],
            Category::Arch => &["arch"],
            Category::Nature => &["nature"],
        }
    }

    /// Resolves a tag label such as `"History"`, `"nature"` or
    /// `"Pop/Culture"` to its category.
    ///
    /// Matching is case-insensitive and only the first `/`-segment is
    /// considered.
    ///
    /// # Example
    ///
    /// ```
    /// use mcbench_prompts::categories::Category;
    ///
    /// assert_eq!(Category::from_label("History/Science"), Some(Category::HistoryScience));
    /// assert_eq!(Category::from_label("MYTH"), Some(Category::Myth));
    /// assert_eq!(Category::from_label("cooking"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Category> {
        let lowered = label.trim().to_lowercase();
        // Whitespace around the first segment is ignored, so "History /Science"
        // resolves like "History/Science".
        let key = lowered.split('/').next().unwrap_or_default().trim();
        TAG_SYNONYMS.get(key).copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Lowercase synonym -> canonical category.
static TAG_SYNONYMS: LazyLock<HashMap<&'static str, Category>> = LazyLock::new(|| {
    Category::all()
        .into_iter()
        .flat_map(|category| {
            category
                .synonyms()
                .iter()
                .map(move |synonym| (*synonym, category))
        })
        .collect()
});
