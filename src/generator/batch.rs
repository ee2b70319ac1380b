//! Batch result assembly: filtering plus coverage for one model response.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::categories::{Category, CategoryCount, CategoryCoverage};
use crate::quality::{extract_candidates, AcceptedPrompt, PromptFilter, Rejection};

/// Outcome of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    /// Accepted prompts in response order.
    pub prompts: Vec<AcceptedPrompt>,
    /// Canonical categories with no accepted prompt, in canonical order.
    pub missing_categories: Vec<Category>,
    /// Accepted prompts per category, zeros included.
    pub distribution: Vec<CategoryCount>,
    /// Number of prompts the batch aimed for.
    pub target_count: usize,
    /// Whether `target_count` prompts were accepted.
    pub target_reached: bool,
    /// Number of candidate lines extracted from the response.
    pub candidates: usize,
    /// Candidates dropped before the filter stopped.
    pub rejected: Vec<Rejection>,
    pub generated_at: DateTime<Utc>,
}

impl BatchResult {
    /// Runs extraction, filtering and coverage over a raw response.
    pub fn from_response(raw: &str, filter: &PromptFilter) -> Self {
        let candidates = extract_candidates(raw);
        let outcome = filter.filter(&candidates);
        let coverage = CategoryCoverage::from_tags(outcome.accepted.iter().map(|p| p.category));

        Self {
            target_count: filter.target(),
            target_reached: outcome.accepted.len() >= filter.target(),
            missing_categories: coverage.missing(),
            distribution: coverage.distribution(),
            candidates: candidates.len(),
            prompts: outcome.accepted,
            rejected: outcome.rejected,
            generated_at: Utc::now(),
        }
    }

    /// Returns the non-fatal conditions worth surfacing to the user.
    pub fn warnings(&self) -> Vec<BatchWarning> {
        let mut warnings = Vec::new();
        if !self.missing_categories.is_empty() {
            warnings.push(BatchWarning::MissingCategories(
                self.missing_categories.clone(),
            ));
        }
        if !self.target_reached {
            warnings.push(BatchWarning::Shortfall {
                accepted: self.prompts.len(),
                target: self.target_count,
            });
        }
        warnings
    }
}

/// A non-fatal problem with a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchWarning {
    /// Some canonical categories have no prompt.
    MissingCategories(Vec<Category>),
    /// Fewer prompts than the target were accepted.
    Shortfall { accepted: usize, target: usize },
}

impl fmt::Display for BatchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchWarning::MissingCategories(missing) => {
                let names: Vec<&str> = missing.iter().map(|c| c.display_name()).collect();
                write!(f, "missing tag(s): {}", names.join(", "))
            }
            BatchWarning::Shortfall { accepted, .. } => write!(
                f,
                "only {} valid prompts produced – regenerate or tweak temperature.",
                accepted
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BATCH: &str = "\
Build a tall obelisk honoring ancient stargazers (History)
Recreate the launch pad of a famous moon mission (Science)
Design a floating island shrine to a forgotten deity (Myth)
Carve the gates of a legendary underworld (Myth)
Sculpt a giant retro game controller (Pop)
Build a steam locomotive crossing a viaduct (Tech)
Construct a windmill powering a grain mill (Tech)
Raise a gothic cathedral with flying buttresses (Arch)
Model a coral reef teeming with sea turtles (Nature)
Grow an ancient redwood grove in morning fog (Nature)
Build a cozy treehouse village (Arch)";

    #[test]
    fn test_duplicate_example_coverage() {
        let raw = "Build a tall obelisk honoring ancient stargazers (History)\n\
                   Build a tall obelisk honoring ancient stargazers (History)\n\
                   Design a floating island shrine to a forgotten deity (Myth)";
        let result = BatchResult::from_response(raw, &PromptFilter::default());

        assert_eq!(result.candidates, 3);
        assert_eq!(result.prompts.len(), 2);
        assert!(!result.target_reached);
        for category in [Category::Pop, Category::Tech, Category::Arch, Category::Nature] {
            assert!(result.missing_categories.contains(&category));
        }
        assert!(!result.missing_categories.contains(&Category::Myth));
        assert!(!result
            .missing_categories
            .contains(&Category::HistoryScience));
    }

    #[test]
    fn test_full_batch_has_no_warnings() {
        let result = BatchResult::from_response(FULL_BATCH, &PromptFilter::default());

        assert_eq!(result.prompts.len(), 10);
        assert!(result.target_reached);
        assert!(result.missing_categories.is_empty());
        assert!(result.warnings().is_empty());
        // The eleventh line is never examined.
        assert!(result.rejected.is_empty());
    }

    #[test]
    fn test_missing_set_equals_canonical_minus_accepted() {
        let result = BatchResult::from_response(FULL_BATCH, &PromptFilter::new(5, 25));
        let accepted: Vec<Category> = result.prompts.iter().map(|p| p.category).collect();
        let expected: Vec<Category> = Category::all()
            .into_iter()
            .filter(|c| !accepted.contains(c))
            .collect();

        assert_eq!(result.missing_categories, expected);
        assert_eq!(
            result.missing_categories,
            vec![Category::Tech, Category::Arch, Category::Nature]
        );
    }

    #[test]
    fn test_warning_messages() {
        let result = BatchResult::from_response(
            "Design a floating island shrine to a forgotten deity (Myth)",
            &PromptFilter::default(),
        );
        let warnings = result.warnings();

        assert_eq!(warnings.len(), 2);
        assert_eq!(
            warnings[0].to_string(),
            "missing tag(s): History/Science, Pop, Tech, Arch, Nature"
        );
        assert_eq!(
            warnings[1],
            BatchWarning::Shortfall {
                accepted: 1,
                target: 10
            }
        );
        assert_eq!(
            warnings[1].to_string(),
            "only 1 valid prompts produced – regenerate or tweak temperature."
        );
    }

    #[test]
    fn test_empty_response() {
        let result = BatchResult::from_response("", &PromptFilter::default());
        assert!(result.prompts.is_empty());
        assert_eq!(result.missing_categories, Category::all());
        assert_eq!(result.warnings().len(), 2);
    }

    #[test]
    fn test_distribution_counts_prompts() {
        let result = BatchResult::from_response(FULL_BATCH, &PromptFilter::default());
        let total: usize = result.distribution.iter().map(|c| c.count).sum();
        assert_eq!(total, result.prompts.len());
        assert_eq!(result.distribution.len(), 6);
    }
}
