//! Validation filter for candidate prompts.
//!
//! Applies tag extraction, duplicate, length and over-specification checks to
//! each candidate in order and keeps the first `target` that pass.

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

use crate::categories::Category;
use crate::config::{GeneratorConfig, DEFAULT_MAX_TOKENS, DEFAULT_TARGET_COUNT};

use super::overspec::OverSpecRule;

/// Parenthesized tag at the very end of a line.
static TAG_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)\s*$").expect("Invalid regex for tag suffix"));

/// Why a candidate was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectionReason {
    /// The line does not end in a parenthesized tag.
    MissingTag,
    /// The parenthesized tag matches no known category.
    UnknownTag { label: String },
    /// The same line (ignoring case) was already accepted.
    Duplicate,
    /// The line has more whitespace-delimited tokens than allowed.
    TooLong { tokens: usize, max: usize },
    /// An over-specification rule matched.
    OverSpecified { rule: OverSpecRule },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::MissingTag => write!(f, "no parenthesized tag suffix"),
            RejectionReason::UnknownTag { label } => write!(f, "unknown tag '{}'", label),
            RejectionReason::Duplicate => write!(f, "duplicate prompt"),
            RejectionReason::TooLong { tokens, max } => {
                write!(f, "{} tokens exceeds limit of {}", tokens, max)
            }
            RejectionReason::OverSpecified { rule } => write!(f, "over-specified ({})", rule),
        }
    }
}

/// A candidate that was dropped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub candidate: String,
    #[serde(flatten)]
    pub reason: RejectionReason,
}

/// A candidate that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptedPrompt {
    /// The full candidate line, tag suffix included.
    pub line: String,
    /// The prompt body with the tag suffix removed.
    pub text: String,
    /// The canonical category resolved from the tag suffix.
    pub category: Category,
}

/// Result of running the filter over a candidate list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterOutcome {
    /// Accepted prompts, in encounter order.
    pub accepted: Vec<AcceptedPrompt>,
    /// Rejected candidates, in encounter order.
    pub rejected: Vec<Rejection>,
    /// Number of candidates looked at before the filter stopped.
    pub examined: usize,
}

struct TagSuffix {
    category: Category,
    start: usize,
}

fn parse_tag_suffix(line: &str) -> Result<TagSuffix, RejectionReason> {
    let captures = TAG_SUFFIX
        .captures(line)
        .ok_or(RejectionReason::MissingTag)?;
    let (whole, label) = match (captures.get(0), captures.get(1)) {
        (Some(whole), Some(label)) => (whole, label.as_str()),
        _ => return Err(RejectionReason::MissingTag),
    };

    let category = Category::from_label(label).ok_or_else(|| RejectionReason::UnknownTag {
        label: label.trim().to_string(),
    })?;

    Ok(TagSuffix {
        category,
        start: whole.start(),
    })
}

/// Resolves the parenthesized tag at the end of `line`.
///
/// # Example
///
/// ```
/// use mcbench_prompts::categories::Category;
/// use mcbench_prompts::quality::extract_tag;
///
/// assert_eq!(extract_tag("Carve a sphinx (myth)"), Some(Category::Myth));
/// assert_eq!(extract_tag("Carve a sphinx"), None);
/// ```
pub fn extract_tag(line: &str) -> Option<Category> {
    parse_tag_suffix(line).ok().map(|suffix| suffix.category)
}

/// Counts whitespace-delimited tokens.
pub fn token_count(line: &str) -> usize {
    line.split_whitespace().count()
}

/// Ordered filter that keeps the first `target` valid candidates.
#[derive(Debug, Clone)]
pub struct PromptFilter {
    target: usize,
    max_tokens: usize,
}

impl Default for PromptFilter {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_COUNT, DEFAULT_MAX_TOKENS)
    }
}

impl PromptFilter {
    /// Creates a filter with explicit limits.
    pub fn new(target: usize, max_tokens: usize) -> Self {
        Self { target, max_tokens }
    }

    /// Creates a filter from the generator configuration.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.target_count, config.max_tokens)
    }

    /// Returns the number of prompts after which filtering stops.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Runs every check against one candidate.
    ///
    /// `seen` holds the lowercase lines accepted so far.
    pub fn check(
        &self,
        candidate: &str,
        seen: &HashSet<String>,
    ) -> Result<AcceptedPrompt, RejectionReason> {
        let suffix = parse_tag_suffix(candidate)?;

        if seen.contains(&candidate.to_lowercase()) {
            return Err(RejectionReason::Duplicate);
        }

        let tokens = token_count(candidate);
        if tokens > self.max_tokens {
            return Err(RejectionReason::TooLong {
                tokens,
                max: self.max_tokens,
            });
        }

        if let Some(rule) = OverSpecRule::first_match(candidate) {
            return Err(RejectionReason::OverSpecified { rule });
        }

        Ok(AcceptedPrompt {
            line: candidate.to_string(),
            text: candidate[..suffix.start].trim_end().to_string(),
            category: suffix.category,
        })
    }

    /// Filters `candidates` in order, stopping once `target` are accepted.
    pub fn filter<I, S>(&self, candidates: I) -> FilterOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = FilterOutcome::default();
        let mut seen = HashSet::new();

        for candidate in candidates {
            if outcome.accepted.len() >= self.target {
                break;
            }
            outcome.examined += 1;

            let candidate = candidate.as_ref();
            match self.check(candidate, &seen) {
                Ok(prompt) => {
                    seen.insert(prompt.line.to_lowercase());
                    outcome.accepted.push(prompt);
                }
                Err(reason) => {
                    debug!(candidate = %candidate, reason = %reason, "Rejected candidate");
                    outcome.rejected.push(Rejection {
                        candidate: candidate.to_string(),
                        reason,
                    });
                }
            }
        }

        outcome
    }
}
