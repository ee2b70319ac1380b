//! Filtering pipeline for generated prompts.
//!
//! Turns a raw model response into candidates, drops the ones that break the
//! formatting or content rules, and keeps the first valid ones in order.

mod extract;
mod filter;
mod overspec;

pub use extract::extract_candidates;
pub use filter::{
    extract_tag, token_count, AcceptedPrompt, FilterOutcome, PromptFilter, Rejection,
    RejectionReason,
};
pub use overspec::{is_over_specified, OverSpecRule, BUILDING_MATERIALS};
