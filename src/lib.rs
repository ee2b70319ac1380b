//! mcbench-prompts: build-prompt generator for the MCbench Minecraft benchmark.
//!
//! One model call produces a batch of candidate prompts. Candidates are
//! filtered for a domain tag, duplicates, length and over-specification,
//! then checked for coverage of the six domain tags.

pub mod categories;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod prompts;
pub mod quality;

// Re-export commonly used error types
pub use error::{ConfigError, LlmError};
