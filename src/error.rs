//! Error types for mcbench-prompts.
//!
//! Candidate-level rejections are not errors (see
//! [`crate::quality::RejectionReason`]); only failures that stop a run live here:
//! - Generation service interactions
//! - Invalid generator configuration

use thiserror::Error;

/// Errors that can occur while talking to the generation service.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing API key: pass --api-key or set OPENAI_API_KEY")]
    MissingApiKey,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse LLM response: {0}")]
    ParseError(String),

    #[error("LLM response contained no choices")]
    EmptyResponse,

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error ({code}): {message}")]
    ApiError { code: u16, message: String },
}

/// Errors raised when a [`crate::config::GeneratorConfig`] is out of range.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid temperature {0}: must be between 0.0 and 2.0")]
    InvalidTemperature(f64),

    #[error("Invalid target count {0}: must be at least 1")]
    InvalidTargetCount(usize),

    #[error("Invalid token limit {0}: must be at least 1")]
    InvalidTokenLimit(usize),

    #[error("Model identifier must not be empty")]
    EmptyModel,
}
