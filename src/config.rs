//! Configuration for a prompt batch run.

use crate::error::ConfigError;

/// Default chat model used for generation.
pub const DEFAULT_MODEL: &str = "o3";

/// Default OpenAI-compatible API endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default sampling temperature ("o" series models only accept 1).
pub const DEFAULT_TEMPERATURE: f64 = 1.0;

/// Number of prompts a batch aims for.
pub const DEFAULT_TARGET_COUNT: usize = 10;

/// Maximum whitespace-delimited tokens per prompt, tag suffix included.
pub const DEFAULT_MAX_TOKENS: usize = 25;

/// Tunables for [`crate::generator::PromptBatchGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Model identifier sent with the request.
    pub model: String,
    /// Sampling temperature (0.0 - 2.0).
    pub temperature: f64,
    /// Number of accepted prompts after which filtering stops.
    pub target_count: usize,
    /// Token ceiling for a single prompt.
    pub max_tokens: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            target_count: DEFAULT_TARGET_COUNT,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl GeneratorConfig {
    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the target number of accepted prompts.
    pub fn with_target_count(mut self, target_count: usize) -> Self {
        self.target_count = target_count;
        self
    }

    /// Set the per-prompt token ceiling.
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Checks that every field is within its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidTemperature(self.temperature));
        }
        if self.target_count == 0 {
            return Err(ConfigError::InvalidTargetCount(self.target_count));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::InvalidTokenLimit(self.max_tokens));
        }
        Ok(())
    }
}
