//! Prompt batch generation pipeline.
//!
//! 1. **Instruction** - fixed template plus an optional seed idea
//! 2. **Generation** - one call to the generation service
//! 3. **Filtering** - candidate extraction and validation
//! 4. **Coverage** - which domain tags the batch is missing
//!
//! # Example
//!
//! ```ignore
//! use mcbench_prompts::config::GeneratorConfig;
//! use mcbench_prompts::generator::PromptBatchGenerator;
//! use mcbench_prompts::llm::ChatCompletionsClient;
//!
//! let client = ChatCompletionsClient::with_defaults(api_key)?;
//! let generator = PromptBatchGenerator::new(Box::new(client), GeneratorConfig::default())?;
//! let batch = generator.generate(Some("lost civilizations")).await?;
//! for warning in batch.warnings() {
//!     eprintln!("WARNING: {}", warning);
//! }
//! ```

mod batch;

pub use batch::{BatchResult, BatchWarning};

use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{ConfigError, LlmError};
use crate::llm::{GenerationRequest, LlmProvider, Message};
use crate::prompts::build_instruction;
use crate::quality::PromptFilter;

/// Generates and filters one batch of MCbench prompts per call.
pub struct PromptBatchGenerator {
    provider: Box<dyn LlmProvider>,
    config: GeneratorConfig,
    filter: PromptFilter,
}

impl PromptBatchGenerator {
    /// Creates a generator backed by `provider`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if `config` fails validation.
    pub fn new(provider: Box<dyn LlmProvider>, config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let filter = PromptFilter::from_config(&config);
        Ok(Self {
            provider,
            config,
            filter,
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Requests one batch from the generation service and filters it.
    ///
    /// Service failures are returned as-is; everything downstream of the
    /// response is infallible.
    pub async fn generate(&self, seed_idea: Option<&str>) -> Result<BatchResult, LlmError> {
        let instruction = build_instruction(seed_idea);
        let request = GenerationRequest::new(
            self.config.model.clone(),
            vec![
                Message::system(instruction.system),
                Message::user(instruction.user),
            ],
        )
        .with_temperature(self.config.temperature);

        info!(
            model = %self.config.model,
            temperature = self.config.temperature,
            seeded = seed_idea.is_some_and(|idea| !idea.trim().is_empty()),
            "Requesting prompt batch"
        );

        let response = self.provider.generate(request).await?;
        let raw = response.first_content().ok_or(LlmError::EmptyResponse)?;
        debug!(
            total_tokens = response.usage.total_tokens,
            chars = raw.len(),
            "Received generation response"
        );

        let batch = BatchResult::from_response(raw, &self.filter);
        info!(
            candidates = batch.candidates,
            accepted = batch.prompts.len(),
            rejected = batch.rejected.len(),
            missing = batch.missing_categories.len(),
            "Filtered prompt batch"
        );

        Ok(batch)
    }
}
