//! Generation service integration.
//!
//! ```ignore
//! use mcbench_prompts::llm::{ChatCompletionsClient, GenerationRequest, LlmProvider, Message};
//!
//! let client = ChatCompletionsClient::with_defaults(std::env::var("OPENAI_API_KEY")?)?;
//! let request = GenerationRequest::new("o3", vec![Message::user("Hello")]).with_temperature(1.0);
//! let response = client.generate(request).await?;
//! ```

pub mod client;

pub use client::{
    ChatCompletionsClient, Choice, GenerationRequest, GenerationResponse, LlmProvider, Message,
    Usage,
};
