//! CLI definition and command execution for mcbench-prompts.

use clap::Parser;
use dialoguer::Input;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{GeneratorConfig, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::error::LlmError;
use crate::generator::{BatchResult, PromptBatchGenerator};
use crate::llm::ChatCompletionsClient;

use super::render::{render_table, render_warnings};

/// Generate a batch of MCbench Minecraft build prompts.
#[derive(Parser, Debug)]
#[command(name = "mcbench-prompts")]
#[command(about = "Generate MCbench prompts")]
#[command(version)]
#[command(
    long_about = "Generates ten MCbench build prompts with one model call, filters out\nover-specified or malformed ones and prints the survivors as a table.\n\nExample usage:\n  mcbench-prompts --idea \"sunken cities\" --temp 1"
)]
pub struct Cli {
    /// Seed idea to weave into prompts (asked interactively when omitted).
    #[arg(short = 'i', long)]
    pub idea: Option<String>,

    /// Sampling temperature (keep at 1 for "o" series models).
    #[arg(short = 't', long = "temp", default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f64,

    /// Model identifier sent to the chat-completions endpoint.
    #[arg(short = 'm', long, env = "MCBENCH_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the OpenAI-compatible API.
    #[arg(long, env = "OPENAI_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// API key (can also be set via OPENAI_API_KEY env var).
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output the batch as JSON instead of a table.
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

/// Parse CLI arguments and return the Cli struct.
///
/// This allows main.rs to access CLI arguments (like log_level) before running commands.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI with the parsed arguments.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let idea = match cli.idea.clone() {
        Some(idea) => idea,
        None => ask_seed_idea(),
    };
    let idea = idea.trim().to_string();

    let api_key = cli.api_key.clone().ok_or(LlmError::MissingApiKey)?;
    let client = ChatCompletionsClient::new(cli.api_base.clone(), api_key, cli.model.clone())?;
    info!(api_base = %client.api_base(), api_key = %client.api_key_masked(), "Using chat-completions client");

    let config = GeneratorConfig::default()
        .with_model(cli.model.clone())
        .with_temperature(cli.temperature);
    let generator = PromptBatchGenerator::new(Box::new(client), config)?;

    let seed = (!idea.is_empty()).then_some(idea.as_str());
    let batch = generator.generate(seed).await?;

    if cli.json {
        let report = BatchReport::new(&cli, seed, &batch);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_table(&batch.prompts));
        for line in render_warnings(&batch.warnings()) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Prompts for a seed idea, falling back to none when input is unavailable.
fn ask_seed_idea() -> String {
    Input::<String>::new()
        .with_prompt("Enter a seed idea to inspire some prompts (leave blank for none)")
        .allow_empty(true)
        .interact_text()
        .unwrap_or_else(|e| {
            warn!(error = %e, "Could not read seed idea, continuing without one");
            String::new()
        })
}

/// JSON output for `--json`.
#[derive(Debug, Serialize)]
pub struct BatchReport<'a> {
    pub model: &'a str,
    pub temperature: f64,
    pub seed_idea: Option<&'a str>,
    #[serde(flatten)]
    pub batch: &'a BatchResult,
    pub warnings: Vec<String>,
}

impl<'a> BatchReport<'a> {
    fn new(cli: &'a Cli, seed_idea: Option<&'a str>, batch: &'a BatchResult) -> Self {
        Self {
            model: &cli.model,
            temperature: cli.temperature,
            seed_idea,
            batch,
            warnings: batch.warnings().iter().map(ToString::to_string).collect(),
        }
    }
}
