//! Instruction builder for a prompt batch.
//!
//! Produces the system instruction that asks the model for ten MCbench build
//! prompts, optionally steering part of the batch toward a human seed idea.

use crate::categories::Category;

/// Messages sent to the generation service for one batch.
#[derive(Debug, Clone)]
pub struct InstructionPrompt {
    /// System instruction with the framing, tags and hard rules.
    pub system: String,
    /// Fixed user turn that triggers generation.
    pub user: String,
}

impl InstructionPrompt {
    /// Creates a new instruction prompt with the given system and user messages.
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// User turn sent alongside every instruction.
pub const GENERATE_USER_MESSAGE: &str = "Generate the ten prompts now.";

const INSTRUCTION_FRAMING: &str = r#"You are a prompt designer for MCbench (mcbench.ai).

Objective
---------
Produce TEN Minecraft build prompts that jointly maximise

    G‡ = V×R×S×J×I×(1–O)×C×D
    (V Validity, R Reliability, S Sensitivity, J Judgeability,
     I Iconicity, O Over-specification, C Contextual resonance,
     D Diversity across the batch)"#;

const HARD_RULES: &str = r#"Hard rules  (MUST FOLLOW)
-------------------------
1  One imperative sentence, ≤ 25 tokens.
2  NO explicit numbers, dimensions, coordinates, block names, or colours.
3  Append exactly ONE domain tag from the list in parentheses.
4  No Markdown, bullets, or quotation marks – raw text only.

Every tag must appear at least once across the 10 prompts."#;

/// Builds the instruction for one batch.
///
/// A blank seed idea is treated the same as no seed idea.
///
/// # Examples
///
/// ```
/// use mcbench_prompts::prompts::build_instruction;
///
/// let prompt = build_instruction(Some("a lighthouse"));
/// assert!(prompt.system.contains("a lighthouse"));
/// assert!(prompt.system.contains("(History/Science)"));
/// ```
pub fn build_instruction(seed_idea: Option<&str>) -> InstructionPrompt {
    let mut system = format!(
        "{}\n\nDomain tags\n-----------\n{}\n\n{}",
        INSTRUCTION_FRAMING,
        format_tags(),
        HARD_RULES
    );

    if let Some(idea) = seed_idea.map(str::trim).filter(|idea| !idea.is_empty()) {
        system.push_str("\n\n");
        system.push_str(&seed_idea_clause(idea));
    }

    InstructionPrompt::new(system, GENERATE_USER_MESSAGE)
}

/// Formats every category as an aligned `(Tag) – description` line.
fn format_tags() -> String {
    Category::all()
        .iter()
        .map(|category| {
            format!(
                "    {:<20}– {}",
                format!("({})", category.display_name()),
                category.description()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn seed_idea_clause(idea: &str) -> String {
    format!(
        "Human seed idea\n---------------\n“{}”\n\n\
         Requirement: at least THREE prompts must clearly incorporate or riff on this idea,\n\
         each in a different domain tag (where possible).  Feel free to interpret creatively\n\
         but keep the idea recognisable.",
        idea
    )
}
