//! LLM prompts for MCbench batch generation.
//!
//! # Usage
//!
//! ```
//! use mcbench_prompts::prompts::build_instruction;
//!
//! let prompt = build_instruction(Some("underwater cities"));
//! assert!(prompt.system.contains("underwater cities"));
//! assert_eq!(prompt.user, "Generate the ten prompts now.");
//! ```

pub mod instruction;

pub use instruction::{build_instruction, InstructionPrompt, GENERATE_USER_MESSAGE};
