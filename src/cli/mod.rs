//! Command-line interface for mcbench-prompts.
//!
//! Parses flags, asks for a seed idea when none is given, runs one
//! generation and prints the result as a table or JSON.

mod commands;
mod render;

pub use commands::{parse_cli, run_with_cli, BatchReport, Cli};
pub use render::{render_table, render_warnings};
