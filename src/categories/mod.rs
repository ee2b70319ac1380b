//! Domain tag system for MCbench prompt batches.
//!
//! This module provides the tag taxonomy and per-batch coverage tracking.

mod coverage;
mod taxonomy;

pub use coverage::{missing_categories, CategoryCount, CategoryCoverage};
pub use taxonomy::Category;
