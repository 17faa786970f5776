//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_concept_list, format_levels, format_problem_list, format_tag_counts,
    format_unchecked_dirs, format_validation_summary,
};
