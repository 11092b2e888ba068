//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::Cli;
pub use output::{format_output_dir_created, format_summary};
