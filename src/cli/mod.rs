//! CLI command handlers

pub mod commands;

pub use commands::{batch, calculate, check, list, parse_assignment, show};

/// How `batch` prints its report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
