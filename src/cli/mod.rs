//! CLI module
//!
//! Provides the `serve` subcommand that runs the HTTP API.

pub mod serve;

use clap::{Parser, Subcommand};

/// Textflow - text-processing workflow pipelines over an LLM backend
#[derive(Parser)]
#[command(name = "textflow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
