//! CLI argument definitions using clap
//!
//! Commands:
//! - strand start --config <path> [--port <port>]
//! - strand analyze <value>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// strand - a strict, deterministic string analysis and filtering service
#[derive(Parser, Debug)]
#[command(name = "strand")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the strand HTTP server
    Start {
        /// Path to configuration file; defaults apply if the file is absent
        #[arg(long, default_value = "./strand.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Analyze a single string and print its properties as JSON
    Analyze {
        /// The string to analyze
        value: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
