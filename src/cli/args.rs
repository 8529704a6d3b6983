//! CLI argument definitions using clap
//!
//! Commands:
//! - leadline serve [--config <path>] [--host <host>] [--port <port>] [--serverless]
//! - leadline validate [--input <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Leadline - lead capture service for commercial lending
#[derive(Parser, Debug)]
#[command(name = "leadline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the bind port
        #[arg(long)]
        port: Option<u16>,

        /// Use the serverless deployment target
        #[arg(long)]
        serverless: bool,
    },

    /// Validate a lead payload and print the normalized result
    Validate {
        /// JSON payload file (reads stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
