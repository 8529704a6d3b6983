//! CLI module
//!
//! Provides command-line interface for:
//! - serve: start the HTTP server
//! - validate: check a lead payload against the schema

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{resolve_config, run_command, serve, validate, validate_payload};
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
