//! CLI module for the platform advisor
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - suggest: One-shot recommendation from stdin
//! - rules: Print the decision table

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{load_config, rules, run_command, serve, suggest};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_response};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}
