//! CLI argument definitions using clap
//!
//! Commands:
//! - platform-advisor serve [--config <path>] [--port <port>]
//! - platform-advisor suggest [--explain]
//! - platform-advisor rules

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Platform Advisor - recommends a computing platform for a training course
#[derive(Parser, Debug)]
#[command(name = "platform-advisor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Read one course description (JSON) from stdin and print the recommendation
    Suggest {
        /// Print the deciding rule and shadowed rules as well
        #[arg(long)]
        explain: bool,
    },

    /// Print the decision table
    Rules,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from(["platform-advisor", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert!(config.is_none());
                assert_eq!(port, Some(9000));
            }
            other => panic!("Expected Serve, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_suggest_explain() {
        let cli = Cli::try_parse_from(["platform-advisor", "suggest", "--explain"]).unwrap();
        assert!(matches!(cli.command, Command::Suggest { explain: true }));
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["platform-advisor", "train"]).is_err());
    }
}
