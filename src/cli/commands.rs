//! CLI command implementations
//!
//! `serve` is the only command that starts a runtime. `suggest` and `rules`
//! are one-shot and never touch the network.

use std::path::Path;

use crate::api::{handle_explain, handle_suggest, RuleEntry};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};
use crate::recommender::{FALLBACK_LABEL, RULES};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_response};

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Suggest { explain } => suggest(explain),
        Command::Rules => rules(),
    }
}

/// Resolve the server configuration from an optional file and port override
pub fn load_config(path: Option<&Path>, port: Option<u16>) -> CliResult<HttpServerConfig> {
    let mut config = match path {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(port) = port {
        config.port = port;
    }

    Ok(config)
}

/// Start the HTTP server and block until shutdown
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = load_config(config_path, port)?;
    let origins = config.cors_origins.len().to_string();
    let port = config.port.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("cors_origins", origins.as_str()),
            ("host", config.host.as_str()),
            ("port", port.as_str()),
        ],
    );

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(HttpServer::with_config(config).start())
        .map_err(|e| {
            let reason = e.to_string();
            log_event_with_fields(Event::ServerFailed, &[("reason", reason.as_str())]);
            CliError::from(e)
        })
}

/// Read one course from stdin and print the recommendation
pub fn suggest(explain: bool) -> CliResult<()> {
    let body = read_request()?;
    let metrics = MetricsRegistry::new();

    if explain {
        write_response(&handle_explain(&body, &metrics)?)
    } else {
        write_response(&handle_suggest(&body, &metrics)?)
    }
}

/// Print the decision table as one JSON line
pub fn rules() -> CliResult<()> {
    write_response(&RuleEntry::table(&RULES, FALLBACK_LABEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_defaults_without_file() {
        let config = load_config(None, None).unwrap();
        assert_eq!(config, HttpServerConfig::default());
    }

    #[test]
    fn test_port_override_wins_over_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"host": "127.0.0.1", "port": 9000}}"#).unwrap();

        let config = load_config(Some(file.path()), Some(9100)).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn test_bad_config_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "port = 9000").unwrap();

        let err = load_config(Some(file.path()), None).unwrap_err();
        assert_eq!(err.code_str(), "ADVISOR_CLI_CONFIG_ERROR");
    }
}
