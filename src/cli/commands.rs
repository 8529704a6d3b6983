//! CLI command implementations

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use crate::http_server::{DeploymentTarget, HttpServer, ServerConfig};
use crate::observability::{log_event_with_fields, Event};
use crate::schema;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            config,
            host,
            port,
            serverless,
        } => {
            let config = resolve_config(config.as_deref(), host, port, serverless)?;
            serve(config)
        }
        Command::Validate { input } => validate(input),
    }
}

/// Build the effective server config: file values first, then flag overrides
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    serverless: bool,
) -> CliResult<ServerConfig> {
    let mut config = match path {
        Some(path) => {
            let config = ServerConfig::load(path)?;
            let path_str = path.display().to_string();
            log_event_with_fields(Event::ConfigLoaded, &[("path", path_str.as_str())]);
            config
        }
        None => ServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if serverless {
        config.deployment = DeploymentTarget::Serverless;
    }

    config.validate()?;
    Ok(config)
}

/// Start the HTTP server and block until it stops
pub fn serve(config: ServerConfig) -> CliResult<()> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(HttpServer::with_config(config).start())
        .map_err(|e| {
            let detail = e.to_string();
            log_event_with_fields(Event::ServerFailed, &[("detail", detail.as_str())]);
            CliError::serve_failed(detail)
        })
}

/// Validate a payload from a file or stdin and print the outcome
pub fn validate(input: Option<PathBuf>) -> CliResult<()> {
    let raw = match input {
        Some(path) => fs::read_to_string(&path)
            .map_err(|e| CliError::io_error(format!("Failed to read {}: {}", path.display(), e)))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    validate_payload(&raw, &mut io::stdout())
}

/// Validate `raw` and write a JSON report to `out`.
///
/// Returns an error when the payload is not JSON or fails the schema. The
/// report is written only for payloads that parse.
pub fn validate_payload<W: Write>(raw: &str, out: &mut W) -> CliResult<()> {
    let payload: Value = serde_json::from_str(raw)
        .map_err(|e| CliError::parse_error(format!("Payload is not valid JSON: {}", e)))?;

    let (report, result) = match schema::validate(&payload) {
        Ok(submission) => (json!({ "valid": true, "submission": submission }), Ok(())),
        Err(err) => {
            let count = err.issues().len();
            (
                json!({ "valid": false, "errors": err.issues() }),
                Err(CliError::invalid_submission(count)),
            )
        }
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;

    #[test]
    fn test_validate_payload_accepts() {
        let mut out = Vec::new();
        validate_payload(
            r#"{"name":"Jo","email":"jo@x.com","phone":"5551234567","utm":"x"}"#,
            &mut out,
        )
        .unwrap();

        let report: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["valid"], true);
        assert_eq!(report["submission"]["name"], "Jo");
        assert!(report["submission"].get("utm").is_none());
    }

    #[test]
    fn test_validate_payload_rejects() {
        let mut out = Vec::new();
        let err = validate_payload(r#"{"name":"J","email":"jo@x.com","phone":"5551234567"}"#, &mut out)
            .unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::InvalidSubmission);

        let report: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["valid"], false);
        assert_eq!(report["errors"][0]["path"][0], "name");
    }

    #[test]
    fn test_validate_payload_bad_json() {
        let mut out = Vec::new();
        let err = validate_payload("{", &mut out).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ParseError);
        assert!(err.to_string().starts_with("LEADLINE_CLI_PARSE_ERROR"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_resolve_config_overrides() {
        let config = resolve_config(None, Some("127.0.0.1".into()), Some(8081), true).unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:8081");
        assert_eq!(config.deployment, DeploymentTarget::Serverless);
    }

    #[test]
    fn test_resolve_config_rejects_zero_port() {
        let err = resolve_config(None, None, Some(0), false).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
