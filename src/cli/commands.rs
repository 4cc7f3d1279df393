//! CLI command implementations
//!
//! `serve` boots in this order: load config, set log level, build the
//! repository, start the runtime, bind the listener.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use crate::http_server::HttpServer;
use crate::observability::Logger;
use crate::repository::{InMemoryRepository, JsonFileRepository, TimeseriesRepository};

use super::args::Command;
use super::config::ServiceConfig;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Check { config } => check(&config),
    }
}

/// Repository selected by the configuration
pub fn build_repository(config: &ServiceConfig) -> Arc<dyn TimeseriesRepository> {
    match &config.data_file {
        Some(path) => {
            let shown = path.display().to_string();
            Logger::info(
                "REPOSITORY_SELECTED",
                &[("kind", "json_file"), ("path", shown.as_str())],
            );
            Arc::new(JsonFileRepository::new(path))
        }
        None => {
            Logger::warn("REPOSITORY_SELECTED", &[("kind", "in_memory_empty")]);
            Arc::new(InMemoryRepository::new())
        }
    }
}

/// Start the HTTP server and block until it stops
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = ServiceConfig::load(config_path)?;
    if let Some(port) = port {
        if port == 0 {
            return Err(CliError::config_error("--port must be > 0"));
        }
        config.http.port = port;
    }

    Logger::set_min_severity(config.severity()?);
    let shown = config_path.display().to_string();
    Logger::info(
        "SERVICE_BOOT",
        &[
            ("config", shown.as_str()),
            ("version", env!("CARGO_PKG_VERSION")),
        ],
    );

    let repository = build_repository(&config);
    let server = HttpServer::new(config.http.clone(), repository);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate configuration and print it as JSON
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    write_effective_config(&config, &mut io::stdout())
}

fn write_effective_config<W: Write>(config: &ServiceConfig, writer: &mut W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *writer, config)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timeseries.json");
        fs::write(&path, "{}").unwrap();

        assert!(check(&path).is_ok());
    }

    #[test]
    fn test_check_missing_config() {
        let dir = TempDir::new().unwrap();
        let err = check(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code(), &super::super::errors::CliErrorCode::ConfigError);
    }

    #[test]
    fn test_effective_config_output() {
        let mut out = Vec::new();
        write_effective_config(&ServiceConfig::default(), &mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["http"]["port"], 8080);
        assert_eq!(parsed["log_level"], "INFO");
        assert!(parsed["data_file"].is_null());
    }

    #[test]
    fn test_serve_rejects_zero_port_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timeseries.json");
        fs::write(&path, "{}").unwrap();

        let err = serve(&path, Some(0)).unwrap_err();
        assert!(err.message().contains("--port"));
    }

    #[tokio::test]
    async fn test_build_repository_without_data_file_is_empty() {
        let repo = build_repository(&ServiceConfig::default());
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_build_repository_with_data_file() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("ticks.json");
        fs::write(
            &data,
            r#"[{"source":"AAPL","day":"20200520","tick":"2020-05-20T14:30:00Z","value":1.0}]"#,
        )
        .unwrap();

        let config = ServiceConfig {
            data_file: Some(data),
            ..Default::default()
        };
        let repo = build_repository(&config);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }
}
