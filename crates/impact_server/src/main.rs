//! Impact Estimator Server
//!
//! Resolves configuration (file, `IMPACT_*` environment, flags), installs
//! the tracing subscriber and serves the REST API until interrupted.

use anyhow::Context;
use clap::Parser;
use impact_server::config::{build_config, CliArgs, ServerConfig};
use impact_server::server::Server;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Impact Estimator Server - REST API for outbreak impact estimation
///
/// Flags override `IMPACT_*` environment variables, which override the
/// configuration file.
#[derive(Parser, Debug)]
#[command(name = "impact_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to [env: IMPACT_SERVER_HOST]
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on [env: IMPACT_SERVER_PORT]
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level: trace, debug, info, warn, error [env: IMPACT_LOG_LEVEL]
    #[arg(long)]
    log_level: Option<String>,

    /// Deployment environment: development, staging, production [env: IMPACT_ENV]
    #[arg(long = "env", value_name = "ENVIRONMENT")]
    environment: Option<String>,

    /// Request lines kept for the logs endpoint [env: IMPACT_REQUEST_LOG_CAPACITY]
    #[arg(long, value_name = "LINES")]
    request_log_capacity: Option<usize>,

    /// Resolve and validate the configuration, print it, and exit
    #[arg(long)]
    check_config: bool,
}

impl Args {
    fn overrides(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            host: self.host.clone(),
            port: self.port,
            log_level: self.log_level.clone(),
            environment: self.environment.clone(),
            request_log_capacity: self.request_log_capacity,
        }
    }
}

fn init_tracing(config: &ServerConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(config.log_level.as_filter_str())
                }),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(config.use_ansi()))
        .init();
}

fn describe(config: &ServerConfig) -> String {
    format!(
        "address={} environment={} log_level={} request_log_capacity={}",
        config.socket_addr(),
        config.environment,
        config.log_level,
        config.request_log_capacity
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = build_config(&args.overrides()).context("invalid server configuration")?;

    if args.check_config {
        println!("{}", describe(&config));
        return Ok(());
    }

    init_tracing(&config);
    tracing::info!(
        version = impact_server::VERSION,
        environment = %config.environment,
        request_log_capacity = config.request_log_capacity,
        "Starting impact estimator server"
    );

    let address = config.socket_addr();
    Server::new(config)
        .run()
        .await
        .with_context(|| format!("server on {} failed", address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_map_to_overrides() {
        let args = Args::try_parse_from([
            "impact_server",
            "--port",
            "9000",
            "--env",
            "production",
            "--request-log-capacity",
            "10",
        ])
        .unwrap();
        let overrides = args.overrides();

        assert_eq!(overrides.port, Some(9000));
        assert_eq!(overrides.environment.as_deref(), Some("production"));
        assert_eq!(overrides.request_log_capacity, Some(10));
        assert!(overrides.host.is_none());
        assert!(!args.check_config);
    }

    #[test]
    fn test_describe() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..Default::default()
        };
        assert_eq!(
            describe(&config),
            "address=127.0.0.1:3000 environment=development log_level=info request_log_capacity=1000"
        );
    }
}
