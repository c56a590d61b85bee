//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DB_PATH, DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Doubles as the CLI surface (via `clap`) and the programmatic
/// configuration for library usage:
///
/// ```no_run
/// use a11y_status::Config;
///
/// let config = Config {
///     port: 8080,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "a11y_status", about = "Web page accessibility audit service")]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 3001, env = "PORT")]
    pub port: u16,

    /// Database path (SQLite file)
    #[arg(long, default_value = DB_PATH, env = "A11Y_STATUS_DB_PATH")]
    pub db_path: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Page fetch timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value for page fetches
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            db_path: PathBuf::from(DB_PATH),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_cli_defaults() {
        let from_cli = Config::parse_from(["a11y_status"]);
        let defaults = Config::default();
        assert_eq!(from_cli.host, defaults.host);
        assert_eq!(from_cli.port, defaults.port);
        assert_eq!(from_cli.db_path, defaults.db_path);
        assert_eq!(from_cli.timeout_seconds, defaults.timeout_seconds);
        assert_eq!(from_cli.user_agent, defaults.user_agent);
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::parse_from([
            "a11y_status",
            "--port",
            "8080",
            "--db-path",
            "/tmp/test.db",
            "--log-level",
            "debug",
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_path, std::path::PathBuf::from("/tmp/test.db"));
        assert!(matches!(config.log_level, LogLevel::Debug));
    }
}
