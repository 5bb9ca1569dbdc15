use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use viewcount_telemetry::LogFormat;

pub const LISTEN_ADDR_ENV: &str = "VIEWCOUNT_GATEWAY_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "VIEWCOUNT_GATEWAY_STORAGE_BACKEND";
pub const REDIS_URL_ENV: &str = "VIEWCOUNT_GATEWAY_REDIS_URL";
pub const LOG_FORMAT_ENV: &str = "VIEWCOUNT_LOG_FORMAT";
pub const OTLP_ENDPOINT_ENV: &str = "VIEWCOUNT_OTLP_ENDPOINT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Backend bound as `VIEW_COUNTERS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    /// No binding; every valid view request answers with a 500.
    #[value(name = "none")]
    None,
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "redis")]
    Redis,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::None => write!(f, "none"),
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "viewcount-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = REDIS_URL_ENV, required_if_eq("storage", "redis"))]
    pub redis_url: Option<String>,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,

    #[arg(long, env = OTLP_ENDPOINT_ENV)]
    pub otlp_endpoint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = CLI::try_parse_from(["gateway"]).unwrap();
        assert_eq!(cli.listen_addr.to_string(), DEFAULT_LISTEN_ADDR);
        assert_eq!(cli.storage, StorageBackendArg::InMemory);
        assert_eq!(cli.log_format, LogFormatArg::Text);
        assert!(cli.redis_url.is_none());
        assert!(cli.otlp_endpoint.is_none());
    }

    #[test]
    fn redis_requires_url() {
        assert!(CLI::try_parse_from(["gateway", "--storage", "redis"]).is_err());

        let cli = CLI::try_parse_from([
            "gateway",
            "--storage",
            "redis",
            "--redis-url",
            "redis://127.0.0.1:6379",
        ])
        .unwrap();
        assert_eq!(cli.storage, StorageBackendArg::Redis);
        assert_eq!(cli.redis_url.as_deref(), Some("redis://127.0.0.1:6379"));
    }

    #[test]
    fn unbound_storage() {
        let cli = CLI::try_parse_from(["gateway", "--storage", "none"]).unwrap();
        assert_eq!(cli.storage, StorageBackendArg::None);
    }
}
