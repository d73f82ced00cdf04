use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{ApiError, ApiResult};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "RECEIPTS_CONFIG_PATH";
/// Configuration file used when neither `--config` nor the env var is set.
pub const DEFAULT_CONFIG_PATH: &str = "receipts.toml";

#[derive(Deserialize, Debug, Clone)]
pub struct Environment {
    pub env_type: String,
}

impl Default for Environment {
    fn default() -> Self {
        Self { env_type: "default".to_string() }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct LimitsConfig {
    #[serde(default = "default_max_body_size_kb")]
    pub max_body_size_kb: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_body_size_kb: default_max_body_size_kb() }
    }
}

/// Output format for log lines.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(ApiError::configuration(format!("unknown log format '{other}'"))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// `EnvFilter` directives; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: LogFormat::default(), filter: default_log_filter() }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    File(PathBuf),
    #[default]
    Defaults,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ReceiptsConfig {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(skip)]
    pub source: ConfigSource,
}

impl ReceiptsConfig {
    /// Loads configuration from `path`, `RECEIPTS_CONFIG_PATH`, or
    /// `receipts.toml`, in that order.
    ///
    /// A missing file yields the built-in defaults. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn load(path: Option<&Path>) -> ApiResult<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => std::env::var(CONFIG_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH)),
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path).map_err(|e| {
            ApiError::configuration_with_source(
                format!("failed to read {}", config_path.display()),
                e,
            )
        })?;

        let mut config = Self::from_toml_str(&config_str)?;
        config.source = ConfigSource::File(config_path);
        Ok(config)
    }

    pub fn from_toml_str(config_str: &str) -> ApiResult<Self> {
        toml::from_str(config_str)
            .map_err(|e| ApiError::configuration_with_source("failed to parse configuration", e))
    }

    /// Applies `RECEIPTS_*` environment variable overrides.
    pub fn apply_env_overrides(self) -> ApiResult<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    pub fn apply_overrides<F>(mut self, lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("RECEIPTS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("RECEIPTS_PORT") {
            self.server.port = port.trim().parse().map_err(|e| {
                ApiError::configuration_with_source(format!("invalid RECEIPTS_PORT '{port}'"), e)
            })?;
        }
        if let Some(size) = lookup("RECEIPTS_MAX_BODY_SIZE_KB") {
            self.limits.max_body_size_kb = size.trim().parse().map_err(|e| {
                ApiError::configuration_with_source(
                    format!("invalid RECEIPTS_MAX_BODY_SIZE_KB '{size}'"),
                    e,
                )
            })?;
        }
        if let Some(format) = lookup("RECEIPTS_LOG_FORMAT") {
            self.logging.format = format.parse()?;
        }
        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn max_body_bytes(&self) -> usize {
        self.limits.max_body_size_kb.saturating_mul(1024)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_max_body_size_kb() -> usize {
    1024
}
fn default_log_filter() -> String {
    "receipts_api=debug,tower_http=info,info".to_string()
}
