//! Structured logging setup
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and either a
//! JSON or human readable formatter. `RUST_LOG` overrides the configured
//! filter directives.

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Configuration for log output
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Service name attached to the startup event
    pub service_name: String,
    /// Service version attached to the startup event
    pub service_version: String,
    /// Line format
    pub format: LogFormat,
    /// Default `EnvFilter` directives
    pub filter: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::from(&LoggingConfig::default())
    }
}

impl From<&LoggingConfig> for TracingConfig {
    fn from(logging: &LoggingConfig) -> Self {
        Self {
            service_name: "receipts-api".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            format: logging.format,
            filter: logging.filter.clone(),
        }
    }
}

impl TracingConfig {
    fn env_filter(&self) -> anyhow::Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => Ok(EnvFilter::try_new(&self.filter)?),
        }
    }
}

/// Initialize the global tracing subscriber
pub fn init_tracing(config: &TracingConfig) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter()?);

    match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .try_init()?,
        LogFormat::Pretty => {
            registry.with(tracing_subscriber::fmt::layer().with_target(false)).try_init()?
        }
    }

    info!(
        service_name = %config.service_name,
        service_version = %config.service_version,
        format = %config.format,
        "Logging initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_config_defaults() {
        let config = TracingConfig::default();
        assert_eq!(config.service_name, "receipts-api");
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.filter.contains("receipts_api=debug"));
    }

    #[test]
    fn test_tracing_config_from_logging() {
        let logging = LoggingConfig { format: LogFormat::Pretty, filter: "warn".to_string() };
        let config = TracingConfig::from(&logging);
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.filter, "warn");
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let config =
            TracingConfig { filter: "receipts_api=loudest".to_string(), ..TracingConfig::default() };
        // RUST_LOG, when set in the test environment, takes precedence.
        if std::env::var("RUST_LOG").is_err() {
            assert!(config.env_filter().is_err());
        }
    }
}
