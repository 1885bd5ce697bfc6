//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use exchange_rates::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Which exchange rate provider backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Live rates from the Frankfurter API.
    Frankfurter,
    /// Hardcoded development rates; no network access.
    Fixed,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub provider: ProviderKind,
    pub rates_api_url: String,
    pub rates_timeout: Duration,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid PORT: {}", e))?;

        let provider = match lookup("RATES_PROVIDER")
            .unwrap_or_else(|| "frankfurter".to_string())
            .to_lowercase()
            .as_str()
        {
            "frankfurter" => ProviderKind::Frankfurter,
            "fixed" => ProviderKind::Fixed,
            other => anyhow::bail!(
                "invalid RATES_PROVIDER: {}. Supported: frankfurter, fixed",
                other
            ),
        };

        let rates_api_url = lookup("RATES_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let rates_timeout = match lookup("RATES_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|e| anyhow::anyhow!("invalid RATES_TIMEOUT_SECS: {}", e))?;
                if secs == 0 {
                    anyhow::bail!("RATES_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        let log_format = match lookup("LOG_FORMAT")
            .unwrap_or_else(|| "text".to_string())
            .to_lowercase()
            .as_str()
        {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => anyhow::bail!("invalid LOG_FORMAT: {}. Supported: text, json", other),
        };

        Ok(Self {
            port,
            provider,
            rates_api_url,
            rates_timeout,
            log_format,
        })
    }
}
