//! HTTP adapter for the Frankfurter exchange rate API.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use converter_types::{CurrencyCode, ProviderError, RateProvider};

/// Endpoint returning the latest published rates.
pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app/latest";

/// Upper bound on a single upstream request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Body of `GET /latest?from=BRL&to=USD`:
/// `{"amount":1.0,"base":"BRL","date":"2025-05-14","rates":{"USD":0.17821}}`
#[derive(Debug, Deserialize)]
struct LatestRates {
    #[serde(default)]
    rates: Option<HashMap<String, f64>>,
}

/// Rate provider backed by the Frankfurter API.
///
/// No API key is needed. Lookups are never retried.
#[derive(Debug, Clone)]
pub struct FrankfurterProvider {
    base_url: String,
    http: Client,
}

impl FrankfurterProvider {
    /// Creates a provider for `base_url` whose requests give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RateProvider for FrankfurterProvider {
    #[tracing::instrument(skip(self, from, to), fields(from = %from, to = %to))]
    async fn get_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, ProviderError> {
        debug!(url = %self.base_url, "requesting latest rate");

        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("from", from.as_str()), ("to", to.as_str())])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "rate request failed");
                ProviderError::Unavailable(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "provider returned an error status");
            return Err(ProviderError::Unavailable(format!("HTTP {}", status)));
        }

        let body: LatestRates = resp.json().await.map_err(|e| {
            warn!(error = %e, "could not decode provider response");
            ProviderError::Unavailable(e.to_string())
        })?;

        body.rates
            .and_then(|rates| rates.get(to.as_str()).copied())
            .ok_or_else(|| ProviderError::RateNotFound(to.clone()))
    }
}
