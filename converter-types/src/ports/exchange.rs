//! Exchange rate provider port.
//!
//! This trait defines the interface for exchange rate services.
//! Implementations can be HTTP clients, fixed tables, mocks, etc.

use crate::CurrencyCode;

/// Error type for exchange rate lookups.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    /// The provider could not be reached or answered with a failure.
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    /// The provider answered but had no rate for the destination currency.
    #[error("Rate not available for {0}")]
    RateNotFound(CurrencyCode),
}

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// Get the exchange rate from one currency to another.
    /// Returns how many units of `to` you get for 1 unit of `from`.
    ///
    /// Implementations make at most one upstream request per call.
    async fn get_rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<f64, ProviderError>;
}
