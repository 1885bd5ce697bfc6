//! Hardcoded exchange rates for development and testing.

use std::collections::HashMap;

use async_trait::async_trait;

use converter_types::{CurrencyCode, ProviderError, RateProvider};

/// Default table: currency code and its value in USD.
const DEFAULT_USD_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 1.087),
    ("GBP", 1.266),
    ("INR", 0.01203),
    ("BRL", 0.1782),
];

/// Rate provider answering from a fixed table of USD-relative rates.
///
/// Cross rates are derived through USD: `rate(from, to) = from_usd / to_usd`.
#[derive(Debug, Clone)]
pub struct FixedRateProvider {
    usd_rates: HashMap<CurrencyCode, f64>,
}

impl FixedRateProvider {
    /// Builds a provider from `(code, value in USD)` pairs.
    pub fn new(usd_rates: impl IntoIterator<Item = (CurrencyCode, f64)>) -> Self {
        Self {
            usd_rates: usd_rates.into_iter().collect(),
        }
    }

    /// Codes this provider knows about, in no particular order.
    pub fn currencies(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.usd_rates.keys()
    }
}

impl Default for FixedRateProvider {
    fn default() -> Self {
        Self::new(
            DEFAULT_USD_RATES
                .iter()
                .filter_map(|(code, rate)| CurrencyCode::new(code).map(|c| (c, *rate))),
        )
    }
}

#[async_trait]
impl RateProvider for FixedRateProvider {
    async fn get_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, ProviderError> {
        // Either code missing from the table means no rate for the pair.
        let from_usd = self
            .usd_rates
            .get(from)
            .ok_or_else(|| ProviderError::RateNotFound(from.clone()))?;
        let to_usd = self
            .usd_rates
            .get(to)
            .ok_or_else(|| ProviderError::RateNotFound(to.clone()))?;

        if from == to {
            return Ok(1.0);
        }
        Ok(from_usd / to_usd)
    }
}
