//! Conversion Application Service
//!
//! Orchestrates a conversion through the rate provider port.
//! Contains NO infrastructure logic - pure business orchestration.

use converter_types::{
    Amount, Conversion, ConversionError, ConversionRequest, CurrencyCode, RateProvider,
};

/// Application service for currency conversion.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile time.
/// This enables:
/// - Swapping the live provider for the fixed table without code changes
/// - Testing with a mock provider
pub struct ConversionService<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> ConversionService<P> {
    /// Creates a new conversion service with the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Converts `req.amount` from `req.source` to `req.destination`.
    ///
    /// The amount is validated before anything else. Converting a currency
    /// to itself returns the amount unchanged without contacting the
    /// provider; otherwise exactly one rate lookup is made.
    pub async fn convert(&self, req: &ConversionRequest) -> Result<Conversion, ConversionError> {
        let amount: Amount = req.amount.parse()?;

        if req.source == req.destination {
            return Ok(Conversion::now(amount.value()));
        }

        let rate = self.rate(&req.source, &req.destination).await?;
        let converted = amount.apply_rate(rate)?;
        tracing::debug!(rate, converted, "conversion computed");

        Ok(Conversion::now(converted))
    }

    async fn rate(
        &self,
        source: &CurrencyCode,
        destination: &CurrencyCode,
    ) -> Result<f64, ConversionError> {
        self.provider
            .get_rate(source, destination)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "exchange rate lookup failed");
                ConversionError::from(e)
            })
    }
}
