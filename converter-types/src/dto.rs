//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Conversion, CurrencyCode, format_timestamp};
use crate::error::AppError;

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Raw query string of a conversion request.
///
/// Every field is optional so that a missing parameter is reported as
/// [`AppError::MissingParameters`] instead of a generic extractor rejection.
#[derive(Debug, Clone, Default, PartialEq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConvertQuery {
    /// Source currency code (case-insensitive). Alias: `origem`
    #[param(example = "BRL")]
    pub source: Option<String>,
    /// Destination currency code (case-insensitive). Alias: `destino`
    #[param(example = "USD")]
    pub destination: Option<String>,
    /// Amount to convert. Alias: `valor`
    #[param(example = "100")]
    pub amount: Option<String>,
}

impl ConvertQuery {
    /// Collects the parameters from decoded query pairs.
    ///
    /// The Portuguese names of the first public version are accepted as
    /// aliases. When a parameter repeats, under either name, the first
    /// occurrence wins; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "source" | "origem" => &mut query.source,
                "destination" | "destino" => &mut query.destination,
                "amount" | "valor" => &mut query.amount,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    /// Validates presence of all parameters and normalizes the currency codes.
    ///
    /// The amount is left as text; parsing it is part of the conversion.
    pub fn into_request(self) -> Result<ConversionRequest, AppError> {
        let source = self.source.as_deref().and_then(CurrencyCode::new);
        let destination = self.destination.as_deref().and_then(CurrencyCode::new);
        let amount = self.amount.filter(|a| !a.trim().is_empty());

        match (source, destination, amount) {
            (Some(source), Some(destination), Some(amount)) => Ok(ConversionRequest {
                source,
                destination,
                amount,
            }),
            _ => Err(AppError::MissingParameters),
        }
    }
}

/// A conversion request with every parameter present.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub source: CurrencyCode,
    pub destination: CurrencyCode,
    pub amount: String,
}

/// Response body of the conversion endpoint.
///
/// On success `error` is omitted; on failure both value fields are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConversionResponse {
    /// Converted amount, rounded to 4 decimal places
    #[schema(example = 17.821)]
    pub converted_amount: Option<f64>,
    /// When the conversion was computed (ISO-8601, UTC)
    #[schema(example = "2025-05-15T01:45:30.123456+00:00")]
    pub quote_timestamp: Option<String>,
    /// Error message, present only when the conversion failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = json!(null))]
    pub error: Option<String>,
}

impl ConversionResponse {
    /// Builds a failure body with both value fields `null`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            converted_amount: None,
            quote_timestamp: None,
            error: Some(message.into()),
        }
    }
}

impl From<Conversion> for ConversionResponse {
    fn from(conversion: Conversion) -> Self {
        Self {
            converted_amount: Some(conversion.converted_amount),
            quote_timestamp: Some(format_timestamp(&conversion.quote_timestamp)),
            error: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Health DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Response of the health check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}
