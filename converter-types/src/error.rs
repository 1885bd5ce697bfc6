//! Error types for the converter service.

use crate::domain::CurrencyCode;
use crate::ports::ProviderError;

/// Domain-level errors produced while converting an amount.
///
/// The `Display` text is the message returned to API callers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("invalid value")]
    InvalidAmount,

    /// `reason` is for logs only and is never sent to the client.
    #[error("error accessing external provider")]
    UpstreamUnavailable { reason: String },

    #[error("could not obtain exchange rate for {0}")]
    RateUnavailable(CurrencyCode),
}

impl From<ProviderError> for ConversionError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Unavailable(reason) => ConversionError::UpstreamUnavailable { reason },
            ProviderError::RateNotFound(code) => ConversionError::RateUnavailable(code),
        }
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("required parameters missing")]
    MissingParameters,

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_unavailable_names_currency() {
        let err = ConversionError::RateUnavailable(CurrencyCode::new("usd").unwrap());
        assert_eq!(err.to_string(), "could not obtain exchange rate for USD");
    }

    #[test]
    fn test_upstream_reason_is_not_displayed() {
        let err = ConversionError::from(ProviderError::Unavailable("HTTP 500".into()));
        assert_eq!(err.to_string(), "error accessing external provider");
        assert!(matches!(
            err,
            ConversionError::UpstreamUnavailable { ref reason } if reason == "HTTP 500"
        ));
    }

    #[test]
    fn test_app_error_wraps_conversion_message() {
        let err = AppError::from(ConversionError::InvalidAmount);
        assert_eq!(err.to_string(), "invalid value");
    }
}
