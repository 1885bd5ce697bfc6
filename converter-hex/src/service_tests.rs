//! ConversionService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;

    use converter_types::{
        ConversionError, ConversionRequest, CurrencyCode, ProviderError, RateProvider,
    };

    use crate::ConversionService;

    /// Provider returning a scripted answer and recording every lookup.
    pub struct MockProvider {
        answer: Result<f64, ProviderError>,
        calls: AtomicUsize,
        last_pair: Mutex<Option<(CurrencyCode, CurrencyCode)>>,
    }

    impl MockProvider {
        pub fn answering(answer: Result<f64, ProviderError>) -> Self {
            Self {
                answer,
                calls: AtomicUsize::new(0),
                last_pair: Mutex::new(None),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RateProvider for MockProvider {
        async fn get_rate(
            &self,
            from: &CurrencyCode,
            to: &CurrencyCode,
        ) -> Result<f64, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_pair.lock().unwrap() = Some((from.clone(), to.clone()));
            self.answer.clone()
        }
    }

    fn code(raw: &str) -> CurrencyCode {
        CurrencyCode::new(raw).unwrap()
    }

    fn request(source: &str, destination: &str, amount: &str) -> ConversionRequest {
        ConversionRequest {
            source: code(source),
            destination: code(destination),
            amount: amount.to_string(),
        }
    }

    #[tokio::test]
    async fn test_convert_applies_rate_and_rounds() {
        let service = ConversionService::new(MockProvider::answering(Ok(0.2)));

        let conversion = service.convert(&request("BRL", "USD", "100")).await.unwrap();

        assert_eq!(conversion.converted_amount, 20.0);
        assert_eq!(service.provider().calls(), 1);
    }

    #[tokio::test]
    async fn test_convert_passes_normalized_codes_to_provider() {
        let service = ConversionService::new(MockProvider::answering(Ok(0.5)));

        service.convert(&request("brl", "usd", "10")).await.unwrap();

        let pair = service.provider().last_pair.lock().unwrap().clone();
        assert_eq!(pair, Some((code("BRL"), code("USD"))));
    }

    #[tokio::test]
    async fn test_same_currency_skips_provider() {
        let service = ConversionService::new(MockProvider::answering(Err(
            ProviderError::Unavailable("must not be called".into()),
        )));

        let before = Utc::now();
        let conversion = service.convert(&request("brl", "BRL", "42.5")).await.unwrap();
        let after = Utc::now();

        assert_eq!(conversion.converted_amount, 42.5);
        assert!(conversion.quote_timestamp >= before && conversion.quote_timestamp <= after);
        assert_eq!(service.provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_same_currency_keeps_unrounded_amount() {
        let service = ConversionService::new(MockProvider::answering(Ok(1.0)));

        let conversion = service
            .convert(&request("USD", "USD", "1.123456789"))
            .await
            .unwrap();

        assert_eq!(conversion.converted_amount, 1.123456789);
    }

    #[tokio::test]
    async fn test_invalid_amount_fails_before_lookup() {
        let service = ConversionService::new(MockProvider::answering(Ok(0.2)));

        for (source, destination) in [("BRL", "USD"), ("USD", "USD")] {
            let result = service.convert(&request(source, destination, "abc")).await;
            assert_eq!(result, Err(ConversionError::InvalidAmount));
        }
        assert_eq!(service.provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let service = ConversionService::new(MockProvider::answering(Err(
            ProviderError::Unavailable("HTTP 500 Internal Server Error".into()),
        )));

        let result = service.convert(&request("BRL", "USD", "100")).await;

        assert!(matches!(
            result,
            Err(ConversionError::UpstreamUnavailable { .. })
        ));
        assert_eq!(
            result.unwrap_err().to_string(),
            "error accessing external provider"
        );
    }

    #[tokio::test]
    async fn test_missing_rate_names_destination() {
        let service = ConversionService::new(MockProvider::answering(Err(
            ProviderError::RateNotFound(code("USD")),
        )));

        let err = service
            .convert(&request("BRL", "usd", "100"))
            .await
            .unwrap_err();

        assert_eq!(err, ConversionError::RateUnavailable(code("USD")));
        assert!(err.to_string().contains("USD"));
    }

    #[tokio::test]
    async fn test_repeated_conversions_are_identical() {
        let service = ConversionService::new(MockProvider::answering(Ok(0.178213)));

        let first = service.convert(&request("BRL", "USD", "123.45")).await.unwrap();
        let second = service.convert(&request("BRL", "USD", "123.45")).await.unwrap();

        assert_eq!(
            first.converted_amount.to_bits(),
            second.converted_amount.to_bits()
        );
        assert_eq!(first.converted_amount, 22.0004);
    }

    #[tokio::test]
    async fn test_huge_amount_stays_finite() {
        let service = ConversionService::new(MockProvider::answering(Ok(0.5)));

        let conversion = service.convert(&request("BRL", "USD", "1e305")).await.unwrap();

        assert_eq!(conversion.converted_amount, 5e304);
    }

    #[tokio::test]
    async fn test_overflowing_product_is_invalid_amount() {
        let service = ConversionService::new(MockProvider::answering(Ok(10.0)));

        let result = service.convert(&request("BRL", "USD", "1e308")).await;

        assert_eq!(result, Err(ConversionError::InvalidAmount));
        assert_eq!(service.provider().calls(), 1);
    }
}
