//! Amounts parsed from request input.

use std::str::FromStr;

use crate::error::ConversionError;

/// Number of decimal places kept in a converted amount.
pub const RESULT_DECIMAL_PLACES: i32 = 4;

/// A finite floating-point amount to convert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, ConversionError> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidAmount);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Applies an exchange rate and rounds to [`RESULT_DECIMAL_PLACES`].
    ///
    /// Fails when the product overflows `f64`.
    pub fn apply_rate(&self, rate: f64) -> Result<f64, ConversionError> {
        let product = self.0 * rate;
        if !product.is_finite() {
            return Err(ConversionError::InvalidAmount);
        }
        Ok(round_to(product, RESULT_DECIMAL_PLACES))
    }
}

impl FromStr for Amount {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| ConversionError::InvalidAmount)?;
        Self::new(value)
    }
}

/// Rounds half away from zero to `places` decimal places.
///
/// Values too large to scale are returned unchanged; they have no
/// fractional digits left to round.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_and_decimal() {
        assert_eq!("100".parse::<Amount>().unwrap().value(), 100.0);
        assert_eq!("12.5".parse::<Amount>().unwrap().value(), 12.5);
        assert_eq!(" 3 ".parse::<Amount>().unwrap().value(), 3.0);
    }

    #[test]
    fn test_parse_scientific_notation() {
        assert_eq!("1e3".parse::<Amount>().unwrap().value(), 1000.0);
    }

    #[test]
    fn test_non_numeric_amount_fails() {
        for raw in ["abc", "", "10,50", "1.2.3"] {
            assert!(
                matches!(raw.parse::<Amount>(), Err(ConversionError::InvalidAmount)),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_non_finite_amount_fails() {
        for raw in ["NaN", "inf", "-infinity"] {
            assert!(matches!(
                raw.parse::<Amount>(),
                Err(ConversionError::InvalidAmount)
            ));
        }
    }

    #[test]
    fn test_apply_rate_rounds_to_four_places() {
        let amount: Amount = "100".parse().unwrap();
        // 100 * 0.2 is 20.000000000000004 in binary floating point
        assert_eq!(amount.apply_rate(0.2).unwrap(), 20.0);

        let amount: Amount = "1".parse().unwrap();
        assert_eq!(amount.apply_rate(0.123456).unwrap(), 0.1235);
    }

    #[test]
    fn test_apply_rate_huge_finite_product_is_kept() {
        let amount: Amount = "1e305".parse().unwrap();
        let converted = amount.apply_rate(0.5).unwrap();
        assert!(converted.is_finite());
        assert_eq!(converted, 5e304);
    }

    #[test]
    fn test_apply_rate_overflow_fails() {
        let amount: Amount = "1e308".parse().unwrap();
        assert_eq!(amount.apply_rate(10.0), Err(ConversionError::InvalidAmount));
    }

    #[test]
    fn test_round_to_leaves_unscalable_values() {
        assert_eq!(round_to(5e304, 4), 5e304);
        assert_eq!(round_to(-f64::MAX, 4), -f64::MAX);
    }

    #[test]
    fn test_round_to_is_deterministic() {
        let a = round_to(17.82149999 * 3.3, 4);
        let b = round_to(17.82149999 * 3.3, 4);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_round_negative_values() {
        assert_eq!(round_to(-1.23456, 4), -1.2346);
    }
}
