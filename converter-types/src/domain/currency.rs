//! Normalized currency codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An upper-cased currency code such as `BRL` or `USD`.
///
/// Codes are not checked against an ISO list; the rate provider is the
/// authority on which codes exist. Normalization makes comparison
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Normalizes a raw code. Returns `None` when nothing is left after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let code = raw.trim();
        if code.is_empty() {
            return None;
        }
        Some(Self(code.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
