//! Outcome of a successful conversion.

use chrono::{DateTime, SecondsFormat, Utc};

/// A converted amount stamped with the moment it was computed.
///
/// The timestamp is local computation time, not the provider's quote date.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub converted_amount: f64,
    pub quote_timestamp: DateTime<Utc>,
}

impl Conversion {
    /// Stamps `converted_amount` with the current UTC time.
    pub fn now(converted_amount: f64) -> Self {
        Self {
            converted_amount,
            quote_timestamp: Utc::now(),
        }
    }
}

/// Renders a timestamp as ISO-8601 with microseconds and a `+00:00` offset.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, false)
}
