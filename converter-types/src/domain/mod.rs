//! Domain models for the currency converter.

pub mod amount;
pub mod conversion;
pub mod currency;

pub use amount::{Amount, round_to};
pub use conversion::{Conversion, format_timestamp};
pub use currency::CurrencyCode;
