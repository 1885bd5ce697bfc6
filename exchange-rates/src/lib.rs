//! Exchange rate provider adapters.
//!
//! Both adapters implement the [`RateProvider`] port from `converter-types`:
//!
//! - [`FrankfurterProvider`] asks the public Frankfurter API for the latest
//!   rate, one HTTP request per lookup, bounded by a request timeout.
//! - [`FixedRateProvider`] answers from a hardcoded table of USD-relative
//!   rates, for offline development and tests.
//!
//! # Example
//! ```no_run
//! use std::time::Duration;
//! use converter_types::{CurrencyCode, RateProvider};
//! use exchange_rates::FrankfurterProvider;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = FrankfurterProvider::new(
//!     exchange_rates::DEFAULT_BASE_URL,
//!     Duration::from_secs(10),
//! )?;
//! let brl = CurrencyCode::new("BRL").unwrap();
//! let usd = CurrencyCode::new("USD").unwrap();
//! let rate = provider.get_rate(&brl, &usd).await?;
//! println!("1 BRL = {rate} USD");
//! # Ok(())
//! # }
//! ```

mod fixed;
mod frankfurter;

pub use converter_types::{ProviderError, RateProvider};
pub use fixed::FixedRateProvider;
pub use frankfurter::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, FrankfurterProvider};
