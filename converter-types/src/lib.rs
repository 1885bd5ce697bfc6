//! # Converter Types
//!
//! Domain types and port traits for the currency converter service.
//! This crate has ZERO external IO dependencies - only data structures,
//! conversion rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, Amount, Conversion)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Amount, Conversion, CurrencyCode, format_timestamp};
pub use dto::*;
pub use error::{AppError, ConversionError};
pub use ports::{ProviderError, RateProvider};
