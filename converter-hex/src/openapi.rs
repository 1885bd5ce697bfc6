//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use converter_types::dto::{ConversionResponse, ConvertQuery, HealthResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse, example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Convert an amount between currencies
///
/// Converting a currency to itself returns the amount unchanged without
/// contacting the exchange rate provider. `/converter` is an alias.
#[utoipa::path(
    get,
    path = "/convert",
    tag = "conversion",
    params(ConvertQuery),
    responses(
        (status = 200, description = "Converted amount with the time it was computed", body = ConversionResponse,
            example = json!({"converted_amount": 17.821, "quote_timestamp": "2025-05-15T01:45:30.123456+00:00"})),
        (status = 400, description = "Missing parameter or invalid amount", body = ConversionResponse,
            example = json!({"converted_amount": null, "quote_timestamp": null, "error": "required parameters missing"})),
        (status = 422, description = "No rate available for the destination currency", body = ConversionResponse,
            example = json!({"converted_amount": null, "quote_timestamp": null, "error": "could not obtain exchange rate for XYZ"})),
        (status = 502, description = "Exchange rate provider unavailable", body = ConversionResponse,
            example = json!({"converted_amount": null, "quote_timestamp": null, "error": "error accessing external provider"}))
    )
)]
async fn convert() {}

/// OpenAPI documentation for the converter API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Converter API",
        version = "1.0.0",
        description = "Converts an amount from one currency to another using the latest rate published by the Frankfurter API.\n\nCurrency codes are case-insensitive. Results are rounded to 4 decimal places.",
        license(name = "MIT"),
    ),
    paths(health, convert),
    components(schemas(ConversionResponse, HealthResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "conversion", description = "Currency conversion"),
    )
)]
pub struct ApiDoc;
