//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use converter_types::{
    AppError, ConversionError, ConversionResponse, ConvertQuery, HealthResponse, RateProvider,
};

use crate::ConversionService;

/// Application state shared across handlers.
pub struct AppState<P: RateProvider> {
    pub service: ConversionService<P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<ConversionError> for ApiError {
    fn from(err: ConversionError) -> Self {
        ApiError(AppError::Conversion(err))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AppError::MissingParameters => StatusCode::BAD_REQUEST,
            AppError::Conversion(ConversionError::InvalidAmount) => StatusCode::BAD_REQUEST,
            AppError::Conversion(ConversionError::UpstreamUnavailable { .. }) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Conversion(ConversionError::RateUnavailable(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ConversionResponse::failure(self.0.to_string());
        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".into(),
    })
}

/// Convert an amount between two currencies.
///
/// Parameters are read as raw pairs so a repeated key keeps its first value.
#[tracing::instrument(skip(state, pairs))]
pub async fn convert<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ApiError> {
    let req = ConvertQuery::from_pairs(pairs).into_request()?;

    tracing::info!(
        source = %req.source,
        destination = %req.destination,
        amount = %req.amount,
        "converting"
    );

    let conversion = state.service.convert(&req).await?;
    Ok(Json(ConversionResponse::from(conversion)))
}
