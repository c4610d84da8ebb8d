//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use nbp_types::{
    AppError, Envelope, PublicationDate, QueryError, RateFeed, RateTable, TableType,
};

use crate::QueryService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<F: RateFeed> {
    pub service: QueryService<F>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Upstream(msg) => {
                tracing::error!("upstream failure: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            }
            AppError::Internal(msg) => {
                tracing::error!("internal failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(Envelope::<()>::error(message))).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// OpenAPI document.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Rates of one table for a day, e.g. `/2015-01-02/avg/USD,EUR`.
#[tracing::instrument(skip(state))]
pub async fn rates<F: RateFeed>(
    State(state): State<Arc<AppState<F>>>,
    Path((date, table, codes)): Path<(String, String, String)>,
) -> Result<Json<Envelope<RateTable>>, ApiError> {
    PublicationDate::parse(&date)?;
    let table: TableType = table.parse()?;
    let rates = state.service.rates(table, &date, &codes).await?;
    Ok(Json(Envelope::success(rates)))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError(AppError::NotFound(
        "The resource you're looking for was not found".into(),
    ))
}
