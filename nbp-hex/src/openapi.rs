//! OpenAPI document for the rates API.

#![allow(dead_code)] // Path functions and envelope schemas only feed the generated document

use nbp_types::{CurrencyRate, RateTable, TableType};
use utoipa::{OpenApi, ToSchema};

/// Successful response envelope
#[derive(ToSchema)]
struct RatesEnvelope {
    #[schema(example = "success")]
    status: String,
    data: RateTable,
}

/// Error response envelope
#[derive(ToSchema)]
struct ErrorEnvelope {
    #[schema(example = "error")]
    status: String,
    #[schema(example = "Given date is wrong. Use 'YYYY-MM-DD'")]
    message: String,
}

// Dummy functions to generate path documentation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Rates of one table for a day
///
/// Days without a publication (weekends, holidays) are answered with the
/// closest earlier table.
#[utoipa::path(
    get,
    path = "/{date}/{table}/{codes}",
    tag = "rates",
    params(
        ("date" = String, Path, description = "Day in YYYY-MM-DD form, not before 2002-01-02", example = "2015-01-02"),
        ("table" = String, Path, description = "`avg` for average rates, `both` for buy/sell rates", example = "avg"),
        ("codes" = String, Path, description = "`*` or comma-separated currency codes", example = "USD,EUR")
    ),
    responses(
        (status = 200, description = "Rate table", body = RatesEnvelope),
        (status = 400, description = "Malformed, future, or out-of-range date, or unknown table", body = ErrorEnvelope),
        (status = 404, description = "No table published within the fallback window", body = ErrorEnvelope),
        (status = 502, description = "Feed unreachable", body = ErrorEnvelope),
        (status = 500, description = "Feed document could not be decoded", body = ErrorEnvelope)
    )
)]
async fn rates() {}

/// OpenAPI documentation for the rates API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "NBP Exchange Rates API",
        version = "1.0.0",
        description = "Exchange rates published by Narodowy Bank Polski, re-served as JSON.",
        license(name = "MIT"),
    ),
    paths(health, rates),
    components(schemas(RatesEnvelope, ErrorEnvelope, RateTable, CurrencyRate, TableType)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "rates", description = "Average and buy/sell rate tables"),
    )
)]
pub struct ApiDoc;
