//! Integration tests for the HTTP routes.
//!
//! These tests drive the router with an in-memory feed and verify status
//! codes and the JSend envelopes.

use std::collections::HashMap;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use nbp_hex::{QueryService, inbound::HttpServer};
use nbp_types::{CurrencyRate, FeedError, FixedClock, IndexFile, RateFeed, RateTable, ResourceId};

/// Feed with one published week in January 2015.
struct StaticFeed {
    indexes: HashMap<IndexFile, &'static str>,
    unreachable: bool,
}

#[async_trait]
impl RateFeed for StaticFeed {
    async fn fetch_index(&self, file: IndexFile) -> Result<String, FeedError> {
        if self.unreachable {
            return Err(FeedError::Unavailable("connection refused".into()));
        }
        self.indexes
            .get(&file)
            .map(|s| s.to_string())
            .ok_or_else(|| FeedError::Unavailable(format!("404 for {}", file)))
    }

    async fn fetch_table(&self, id: &ResourceId) -> Result<RateTable, FeedError> {
        let (number, date) = match id.as_str() {
            "a001z150102" => ("001/A/NBP/2015", "2015-01-02"),
            "c001z150102" => ("1/C/NBP/2015", "2015-01-02"),
            other => return Err(FeedError::Unavailable(format!("404 for {}", other))),
        };
        let is_average = id.as_str().starts_with('a');
        let rate = |code: &str, value: &str| CurrencyRate {
            code: code.into(),
            name: code.to_lowercase(),
            ratio: "1".into(),
            average: if is_average { value.into() } else { String::new() },
            buy: if is_average { String::new() } else { value.into() },
            sell: if is_average { String::new() } else { value.into() },
        };
        Ok(RateTable {
            table_number: number.into(),
            from_date: date.into(),
            currencies: vec![rate("USD", "3,5725"), rate("EUR", "4,3078"), rate("GBP", "5,5191")],
        })
    }
}

fn app_with(unreachable: bool) -> axum::Router {
    let feed = StaticFeed {
        indexes: HashMap::from([(IndexFile::Year(2015), "c001z150102\na001z150102\n")]),
        unreachable,
    };
    let today = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
    let service = QueryService::new(feed).with_clock(FixedClock(today));
    HttpServer::new(service).router()
}

fn app() -> axum::Router {
    app_with(false)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn call(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(get(uri)).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_average_rates_success_envelope() {
    let (status, json) = call(app(), "/2015-01-02/avg/USD,EUR").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["tableNumber"], "001/A/NBP/2015");
    assert_eq!(json["data"]["fromDate"], "2015-01-02");
    let currencies = json["data"]["currencies"].as_array().unwrap();
    assert_eq!(currencies.len(), 2);
    assert_eq!(currencies[0]["code"], "USD");
    assert_eq!(currencies[1]["code"], "EUR");
    assert_eq!(currencies[0]["buy"], "");
}

#[tokio::test]
async fn test_weekend_falls_back_to_friday() {
    let (status, json) = call(app(), "/2015-01-04/both/*").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["tableNumber"], "1/C/NBP/2015");
    assert_eq!(json["data"]["currencies"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_bad_date_is_400() {
    let (status, json) = call(app(), "/2020-13-40/avg/*").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        serde_json::json!({"status": "error", "message": "Given date is wrong. Use 'YYYY-MM-DD'"})
    );
}

#[tokio::test]
async fn test_bad_table_type_is_400() {
    let (status, json) = call(app(), "/2015-01-02/mid/*").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Given type is wrong. Use 'avg' or 'both'");
}

#[tokio::test]
async fn test_date_is_checked_before_table_type() {
    let (status, json) = call(app(), "/2020-13-40/xyz/*").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Given date is wrong. Use 'YYYY-MM-DD'");
}

#[tokio::test]
async fn test_table_type_is_checked_before_future_date() {
    let (status, json) = call(app(), "/2026-10-15/xyz/*").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Given type is wrong. Use 'avg' or 'both'");
}

#[tokio::test]
async fn test_empty_code_list_is_400() {
    let (status, json) = call(app(), "/2015-01-02/avg/,").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert_eq!(
        json["message"],
        "Given code is wrong. Use '*' or comma-separated codes like 'USD,EUR'"
    );
}

#[tokio::test]
async fn test_future_and_out_of_range_dates_are_400() {
    let (status, json) = call(app(), "/2026-10-15/avg/*").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Given date is wrong. Can't use future date");

    let (status, json) = call(app(), "/2001-01-01/avg/*").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Given date is wrong. Min date is 2002-01-02");
}

#[tokio::test]
async fn test_exhausted_fallback_is_404() {
    let (status, json) = call(app(), "/2015-01-30/avg/*").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn test_unreachable_feed_is_502() {
    let (status, json) = call(app_with(true), "/2015-01-02/avg/*").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (status, json) = call(app(), "/2015-01-02/avg").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "The resource you're looking for was not found");
}

#[tokio::test]
async fn test_health_and_openapi() {
    let (status, json) = call(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");

    let (status, json) = call(app(), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/{date}/{table}/{codes}"].is_object());
}

#[tokio::test]
async fn test_cors_header_present() {
    let request = Request::builder()
        .uri("/health")
        .header("Origin", "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
