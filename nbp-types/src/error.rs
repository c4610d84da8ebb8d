//! Error types for the rates service.

use crate::domain::PublicationDate;
use crate::ports::FeedError;

/// Failures while resolving, fetching, or decoding a table.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Resource for {date} was not found (searched {steps} earlier days)")]
    ResourceNotFound { date: PublicationDate, steps: u32 },

    #[error("Upstream unavailable: {0}")]
    Unavailable(String),

    #[error("Upstream returned undecodable data: {0}")]
    Decode(String),
}

impl From<FeedError> for UpstreamError {
    fn from(err: FeedError) -> Self {
        match err {
            FeedError::Unavailable(msg) => UpstreamError::Unavailable(msg),
            FeedError::Decode(msg) => UpstreamError::Decode(msg),
        }
    }
}

/// Query-level errors. The first group are caller mistakes.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Given date is wrong. Use 'YYYY-MM-DD'")]
    InvalidDate(String),

    #[error("Given type is wrong. Use 'avg' or 'both'")]
    InvalidTableType(String),

    #[error("Given code is wrong. Use '*' or comma-separated codes like 'USD,EUR'")]
    InvalidCodes(String),

    #[error("Given date is wrong. Can't use future date")]
    FutureDateNotAllowed(PublicationDate),

    #[error("Given date is wrong. Min date is 2002-01-02")]
    DateOutOfRange(PublicationDate),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Upstream(UpstreamError::ResourceNotFound { .. }) => {
                AppError::NotFound(err.to_string())
            }
            QueryError::Upstream(UpstreamError::Unavailable(_)) => {
                AppError::Upstream(err.to_string())
            }
            QueryError::Upstream(UpstreamError::Decode(_)) => AppError::Internal(err.to_string()),
            QueryError::InvalidDate(_)
            | QueryError::InvalidTableType(_)
            | QueryError::InvalidCodes(_)
            | QueryError::FutureDateNotAllowed(_)
            | QueryError::DateOutOfRange(_) => AppError::BadRequest(err.to_string()),
        }
    }
}
