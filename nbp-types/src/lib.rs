//! # NBP Types
//!
//! Domain types and port traits for the NBP exchange-rate service.
//! This crate has ZERO external IO dependencies - only data structures,
//! date rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (PublicationDate, RateTable, CurrencySelector)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - The JSend envelope used at the API boundaries
//! - `error/` - Query, upstream, and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CurrencyRate, CurrencySelector, IndexFile, PublicationDate, RateTable, ResourceId, TableType,
};
pub use dto::Envelope;
pub use error::{AppError, QueryError, UpstreamError};
pub use ports::{Clock, FeedError, FixedClock, RateFeed, SystemClock};
