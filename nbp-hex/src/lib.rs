//! # NBP Hex
//!
//! Application service layer and HTTP adapter for the rates service.
//!
//! ## Architecture
//!
//! - `resolver/` - Index lookup and the bounded walk back over unpublished days
//! - `service/` - Application service (validates and orchestrates a query)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `F: RateFeed`, allowing
//! different feed implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod resolver;
pub mod service;


pub use resolver::{IndexLookup, IndexResolver, Resolved};
pub use service::{DEFAULT_MAX_FALLBACK_DAYS, QueryService};
