//! Domain models for the rates service.

pub mod date;
pub mod selector;
pub mod table;

pub use date::{IndexFile, PublicationDate};
pub use selector::CurrencySelector;
pub use table::{CurrencyRate, RateTable, ResourceId, TableType};
