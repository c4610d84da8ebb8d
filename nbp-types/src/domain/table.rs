//! Rate tables as published by the feed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::QueryError;

/// Rate tables supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum TableType {
    /// Table A: daily average rates.
    #[serde(rename = "avg")]
    Average,
    /// Table C: buy and sell rates.
    #[serde(rename = "both")]
    BuyAndSell,
}

impl TableType {
    /// The leading character of this table's index entries.
    pub fn prefix(&self) -> char {
        match self {
            TableType::Average => 'a',
            TableType::BuyAndSell => 'c',
        }
    }

    /// The name used in routes and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            TableType::Average => "avg",
            TableType::BuyAndSell => "both",
        }
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avg" | "a" => Ok(TableType::Average),
            "both" | "c" => Ok(TableType::BuyAndSell),
            _ => Err(QueryError::InvalidTableType(s.to_string())),
        }
    }
}

/// Name of one published table document, e.g. `a001z150102`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the XML document on the feed.
    pub fn document_name(&self) -> String {
        format!("{}.xml", self.0)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One day's table of currency rates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RateTable {
    /// Table number assigned by the bank
    #[schema(example = "001/A/NBP/2015")]
    pub table_number: String,
    /// Publication date as written in the document
    #[schema(example = "2015-01-02")]
    pub from_date: String,
    /// Entries in the order the bank lists them
    pub currencies: Vec<CurrencyRate>,
}

impl RateTable {
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.currencies.iter().map(|c| c.code.as_str())
    }

    pub fn get(&self, code: &str) -> Option<&CurrencyRate> {
        self.currencies.iter().find(|c| c.code == code)
    }
}

/// A single currency entry. Rates are kept exactly as published.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CurrencyRate {
    #[schema(example = "USD")]
    pub code: String,
    #[schema(example = "dolar amerykański")]
    pub name: String,
    #[schema(example = "1")]
    pub ratio: String,
    /// Empty for buy/sell tables
    #[schema(example = "3,5725")]
    pub average: String,
    /// Empty for average tables
    pub buy: String,
    /// Empty for average tables
    pub sell: String,
}
