//! Decoding of table documents.
//!
//! Documents declare their charset (ISO-8859-2 in practice) in the XML
//! declaration. The bytes are transcoded with `encoding_rs` before the
//! structure is read with `quick-xml`.

use std::collections::HashSet;

use encoding_rs::{Encoding, UTF_8};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;

use nbp_types::{CurrencyRate, FeedError, RateTable};

#[derive(Debug, Deserialize)]
struct XmlTable {
    #[serde(rename = "numer_tabeli", default)]
    table_number: String,
    #[serde(rename = "data_publikacji", default)]
    publication_date: String,
    #[serde(rename = "pozycja", default)]
    entries: Vec<XmlEntry>,
}

#[derive(Debug, Deserialize)]
struct XmlEntry {
    #[serde(rename = "kod_waluty", default)]
    code: String,
    #[serde(rename = "nazwa_waluty", default)]
    name: String,
    #[serde(rename = "przelicznik", default)]
    ratio: String,
    #[serde(rename = "kurs_sredni", default)]
    average: String,
    #[serde(rename = "kurs_kupna", default)]
    buy: String,
    #[serde(rename = "kurs_sprzedazy", default)]
    sell: String,
}

impl From<XmlEntry> for CurrencyRate {
    fn from(entry: XmlEntry) -> Self {
        Self {
            code: entry.code.trim().to_string(),
            name: entry.name.trim().to_string(),
            ratio: entry.ratio.trim().to_string(),
            average: entry.average.trim().to_string(),
            buy: entry.buy.trim().to_string(),
            sell: entry.sell.trim().to_string(),
        }
    }
}

/// Decodes one table document.
///
/// A document without any currency entry is rejected. When a code is listed
/// more than once only its first entry is kept.
pub fn decode_table(bytes: &[u8]) -> Result<RateTable, FeedError> {
    let encoding = declared_encoding(bytes)?;
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(FeedError::Decode(format!(
            "invalid {} byte sequence",
            encoding.name()
        )));
    }

    let doc: XmlTable =
        quick_xml::de::from_str(&text).map_err(|e| FeedError::Decode(e.to_string()))?;

    if doc.entries.is_empty() {
        return Err(FeedError::Decode("document lists no currencies".into()));
    }

    let table_number = doc.table_number.trim().to_string();
    let mut seen = HashSet::new();
    let mut currencies = Vec::with_capacity(doc.entries.len());
    for rate in doc.entries.into_iter().map(CurrencyRate::from) {
        if seen.insert(rate.code.clone()) {
            currencies.push(rate);
        } else {
            tracing::warn!(table = %table_number, code = %rate.code, "repeated currency entry dropped");
        }
    }

    Ok(RateTable {
        table_number,
        from_date: doc.publication_date.trim().to_string(),
        currencies,
    })
}

/// Reads the `encoding` pseudo-attribute of the XML declaration.
///
/// Documents without a declaration are UTF-8.
fn declared_encoding(bytes: &[u8]) -> Result<&'static Encoding, FeedError> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Decl(decl)) => {
                return match decl.encoding() {
                    Some(Ok(label)) => Encoding::for_label(&label).ok_or_else(|| {
                        FeedError::Decode(format!(
                            "unsupported encoding: {}",
                            String::from_utf8_lossy(&label)
                        ))
                    }),
                    Some(Err(e)) => Err(FeedError::Decode(e.to_string())),
                    None => Ok(UTF_8),
                };
            }
            // leading whitespace or BOM
            Ok(Event::Text(_)) => {}
            _ => return Ok(UTF_8),
        }
        buf.clear();
    }
}
