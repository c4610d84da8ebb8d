//! Selection of currency codes out of a rate table.

use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::table::RateTable;

/// Wildcard that selects every currency.
pub const WILDCARD: &str = "*";

/// Which currencies a caller wants from a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencySelector {
    All,
    /// Upper-cased codes in request order, without repeats.
    Codes(Vec<String>),
}

impl CurrencySelector {
    /// Parses `*` or a comma-delimited list such as `USD,EUR`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s == WILDCARD {
            return CurrencySelector::All;
        }

        let mut codes: Vec<String> = Vec::new();
        for code in s.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            let code = code.to_ascii_uppercase();
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
        CurrencySelector::Codes(codes)
    }

    pub fn matches(&self, code: &str) -> bool {
        match self {
            CurrencySelector::All => true,
            CurrencySelector::Codes(codes) => codes.iter().any(|c| c.eq_ignore_ascii_case(code)),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CurrencySelector::All)
    }

    /// True for a list that names no code at all, such as `""` or `,`.
    pub fn is_empty(&self) -> bool {
        matches!(self, CurrencySelector::Codes(codes) if codes.is_empty())
    }
}

impl FromStr for CurrencySelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for CurrencySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencySelector::All => f.write_str(WILDCARD),
            CurrencySelector::Codes(codes) => f.write_str(&codes.join(",")),
        }
    }
}

impl RateTable {
    /// Keeps only the selected currencies, in table order.
    ///
    /// The wildcard returns the table untouched. Unknown codes are ignored and
    /// a code appears at most once in the result.
    pub fn filter(mut self, selector: &CurrencySelector) -> RateTable {
        if selector.is_all() {
            return self;
        }

        let mut seen = HashSet::new();
        self.currencies
            .retain(|c| selector.matches(&c.code) && seen.insert(c.code.clone()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CurrencyRate;

    fn rate(code: &str, average: &str) -> CurrencyRate {
        CurrencyRate {
            code: code.into(),
            name: format!("waluta {code}"),
            ratio: "1".into(),
            average: average.into(),
            ..Default::default()
        }
    }

    fn sample_table() -> RateTable {
        RateTable {
            table_number: "001/A/NBP/2015".into(),
            from_date: "2015-01-02".into(),
            currencies: vec![
                rate("THB", "0,1083"),
                rate("USD", "3,5725"),
                rate("AUD", "2,9081"),
                rate("EUR", "4,3078"),
            ],
        }
    }

    fn sel(s: &str) -> CurrencySelector {
        CurrencySelector::parse(s)
    }

    #[test]
    fn test_parse_wildcard() {
        assert_eq!(sel("*"), CurrencySelector::All);
        assert_eq!(sel(" * "), CurrencySelector::All);
    }

    #[test]
    fn test_parse_codes_normalizes_and_dedups() {
        assert_eq!(
            sel("usd, EUR,,USD"),
            CurrencySelector::Codes(vec!["USD".into(), "EUR".into()])
        );
        assert_eq!(sel("USD,EUR").to_string(), "USD,EUR");
    }

    #[test]
    fn test_codes_match_regardless_of_case() {
        // `usd` selects the table's `USD` entry
        let filtered = sample_table().filter(&sel("usd,Eur"));
        let codes: Vec<_> = filtered.codes().collect();
        assert_eq!(codes, vec!["USD", "EUR"]);

        assert!(CurrencySelector::Codes(vec!["USD".into()]).matches("usd"));
    }

    #[test]
    fn test_list_without_codes_is_empty() {
        assert!(sel("").is_empty());
        assert!(sel(",").is_empty());
        assert!(sel(" , ,").is_empty());
        assert!(!sel("*").is_empty());
        assert!(!sel("USD").is_empty());
    }

    #[test]
    fn test_wildcard_is_identity() {
        let table = sample_table();
        assert_eq!(table.clone().filter(&CurrencySelector::All), table);
    }

    #[test]
    fn test_filter_keeps_table_order() {
        let filtered = sample_table().filter(&sel("EUR,USD"));
        let codes: Vec<_> = filtered.codes().collect();
        assert_eq!(codes, vec!["USD", "EUR"]);
        assert_eq!(filtered.table_number, "001/A/NBP/2015");
        assert_eq!(filtered.from_date, "2015-01-02");
    }

    #[test]
    fn test_filter_ignores_unknown_codes() {
        let filtered = sample_table().filter(&sel("USD,XYZ"));
        let codes: Vec<_> = filtered.codes().collect();
        assert_eq!(codes, vec!["USD"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let selector = sel("AUD,THB");
        let once = sample_table().filter(&selector);
        let twice = once.clone().filter(&selector);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_never_duplicates_codes() {
        let mut table = sample_table();
        table.currencies.push(rate("USD", "3,6000"));

        let filtered = table.filter(&sel("USD"));
        assert_eq!(filtered.currencies.len(), 1);
        assert_eq!(filtered.currencies[0].average, "3,5725");
    }
}
