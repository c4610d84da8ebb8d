//! Calendar dates in the forms the NBP feed expects.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};

use crate::error::QueryError;

const INPUT_FORMAT: &str = "%Y-%m-%d";

const FIRST_PUBLICATION: NaiveDate = match NaiveDate::from_ymd_opt(2002, 1, 2) {
    Some(date) => date,
    None => panic!("invalid first publication date"),
};

/// A single calendar day for which a rate table is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicationDate(NaiveDate);

impl PublicationDate {
    /// The first day the feed published a table.
    pub const FIRST: PublicationDate = PublicationDate(FIRST_PUBLICATION);

    /// Parses a `YYYY-MM-DD` date.
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        NaiveDate::parse_from_str(input, INPUT_FORMAT)
            .map(Self)
            .map_err(|_| QueryError::InvalidDate(input.to_string()))
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The `YYMMDD` form embedded in index entries.
    pub fn short_form(&self) -> String {
        self.0.format("%y%m%d").to_string()
    }

    /// Picks the yearly index that lists this date.
    ///
    /// The index of the year `today` falls in has no year suffix.
    pub fn index_file(&self, today: NaiveDate) -> IndexFile {
        if self.year() == today.year() {
            IndexFile::Current
        } else {
            IndexFile::Year(self.year())
        }
    }

    /// The preceding calendar day, if representable.
    pub fn previous(&self) -> Option<Self> {
        self.0.checked_sub_days(Days::new(1)).map(Self)
    }

    pub fn is_after(&self, today: NaiveDate) -> bool {
        self.0 > today
    }

    pub fn is_before_first_publication(&self) -> bool {
        *self < Self::FIRST
    }
}

impl fmt::Display for PublicationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(INPUT_FORMAT))
    }
}

impl FromStr for PublicationDate {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One of the yearly catalog files published next to the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexFile {
    /// `dir.txt`, the running year.
    Current,
    /// `dir<YYYY>.txt`, a past year.
    Year(i32),
}

impl IndexFile {
    pub fn file_name(&self) -> String {
        match self {
            IndexFile::Current => "dir.txt".to_string(),
            IndexFile::Year(year) => format!("dir{}.txt", year),
        }
    }
}

impl fmt::Display for IndexFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}
