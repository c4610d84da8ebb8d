//! Index resolution.
//!
//! Each year the bank publishes a catalog (`dir.txt`, `dir2015.txt`, ...)
//! with one line per published table, e.g. `a001z150102`: the table letter,
//! a sequence number, and the publication day as `YYMMDD`.

use chrono::NaiveDate;

use nbp_types::{FeedError, PublicationDate, RateFeed, ResourceId, TableType, UpstreamError};

/// Outcome of looking one day up in an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexLookup {
    Found(ResourceId),
    /// Nothing was published that day.
    NotFound,
}

/// A resource located by the fallback walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub id: ResourceId,
    /// The day the resource was published for.
    pub date: PublicationDate,
    /// Number of days stepped back from the requested date.
    pub steps: u32,
}

/// Scans index text for the entry of `table` published on `date`.
///
/// If several lines match, the last one wins.
pub fn find_entry(index: &str, date: PublicationDate, table: TableType) -> IndexLookup {
    let needle = date.short_form();
    let prefix = table.prefix();
    let mut found: Option<&str> = None;

    for line in index.lines() {
        let line = line.trim_start_matches('\u{feff}').trim();
        if !line.contains(&needle) || !line.starts_with(prefix) {
            continue;
        }
        if let Some(previous) = found {
            tracing::warn!(
                %date,
                %table,
                previous,
                replacement = line,
                "index lists more than one entry for the day; using the last one"
            );
        }
        found = Some(line);
    }

    match found {
        Some(line) => IndexLookup::Found(ResourceId::new(line)),
        None => IndexLookup::NotFound,
    }
}

/// Looks dates up in the yearly indexes of a feed.
pub struct IndexResolver<'a, F: RateFeed> {
    feed: &'a F,
    today: NaiveDate,
}

impl<'a, F: RateFeed> IndexResolver<'a, F> {
    /// `today` decides which year is served by the unsuffixed index.
    pub fn new(feed: &'a F, today: NaiveDate) -> Self {
        Self { feed, today }
    }

    /// Fetches the index for `date`'s year once and scans it.
    pub async fn resolve(
        &self,
        date: PublicationDate,
        table: TableType,
    ) -> Result<IndexLookup, FeedError> {
        let index = self.feed.fetch_index(date.index_file(self.today)).await?;
        Ok(find_entry(&index, date, table))
    }

    /// Resolves `date`, stepping back one day at a time while nothing is
    /// published, for at most `max_steps` earlier days.
    ///
    /// The walk never goes before the first publication. A feed error on any
    /// step ends the walk.
    pub async fn resolve_with_fallback(
        &self,
        date: PublicationDate,
        table: TableType,
        max_steps: u32,
    ) -> Result<Resolved, UpstreamError> {
        let mut current = date;
        let mut steps = 0;

        loop {
            if let IndexLookup::Found(id) = self.resolve(current, table).await? {
                if steps > 0 {
                    tracing::debug!(requested = %date, resolved = %current, steps, "fell back to an earlier table");
                }
                return Ok(Resolved {
                    id,
                    date: current,
                    steps,
                });
            }

            tracing::debug!(date = %current, %table, "no table published");

            match current.previous() {
                Some(previous) if steps < max_steps && !previous.is_before_first_publication() => {
                    current = previous;
                    steps += 1;
                }
                _ => return Err(UpstreamError::ResourceNotFound { date, steps }),
            }
        }
    }
}
