//! Rates Application Service
//!
//! Validates a query and orchestrates the lookup through the feed port.
//! Contains NO infrastructure logic - pure orchestration.

use nbp_types::{
    Clock, CurrencySelector, PublicationDate, QueryError, RateFeed, RateTable, SystemClock,
    TableType, UpstreamError,
};

use crate::resolver::IndexResolver;

/// How many earlier days the service searches for a published table.
pub const DEFAULT_MAX_FALLBACK_DAYS: u32 = 10;

/// Application service for rate queries.
///
/// Generic over `F: RateFeed` - the adapter is injected at compile time.
/// Holds no mutable state: every query fetches from the feed.
pub struct QueryService<F: RateFeed> {
    feed: F,
    clock: Box<dyn Clock>,
    max_fallback_days: u32,
}

impl<F: RateFeed> QueryService<F> {
    /// Creates a service on the system clock with the default fallback bound.
    pub fn new(feed: F) -> Self {
        Self {
            feed,
            clock: Box::new(SystemClock),
            max_fallback_days: DEFAULT_MAX_FALLBACK_DAYS,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_max_fallback_days(mut self, days: u32) -> Self {
        self.max_fallback_days = days;
        self
    }

    /// Returns a reference to the underlying feed.
    pub fn feed(&self) -> &F {
        &self.feed
    }

    pub fn max_fallback_days(&self) -> u32 {
        self.max_fallback_days
    }

    /// Average rates published on `date`, or on the closest earlier day.
    pub async fn average(&self, date: &str, codes: &str) -> Result<RateTable, QueryError> {
        self.rates(TableType::Average, date, codes).await
    }

    /// Buy and sell rates published on `date`, or on the closest earlier day.
    pub async fn buy_and_sell(&self, date: &str, codes: &str) -> Result<RateTable, QueryError> {
        self.rates(TableType::BuyAndSell, date, codes).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn rates(
        &self,
        table: TableType,
        date: &str,
        codes: &str,
    ) -> Result<RateTable, QueryError> {
        let today = self.clock.today();
        let date = self.validate_date(date, today)?;
        let selector = CurrencySelector::parse(codes);
        if selector.is_empty() {
            return Err(QueryError::InvalidCodes(codes.to_string()));
        }

        let resolver = IndexResolver::new(&self.feed, today);
        let resolved = resolver
            .resolve_with_fallback(date, table, self.max_fallback_days)
            .await?;

        let rates = self
            .feed
            .fetch_table(&resolved.id)
            .await
            .map_err(UpstreamError::from)?;

        tracing::info!(
            resource = %resolved.id,
            published = %resolved.date,
            currencies = rates.currencies.len(),
            "rate table fetched"
        );

        Ok(rates.filter(&selector))
    }

    fn validate_date(
        &self,
        input: &str,
        today: chrono::NaiveDate,
    ) -> Result<PublicationDate, QueryError> {
        let date = PublicationDate::parse(input)?;

        if date.is_after(today) {
            return Err(QueryError::FutureDateNotAllowed(date));
        }

        if date.is_before_first_publication() {
            return Err(QueryError::DateOutOfRange(date));
        }

        Ok(date)
    }
}
