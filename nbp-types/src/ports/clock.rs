//! Source of "today" for date validation and index selection.

use chrono::NaiveDate;

pub trait Clock: Send + Sync + 'static {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock pinned to one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
