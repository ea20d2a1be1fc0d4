//! Selecting the rates that apply to a query window.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::interval::Interval;
use crate::rate::Rate;
use crate::store::RateStore;

/// Filters a [`RateStore`] down to the rates that apply to a weekday, clock
/// interval, and UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct RateMatcher<'a> {
    store: &'a RateStore,
}

impl<'a> RateMatcher<'a> {
    pub fn new(store: &'a RateStore) -> Self {
        Self { store }
    }

    /// All rates that apply, in store order.
    ///
    /// A rate applies when:
    /// - `day_of_week` (Monday = 0) is one of its days,
    /// - its timezone's offset at `at` equals `offset` (`±HHMM`), and
    /// - `interval` overlaps its period (see [`overlaps`]).
    ///
    /// Zones are compared by offset rather than by name, so two zones sharing
    /// an offset at `at` are interchangeable.
    ///
    /// `at` is the instant being priced (the window start, in UTC). A rate's
    /// offset depends on daylight saving, so it has to be evaluated for that
    /// instant rather than for the current clock or the rate's creation time;
    /// otherwise a February query could be checked against a July offset.
    pub fn find(
        &self,
        day_of_week: u8,
        interval: Interval,
        offset: &str,
        at: DateTime<Utc>,
    ) -> Vec<Rate> {
        self.store
            .all()
            .iter()
            .filter(|rate| {
                rate.applies_on(day_of_week)
                    && overlaps(rate.period(), interval)
                    && rate.offset_at(at) == offset
            })
            .inspect(|rate| {
                debug!(
                    days = %rate.day_names(),
                    period = %rate.period(),
                    tz = rate.timezone().name(),
                    price = rate.price(),
                    "rate matched"
                );
            })
            .cloned()
            .collect()
    }
}

/// Whether the query `interval` overlaps the rate `period`.
///
/// The period is half-open (`start..end`): a query that starts or ends exactly
/// at `period.end` does not fall inside it. A query that strictly contains the
/// period also matches.
pub fn overlaps(period: Interval, interval: Interval) -> bool {
    let within = |t: u16| period.start <= t && t < period.end;
    within(interval.start)
        || within(interval.end)
        || (interval.start < period.start && interval.end > period.end)
}
