//! Resolving a single price for a concrete time window.
//!
//! Malformed windows (end before start, mismatched offsets) are errors.
//! Windows that are well-formed but cannot be priced (spanning two dates, or
//! matched by several rates) are ordinary [`PriceResult`] values.

use chrono::{DateTime, Datelike, FixedOffset, Utc};
use serde::Serialize;
use tracing::debug;

use crate::error::{RateError, Result};
use crate::interval::{hhmm, Interval};
use crate::matcher::RateMatcher;
use crate::offset::offset_of;
use crate::store::RateStore;

/// Outcome of pricing a well-formed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "amount", rename_all = "snake_case")]
pub enum PriceResult {
    /// Exactly one rate applies.
    Price(u64),
    /// No rate applies.
    NoRate,
    /// More than one rate applies; no price is chosen.
    Ambiguous,
    /// Start and end fall on different local dates.
    CrossDayRange,
}

impl PriceResult {
    /// The price to report at the boundary: unpriceable outcomes become `0`.
    pub fn amount(self) -> u64 {
        match self {
            Self::Price(amount) => amount,
            Self::NoRate | Self::Ambiguous | Self::CrossDayRange => 0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PriceResolver<'a> {
    matcher: RateMatcher<'a>,
}

impl<'a> PriceResolver<'a> {
    pub fn new(store: &'a RateStore) -> Self {
        Self {
            matcher: RateMatcher::new(store),
        }
    }

    /// Price the window `start..end`.
    ///
    /// The weekday (Monday = 0), the `HHMM` interval and the `±HHMM` offset
    /// are all taken from the timestamps' own offset.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::InvalidRange`] if `start >= end`, or
    /// [`RateError::InconsistentTimezone`] if the two timestamps carry
    /// different offsets.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::DateTime;
    /// use rate_engine::{ingest, PriceResolver, PriceResult, RateStore};
    ///
    /// let doc = r#"{"rates": [
    ///     {"days": "mon,tues,thurs", "times": "0900-2100", "tz": "America/Chicago", "price": 1500}
    /// ]}"#;
    /// let store = RateStore::with_rates(ingest::parse_document(doc).unwrap());
    ///
    /// let start = DateTime::parse_from_rfc3339("2024-02-12T09:05:00-06:00").unwrap();
    /// let end = DateTime::parse_from_rfc3339("2024-02-12T12:00:00-06:00").unwrap();
    /// let result = PriceResolver::new(&store).resolve(start, end).unwrap();
    /// assert_eq!(result, PriceResult::Price(1500));
    /// ```
    pub fn resolve(
        &self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Result<PriceResult> {
        if start >= end {
            return Err(RateError::InvalidRange);
        }
        if start.offset() != end.offset() {
            return Err(RateError::InconsistentTimezone);
        }
        if start.date_naive() != end.date_naive() {
            debug!(%start, %end, "window spans more than one day");
            return Ok(PriceResult::CrossDayRange);
        }

        let day_of_week = start.weekday().num_days_from_monday() as u8;
        let interval = Interval::new(hhmm(&start), hhmm(&end));
        let offset = offset_of(&start);

        let rates = self
            .matcher
            .find(day_of_week, interval, &offset, start.with_timezone(&Utc));

        let result = match rates.as_slice() {
            [] => PriceResult::NoRate,
            [rate] => PriceResult::Price(rate.price()),
            _ => PriceResult::Ambiguous,
        };
        debug!(day_of_week, %interval, %offset, matches = rates.len(), ?result, "price resolved");
        Ok(result)
    }
}
