//! Parsing the raw `start`/`end` values of a price query.

use chrono::{DateTime, FixedOffset};

use crate::error::{RateError, Result};

/// A price query window whose timestamps have been parsed, but not yet checked
/// against each other. Range checks belong to [`crate::PriceResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuery {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl PriceQuery {
    /// Parse both ends of a query window.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::MissingTimestamp`] if either value is empty, or
    /// [`RateError::InvalidTimestamp`] if either cannot be parsed.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        if start.trim().is_empty() || end.trim().is_empty() {
            return Err(RateError::MissingTimestamp);
        }
        Ok(Self {
            start: parse_timestamp(start)?,
            end: parse_timestamp(end)?,
        })
    }
}

/// Parse an ISO-8601 timestamp that carries a UTC offset.
///
/// Accepts RFC 3339 (`2024-02-12T09:05:00-06:00`, `...Z`) as well as the
/// compact offset form (`2024-02-12T09:05:00-0600`).
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>> {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z"))
        .map_err(|e| RateError::InvalidTimestamp(format!("'{}': {}", s, e)))
}
