//! Pricing rules and their validated construction.
//!
//! A [`Rate`] is only ever produced by [`Rate::create`], which checks a loosely
//! typed [`RawRate`] field by field and fails on the first violation. There is
//! no way to obtain a partially valid `Rate`.
//!
//! # Validation order
//!
//! 1. `days`, `times`, `tz`, `price` are present (in that order)
//! 2. no other keys are present
//! 3. `days` is a comma-separated list of short weekday names
//! 4. `price` is a non-negative integer
//! 5. `times` is `HHMM-HHMM`
//! 6. `tz` is a known IANA timezone

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{RateError, Result};
use crate::interval::{is_clock_time, Interval};
use crate::offset::offset_of;

/// Short weekday names, indexed by day number (Monday = 0).
pub const DAY_NAMES: [&str; 7] = ["mon", "tues", "wed", "thurs", "fri", "sat", "sun"];

const DAYS_MESSAGE: &str =
    "Invalid value for 'days'. Please use the short name of the day. E.g. 'mon,tues'";
const PRICE_TYPE_MESSAGE: &str = "Invalid value for 'price'. Must be an integer";
const PRICE_SIGN_MESSAGE: &str = "Invalid value for 'price'. Must be a positive integer";
const TIMES_MESSAGE: &str = "Invalid value for 'times'. Must be in format 'HHMM-HHMM'";
const TIMES_ORDER_MESSAGE: &str = "Invalid value for 'times'. Start must be before end";
const TZ_MESSAGE: &str = "Invalid value for 'tz'. Must be a string and a valid timezone";

/// Day number (Monday = 0) for a short weekday name.
pub fn day_number(name: &str) -> Option<u8> {
    DAY_NAMES.iter().position(|d| *d == name).map(|i| i as u8)
}

// ── RawRate ─────────────────────────────────────────────────────────────────

/// An unvalidated rate record, as it arrives in an ingestion document or an
/// update request.
///
/// Every field is optional and untyped; a JSON `null` is treated as absent.
/// Keys other than the four known ones are collected in `unknown`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRate {
    #[serde(default)]
    pub days: Option<Value>,
    #[serde(default)]
    pub times: Option<Value>,
    #[serde(default)]
    pub tz: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(flatten)]
    pub unknown: BTreeMap<String, Value>,
}

// ── Rate ────────────────────────────────────────────────────────────────────

/// A priced rule covering a recurring set of weekdays, an hour-of-day period,
/// and a timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rate {
    days_of_week: BTreeSet<u8>,
    period: Interval,
    timezone: Tz,
    price: u64,
}

impl Rate {
    /// Validate `raw` and build a `Rate` from it.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::Validation`] carrying the message for the first
    /// rule that `raw` violates.
    ///
    /// # Examples
    ///
    /// ```
    /// use rate_engine::{RawRate, Rate};
    /// use serde_json::json;
    ///
    /// let raw: RawRate = serde_json::from_value(json!({
    ///     "days": "mon,tues,thurs",
    ///     "times": "0900-2100",
    ///     "tz": "America/Chicago",
    ///     "price": 1500
    /// }))
    /// .unwrap();
    /// let rate = Rate::create(&raw).unwrap();
    /// assert_eq!(rate.price(), 1500);
    /// assert_eq!(rate.period().to_string(), "0900-2100");
    /// ```
    pub fn create(raw: &RawRate) -> Result<Self> {
        let days = required(&raw.days, "Days")?;
        let times = required(&raw.times, "Times")?;
        let tz = required(&raw.tz, "Tz")?;
        let price = required(&raw.price, "Price")?;

        if !raw.unknown.is_empty() {
            let names: Vec<&str> = raw.unknown.keys().map(String::as_str).collect();
            return Err(RateError::validation(format!(
                "Unknown properties: {}",
                names.join(", ")
            )));
        }

        let days_of_week = parse_days(days)?;
        let price = parse_price(price)?;
        let period = parse_times(times)?;
        let timezone = parse_tz(tz)?;

        Ok(Self {
            days_of_week,
            period,
            timezone,
            price,
        })
    }

    /// Day numbers this rate applies to (Monday = 0), ascending.
    pub fn days_of_week(&self) -> &BTreeSet<u8> {
        &self.days_of_week
    }

    pub fn period(&self) -> Interval {
        self.period
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Price in minor currency units.
    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn applies_on(&self, day_of_week: u8) -> bool {
        self.days_of_week.contains(&day_of_week)
    }

    /// The `±HHMM` offset of this rate's timezone at the instant `at`.
    ///
    /// Offsets shift with daylight saving, so this is evaluated per query
    /// rather than once at construction.
    pub fn offset_at(&self, at: DateTime<Utc>) -> String {
        offset_of(&at.with_timezone(&self.timezone))
    }

    /// Comma-joined short day names in canonical weekday order.
    pub fn day_names(&self) -> String {
        self.days_of_week
            .iter()
            .map(|d| DAY_NAMES[*d as usize])
            .collect::<Vec<_>>()
            .join(",")
    }
}

// ── Field parsers ───────────────────────────────────────────────────────────

fn required<'a>(value: &'a Option<Value>, field: &str) -> Result<&'a Value> {
    match value {
        Some(v) if !v.is_null() => Ok(v),
        _ => Err(RateError::validation(format!("{field} is required"))),
    }
}

fn parse_days(value: &Value) -> Result<BTreeSet<u8>> {
    let s = value
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| RateError::validation(DAYS_MESSAGE))?;

    s.split(',')
        .map(|token| {
            day_number(&token.trim().to_lowercase())
                .ok_or_else(|| RateError::validation(DAYS_MESSAGE))
        })
        .collect()
}

fn parse_price(value: &Value) -> Result<u64> {
    let Value::Number(n) = value else {
        return Err(RateError::validation(PRICE_TYPE_MESSAGE));
    };
    if let Some(price) = n.as_u64() {
        return Ok(price);
    }
    if n.is_i64() {
        return Err(RateError::validation(PRICE_SIGN_MESSAGE));
    }
    Err(RateError::validation(PRICE_TYPE_MESSAGE))
}

fn parse_times(value: &Value) -> Result<Interval> {
    let s = value
        .as_str()
        .ok_or_else(|| RateError::validation(TIMES_MESSAGE))?;
    let (start, end) = match (s.len(), s.split_once('-')) {
        (9, Some((start, end))) if start.len() == 4 => (start, end),
        _ => return Err(RateError::validation(TIMES_MESSAGE)),
    };

    let start = parse_clock(start)?;
    let end = parse_clock(end)?;
    if start >= end {
        return Err(RateError::validation(TIMES_ORDER_MESSAGE));
    }
    Ok(Interval::new(start, end))
}

fn parse_clock(s: &str) -> Result<u16> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RateError::validation(TIMES_MESSAGE));
    }
    s.parse::<u16>()
        .ok()
        .filter(|v| is_clock_time(*v))
        .ok_or_else(|| RateError::validation(TIMES_MESSAGE))
}

fn parse_tz(value: &Value) -> Result<Tz> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<Tz>().ok())
        .ok_or_else(|| RateError::validation(TZ_MESSAGE))
}
