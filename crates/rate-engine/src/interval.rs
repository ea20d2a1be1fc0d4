//! Hour-of-day ranges encoded as `HHMM` integers.
//!
//! `1630` means 16:30. Integer comparison on the encoded value orders clock
//! times correctly, so no parsing is needed when matching.

use std::fmt;

use chrono::Timelike;

/// A clock-time range `start..end`, each side encoded as `HHMM`.
///
/// No ordering between `start` and `end` is enforced here; [`crate::Rate`]
/// rejects inverted periods at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: u16,
    pub end: u16,
}

impl Interval {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:04}", self.start, self.end)
    }
}

/// Encode the wall-clock time of `time` as `HHMM`, dropping seconds.
pub fn hhmm<T: Timelike>(time: &T) -> u16 {
    // hour() < 24 and minute() < 60, so the result fits in u16.
    (time.hour() * 100 + time.minute()) as u16
}

/// Whether `hhmm` is a valid clock time (`HH` ≤ 23, `MM` ≤ 59).
pub fn is_clock_time(hhmm: u16) -> bool {
    hhmm / 100 < 24 && hhmm % 100 < 60
}
