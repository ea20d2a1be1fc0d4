//! # rate-engine
//!
//! Recurring, timezone-scoped pricing rules and the engine that resolves a
//! price for a concrete time window.
//!
//! A rate covers a set of weekdays, an hour-of-day period and an IANA
//! timezone. A query window is priced when exactly one rate applies to it;
//! otherwise the outcome says why not (no rate, several rates, or a window
//! spanning two dates).
//!
//! ## Modules
//!
//! - [`interval`] — `HHMM` clock ranges
//! - [`rate`] — Raw rate records and their validation into [`Rate`]
//! - [`store`] — The current rate set, replaced as a whole
//! - [`matcher`] — Selecting the rates that apply to a weekday, interval and offset
//! - [`offset`] — `±HHMM` UTC offset rendering
//! - [`price`] — Resolving a window to a [`PriceResult`]
//! - [`query`] — Parsing query timestamps
//! - [`output`] — Rendered listing and price shapes
//! - [`ingest`] — Loading rate sets from JSON documents
//! - [`error`] — Error types

pub mod error;
pub mod ingest;
pub mod interval;
pub mod matcher;
pub mod offset;
pub mod output;
pub mod price;
pub mod query;
pub mod rate;
pub mod store;

pub use error::{RateError, Result};
pub use ingest::{ingest_file, parse_document, Ingestion};
pub use interval::Interval;
pub use matcher::RateMatcher;
pub use output::{PriceOutput, RateOutput, RatesOutput};
pub use price::{PriceResolver, PriceResult};
pub use query::{parse_timestamp, PriceQuery};
pub use rate::{RawRate, Rate, DAY_NAMES};
pub use store::RateStore;
