//! The rendered shapes handed to external callers.

use serde::{Deserialize, Serialize};

use crate::price::PriceResult;
use crate::rate::Rate;

/// A stored rate as shown in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateOutput {
    pub days: String,
    pub times: String,
    pub tz: String,
    pub price: u64,
}

impl From<&Rate> for RateOutput {
    fn from(rate: &Rate) -> Self {
        Self {
            days: rate.day_names(),
            times: rate.period().to_string(),
            tz: rate.timezone().name().to_string(),
            price: rate.price(),
        }
    }
}

/// The `{"rates": [...]}` listing document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatesOutput {
    pub rates: Vec<RateOutput>,
}

impl RatesOutput {
    pub fn from_rates(rates: &[Rate]) -> Self {
        Self {
            rates: rates.iter().map(RateOutput::from).collect(),
        }
    }
}

/// The `{"price": n}` answer to a price query.
///
/// Every unpriceable outcome collapses to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceOutput {
    pub price: u64,
}

impl From<PriceResult> for PriceOutput {
    fn from(result: PriceResult) -> Self {
        Self {
            price: result.amount(),
        }
    }
}
