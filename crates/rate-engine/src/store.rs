//! The current set of rates.
//!
//! The set is only ever replaced as a whole. Readers receive a shared snapshot
//! (`Arc<[Rate]>`) and never see a mix of the old and new sets.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::rate::Rate;

#[derive(Debug, Default)]
pub struct RateStore {
    rates: RwLock<Arc<[Rate]>>,
}

impl RateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store already holding `rates`.
    pub fn with_rates(rates: Vec<Rate>) -> Self {
        Self {
            rates: RwLock::new(rates.into()),
        }
    }

    /// Discard the current set and store `rates`, returning the new snapshot.
    ///
    /// No validation happens here: every [`Rate`] is already well-formed.
    pub fn replace(&self, rates: Vec<Rate>) -> Arc<[Rate]> {
        let snapshot: Arc<[Rate]> = rates.into();
        let mut guard = self.rates.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&snapshot);
        info!(count = snapshot.len(), "rate set replaced");
        snapshot
    }

    /// The current set, in insertion order.
    pub fn all(&self) -> Arc<[Rate]> {
        let guard = self.rates.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }
}
