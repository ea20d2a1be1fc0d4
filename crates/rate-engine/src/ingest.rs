//! Loading rate sets from `{"rates": [...]}` JSON documents.
//!
//! Every record is validated before anything is stored, so a document with a
//! single bad record leaves the store untouched.

use std::io;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{RateError, Result};
use crate::rate::{RawRate, Rate};
use crate::store::RateStore;

#[derive(Debug, Default, Deserialize)]
struct RatesDocument {
    #[serde(default)]
    rates: Vec<RawRate>,
}

/// What [`ingest_file`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ingestion {
    /// The file was read and this many rates were stored.
    Loaded(usize),
    /// The file does not exist; the store was left as it was.
    Missing,
}

/// Parse and validate a rates document.
///
/// The document may also arrive wrapped in a JSON string
/// (`"{\"rates\": [...]}"`), which is unwrapped first.
///
/// # Errors
///
/// Returns [`RateError::Document`] if the JSON is malformed or not shaped like
/// a rates document, or the [`RateError::Validation`] of the first invalid
/// record.
pub fn parse_document(json: &str) -> Result<Vec<Rate>> {
    let value: Value = serde_json::from_str(json).map_err(|e| RateError::Document(e.to_string()))?;
    let value = match value {
        Value::String(inner) => {
            serde_json::from_str(&inner).map_err(|e| RateError::Document(e.to_string()))?
        }
        other => other,
    };
    let document: RatesDocument =
        serde_json::from_value(value).map_err(|e| RateError::Document(e.to_string()))?;

    document.rates.iter().map(Rate::create).collect()
}

/// Read `path`, validate it, and replace the contents of `store` with it.
///
/// A missing file is not an error: it is logged and reported as
/// [`Ingestion::Missing`].
///
/// # Errors
///
/// Returns [`RateError::Io`] for any read failure other than the file not
/// existing, or any error from [`parse_document`]. On error the store is not
/// modified.
pub fn ingest_file(store: &RateStore, path: &Path) -> Result<Ingestion> {
    info!(path = %path.display(), "ingesting rates");
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "rates file not found, nothing ingested");
            return Ok(Ingestion::Missing);
        }
        Err(e) => return Err(e.into()),
    };
    let rates = parse_document(&contents)?;
    let count = store.replace(rates).len();
    info!(count, "rates ingested");
    Ok(Ingestion::Loaded(count))
}
