//! Parsing of the `/api/cubes` payload.
//!
//! The payload is `{ "measures": { <key>: <measure>, ... } }`. Each measure
//! is validated on its own: a malformed measure is skipped with a warning
//! instead of failing the whole catalog.

use super::error::CatalogError;
use super::types::{Annotations, Record};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw measure as sent by the API. Only the fields we read are declared.
#[derive(Deserialize)]
struct RawMeasure {
    name: Option<String>,
    #[serde(default)]
    cubes: Vec<RawCube>,
}

#[derive(Deserialize)]
struct RawCube {
    annotations: Option<Map<String, Value>>,
}

/// Outcome of validating a single measure.
#[derive(Debug, PartialEq)]
pub enum ParsedMeasure {
    Valid(Record),
    Malformed { key: String, reason: String },
}

/// Records recovered from a payload.
#[derive(Debug, Default)]
pub struct ParsedCatalog {
    /// Valid records, in payload order.
    pub records: Vec<Record>,
    /// Number of measures skipped as malformed.
    pub skipped: usize,
}

/// Validates one measure. Display fields come from `cubes[0]` only.
pub fn parse_measure(key: &str, value: &Value) -> ParsedMeasure {
    let malformed = |reason: String| ParsedMeasure::Malformed {
        key: key.to_string(),
        reason,
    };

    let raw = match RawMeasure::deserialize(value) {
        Ok(raw) => raw,
        Err(e) => return malformed(e.to_string()),
    };

    let name = match raw.name {
        Some(name) if !name.is_empty() => name,
        _ => return malformed("missing name".to_string()),
    };

    let Some(first_cube) = raw.cubes.into_iter().next() else {
        return malformed("no cubes".to_string());
    };

    let annotations = first_cube
        .annotations
        .as_ref()
        .map(Annotations::from_json)
        .unwrap_or_default();

    ParsedMeasure::Valid(Record::new(key, name, annotations))
}

/// Parses a full response body into records.
///
/// Fails only when the body is not JSON or has no `measures` object. An
/// empty `measures` object yields an empty catalog.
pub fn parse_catalog(body: &str) -> Result<ParsedCatalog, CatalogError> {
    let payload: Value = serde_json::from_str(body)?;
    let measures = payload
        .get("measures")
        .and_then(Value::as_object)
        .ok_or(CatalogError::MissingMeasures)?;

    let mut catalog = ParsedCatalog::default();
    for (key, value) in measures {
        match parse_measure(key, value) {
            ParsedMeasure::Valid(record) => catalog.records.push(record),
            ParsedMeasure::Malformed { key, reason } => {
                log::warn!("Skipping malformed measure {}: {}", key, reason);
                catalog.skipped += 1;
            }
        }
    }

    Ok(catalog)
}
