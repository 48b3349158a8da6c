//! Result and count extraction
//!
//! Extractors turn a decoded response payload into the records of a page or
//! the total record count. They are plain strategy values injected into the
//! pager; closures work too.
//!
//! # Examples
//!
//! ```
//! use pageflow::extract::{CountExtractor, FieldPath, ResultExtractor};
//! use serde_json::json;
//!
//! let payload = json!({"data": {"items": [1, 2]}, "meta": {"total": "42"}});
//! let records = FieldPath::new("data.items").extract_results(payload.clone()).unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(FieldPath::new("$.meta.total").extract_count(&payload).unwrap(), 42);
//! ```

use crate::error::{Error, Result};
use crate::types::{JsonValue, Records};

/// Pulls the page records out of a results payload
pub trait ResultExtractor: Send + Sync {
    /// Extract the records of one page
    fn extract_results(&self, payload: JsonValue) -> Result<Records>;
}

/// Pulls the total record count out of a count payload
pub trait CountExtractor: Send + Sync {
    /// Extract the total number of records
    fn extract_count(&self, payload: &JsonValue) -> Result<u64>;
}

impl<F> ResultExtractor for F
where
    F: Fn(JsonValue) -> Result<Records> + Send + Sync,
{
    fn extract_results(&self, payload: JsonValue) -> Result<Records> {
        self(payload)
    }
}

impl<F> CountExtractor for F
where
    F: Fn(&JsonValue) -> Result<u64> + Send + Sync,
{
    fn extract_count(&self, payload: &JsonValue) -> Result<u64> {
        self(payload)
    }
}

// ============================================================================
// Identity
// ============================================================================

/// The payload itself is the page: it must be a JSON array
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl ResultExtractor for Identity {
    fn extract_results(&self, payload: JsonValue) -> Result<Records> {
        match payload {
            JsonValue::Array(records) => Ok(records),
            other => Err(Error::extraction(
                "$",
                format!("expected an array, got {}", kind(&other)),
            )),
        }
    }
}

// ============================================================================
// Field Path
// ============================================================================

/// Dotted path into nested objects, e.g. `data.items` or `$.meta.total`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    path: String,
}

impl FieldPath {
    /// Create a field path extractor
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The path as configured
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Follow the path through `value`
    pub fn lookup<'a>(&self, value: &'a JsonValue) -> Option<&'a JsonValue> {
        let path = self.path.strip_prefix("$.").unwrap_or(&self.path);
        if path.is_empty() || path == "$" {
            return Some(value);
        }

        let mut current = value;
        for part in path.split('.') {
            match current {
                JsonValue::Object(map) => current = map.get(part)?,
                _ => return None,
            }
        }
        Some(current)
    }

    fn missing(&self) -> Error {
        Error::extraction(&self.path, "field not found")
    }
}

impl Default for FieldPath {
    /// The `count` field, as most collection APIs name it
    fn default() -> Self {
        Self::new("count")
    }
}

impl ResultExtractor for FieldPath {
    fn extract_results(&self, mut payload: JsonValue) -> Result<Records> {
        let path = self.path.strip_prefix("$.").unwrap_or(&self.path);
        let target = if path.is_empty() || path == "$" {
            payload.take()
        } else {
            let pointer = format!("/{}", path.replace('.', "/"));
            payload
                .pointer_mut(&pointer)
                .map(JsonValue::take)
                .ok_or_else(|| self.missing())?
        };

        match target {
            JsonValue::Array(records) => Ok(records),
            other => Err(Error::extraction(
                &self.path,
                format!("expected an array, got {}", kind(&other)),
            )),
        }
    }
}

impl CountExtractor for FieldPath {
    fn extract_count(&self, payload: &JsonValue) -> Result<u64> {
        let value = self.lookup(payload).ok_or_else(|| self.missing())?;
        parse_count(value).ok_or_else(|| {
            Error::extraction(
                &self.path,
                format!("expected a non-negative integer, got {value}"),
            )
        })
    }
}

/// Accept integers, integral floats and numeric strings
fn parse_count(value: &JsonValue) -> Option<u64> {
    match value {
        JsonValue::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
