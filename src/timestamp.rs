//! Canonical form for metadata-update timestamps.
//!
//! The contract leaves the timestamp format to the implementer. This helper
//! exists for implementations that want a uniform stamp: it accepts RFC 3339
//! input and re-renders it in UTC.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Error returned when a timestamp cannot be read as RFC 3339.
#[derive(Debug, Error)]
#[error("invalid metadata timestamp {value:?}: {source}")]
pub struct TimestampError {
    value: String,
    source: chrono::ParseError,
}

/// Re-render an RFC 3339 timestamp in UTC.
///
/// Accepts input with or without a trailing `Z` (a bare
/// `2026-01-02T03:04:05` is treated as UTC).
///
/// # Errors
/// Returns [`TimestampError`] if `value` is not RFC 3339.
pub fn normalize_timestamp(value: &str) -> Result<String, TimestampError> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc3339(&format!("{value}Z")))
        .map(|dt| dt.with_timezone(&Utc).to_rfc3339())
        .map_err(|source| TimestampError {
            value: value.to_string(),
            source,
        })
}
