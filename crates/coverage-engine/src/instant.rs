//! Parsing of offset-aware instants from text.

use chrono::{DateTime, FixedOffset};

use crate::error::{CoverageError, Result};

/// Layouts tried after RFC 3339, for sources that separate date and time (or
/// time and offset) with a space.
const FALLBACK_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %:z",
    "%Y-%m-%dT%H:%M:%S%.f %:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

/// Parse an instant carrying an explicit UTC offset.
///
/// Accepts RFC 3339 (`2022-06-15T00:00:00+02:00`, `...Z`, fractional seconds)
/// and the space-separated layouts in [`FALLBACK_FORMATS`]. Surrounding
/// whitespace is ignored.
///
/// # Errors
/// Returns `CoverageError::UnparsableInstant` for empty input, text without an
/// offset, or anything else chrono cannot read. A missing offset is never
/// filled in from the host.
pub fn parse_instant(text: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoverageError::UnparsableInstant {
            input: text.to_string(),
            reason: "empty input".to_string(),
        });
    }

    let rfc3339_err = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => return Ok(dt),
        Err(e) => e,
    };

    FALLBACK_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| CoverageError::UnparsableInstant {
            input: text.to_string(),
            reason: rfc3339_err.to_string(),
        })
}
