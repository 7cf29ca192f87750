//! Reference timezone resolution and conversion.
//!
//! Every instant is compared on the time axis of a single civil zone. The zone
//! is looked up once, walking a short fallback chain that ends at UTC, and the
//! resulting handle is cached for the lifetime of the process.

use std::sync::OnceLock;

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use tracing::debug;

use crate::error::{CoverageError, Result};

/// Preferred reference zone identifier.
pub const PRIMARY_ZONE: &str = "Europe/Warsaw";

/// IANA link naming the same civil zone as [`PRIMARY_ZONE`].
pub const ALIAS_ZONE: &str = "Poland";

static REFERENCE_ZONE: OnceLock<Tz> = OnceLock::new();

/// Resolve the reference zone, falling back from [`PRIMARY_ZONE`] to
/// [`ALIAS_ZONE`] and finally to UTC.
///
/// The lookup happens on first use; later calls return the cached handle.
pub fn resolve_reference_zone() -> Tz {
    *REFERENCE_ZONE.get_or_init(|| resolve_zone_from(&[PRIMARY_ZONE, ALIAS_ZONE]))
}

/// Return the first candidate the timezone database recognizes, or UTC when
/// none of them do. Never fails.
pub fn resolve_zone_from(candidates: &[&str]) -> Tz {
    for name in candidates {
        match name.parse::<Tz>() {
            Ok(tz) => {
                debug!(zone = %tz.name(), "resolved reference zone");
                return tz;
            }
            Err(_) => debug!(zone = %name, "timezone not recognized, trying next candidate"),
        }
    }
    debug!("no candidate zone recognized, falling back to UTC");
    Tz::UTC
}

/// Strict lookup of an IANA zone name, used for explicit overrides.
///
/// # Errors
/// Returns `CoverageError::InvalidTimezone` if the name is not in the database.
pub fn parse_zone(name: &str) -> Result<Tz> {
    name.trim()
        .parse()
        .map_err(|_| CoverageError::InvalidTimezone(name.to_string()))
}

/// Re-express `instant` in `zone`. The absolute point in time is preserved;
/// only the local components and offset change.
pub fn to_reference<Z: TimeZone>(instant: &DateTime<Z>, zone: Tz) -> DateTime<Tz> {
    instant.with_timezone(&zone)
}
