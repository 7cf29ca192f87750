//! Tests for reference zone resolution and conversion.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use coverage_engine::zone::{parse_zone, resolve_zone_from, ALIAS_ZONE, PRIMARY_ZONE};
use coverage_engine::{resolve_reference_zone, to_iso, to_reference, CoverageError};

#[test]
fn reference_zone_is_warsaw() {
    assert_eq!(resolve_reference_zone(), chrono_tz::Europe::Warsaw);
}

#[test]
fn reference_zone_is_stable_across_calls() {
    let first = resolve_reference_zone();
    let second = resolve_reference_zone();
    assert_eq!(first, second);
}

#[test]
fn reference_zone_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(resolve_reference_zone))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), chrono_tz::Europe::Warsaw);
    }
}

#[test]
fn fallback_skips_unknown_primary() {
    let tz = resolve_zone_from(&["Mars/Olympus_Mons", ALIAS_ZONE]);
    assert_eq!(tz, Tz::Poland);
}

#[test]
fn fallback_ends_at_utc() {
    let tz = resolve_zone_from(&["Mars/Olympus_Mons", "Central European Standard Time"]);
    assert_eq!(tz, Tz::UTC);
}

#[test]
fn empty_candidate_list_is_utc() {
    assert_eq!(resolve_zone_from(&[]), Tz::UTC);
}

#[test]
fn primary_wins_when_available() {
    assert_eq!(
        resolve_zone_from(&[PRIMARY_ZONE, ALIAS_ZONE]),
        chrono_tz::Europe::Warsaw
    );
}

#[test]
fn alias_has_same_offsets_as_primary() {
    let instant = Utc.with_ymd_and_hms(2022, 7, 1, 12, 0, 0).unwrap();
    let primary = to_reference(&instant, resolve_zone_from(&[PRIMARY_ZONE]));
    let alias = to_reference(&instant, resolve_zone_from(&[ALIAS_ZONE]));
    assert_eq!(to_iso(&primary), to_iso(&alias));
}

#[test]
fn parse_zone_is_strict() {
    assert_eq!(parse_zone("Asia/Tokyo").unwrap(), chrono_tz::Asia::Tokyo);
    let err = parse_zone("Not/AZone").unwrap_err();
    assert!(matches!(err, CoverageError::InvalidTimezone(ref name) if name == "Not/AZone"));
}

#[test]
fn conversion_preserves_instant() {
    let source = DateTime::parse_from_rfc3339("2022-06-15T02:00:00Z").unwrap();
    let converted = to_reference(&source, chrono_tz::Europe::Warsaw);

    assert_eq!(converted, source);
    assert_eq!(to_iso(&converted), "2022-06-15T04:00:00+02:00");
}

#[test]
fn conversion_uses_winter_offset() {
    let source = DateTime::parse_from_rfc3339("2022-12-24T18:30:00-05:00").unwrap();
    let converted = to_reference(&source, chrono_tz::Europe::Warsaw);

    assert_eq!(to_iso(&converted), "2022-12-25T00:30:00+01:00");
}
