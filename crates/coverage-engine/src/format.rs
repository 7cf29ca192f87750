//! Text rendering of instants and intervals.

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::error::Result;
use crate::period::ReportInterval;

/// ISO 8601 layout with a numeric, sign-prefixed offset, e.g.
/// `2022-06-15T00:00:00+02:00`. UTC renders as `+00:00`, never `Z`.
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Layout of hourly bucket labels, e.g. `2023-04-13 00:00:00 +02:00`.
pub const BUCKET_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";

pub fn to_iso<Z: TimeZone>(dt: &DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    dt.format(ISO_FORMAT).to_string()
}

pub fn to_bucket_label(dt: &DateTime<FixedOffset>) -> String {
    dt.format(BUCKET_FORMAT).to_string()
}

/// Render intervals as a pretty-printed JSON array of `[begin, end]` pairs.
pub fn intervals_to_json(intervals: &[ReportInterval]) -> Result<String> {
    let pairs: Vec<[String; 2]> = intervals
        .iter()
        .map(|iv| [to_iso(&iv.begin), to_iso(&iv.end)])
        .collect();
    Ok(serde_json::to_string_pretty(&pairs)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use chrono_tz::Europe::Warsaw;

    #[test]
    fn iso_uses_numeric_offset_for_utc() {
        let dt = Utc.with_ymd_and_hms(2022, 6, 14, 22, 0, 0).unwrap();
        assert_eq!(to_iso(&dt), "2022-06-14T22:00:00+00:00");
    }

    #[test]
    fn iso_in_summer_and_winter() {
        let summer = Warsaw.with_ymd_and_hms(2022, 6, 15, 0, 0, 0).unwrap();
        let winter = Warsaw.with_ymd_and_hms(2022, 1, 10, 0, 0, 0).unwrap();
        assert_eq!(to_iso(&summer), "2022-06-15T00:00:00+02:00");
        assert_eq!(to_iso(&winter), "2022-01-10T00:00:00+01:00");
    }

    #[test]
    fn intervals_serialize_as_string_pairs() {
        let iv = ReportInterval {
            begin: Warsaw.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap(),
            end: Warsaw.with_ymd_and_hms(2022, 2, 1, 0, 0, 0).unwrap(),
        };
        let json = intervals_to_json(&[iv]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([["2022-01-01T00:00:00+01:00", "2022-02-01T00:00:00+01:00"]])
        );
    }

    #[test]
    fn bucket_label_has_space_before_offset() {
        let dt = DateTime::parse_from_rfc3339("2023-04-13T00:00:00+02:00").unwrap();
        assert_eq!(to_bucket_label(&dt), "2023-04-13 00:00:00 +02:00");
    }
}
