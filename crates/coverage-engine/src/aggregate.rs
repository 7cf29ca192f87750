//! Hourly usage aggregation.
//!
//! Sums ingredient usage records into one-hour buckets in the reference zone
//! and converts each quantity to its reporting unit. Unlike the interval
//! reconciler, a record with an unreadable timestamp does not fail the batch:
//! it is logged and skipped.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, Timelike};
use chrono_tz::Tz;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::format::to_bucket_label;
use crate::instant::parse_instant;
use crate::zone::to_reference;

/// One raw usage record. Quantities are in their source units and may be
/// written as JSON numbers or numeric strings; missing ones count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Offset-aware timestamp, e.g. `2023-04-13 00:38:00+09:00`.
    #[serde(rename = "TIMESTAMP", default)]
    pub timestamp: String,
    /// Decagrams.
    #[serde(rename = "FLOUR", default)]
    pub flour: Decimal,
    /// Grams.
    #[serde(rename = "GROAT", default)]
    pub groat: Decimal,
    /// Millilitres.
    #[serde(rename = "MILK", default)]
    pub milk: Decimal,
    /// Pieces.
    #[serde(rename = "EGG", default)]
    pub egg: Decimal,
}

/// Totals for one hour bucket, in reporting units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyUsage {
    /// Bucket start, e.g. `2023-04-12 17:00:00 +02:00`.
    #[serde(rename = "TIMESTAMP")]
    pub timestamp: String,
    #[serde(rename = "FLOUR_KG", with = "rust_decimal::serde::float")]
    pub flour_kg: Decimal,
    #[serde(rename = "GROAT_KG", with = "rust_decimal::serde::float")]
    pub groat_kg: Decimal,
    #[serde(rename = "MILK_L", with = "rust_decimal::serde::float")]
    pub milk_l: Decimal,
    #[serde(rename = "EGG_PCS", with = "rust_decimal::serde::float")]
    pub egg_pcs: Decimal,
}

#[derive(Debug, Default)]
struct Totals {
    flour: Decimal,
    groat: Decimal,
    milk: Decimal,
    egg: Decimal,
}

impl Totals {
    fn add(&mut self, record: &UsageRecord) {
        self.flour += record.flour;
        self.groat += record.groat;
        self.milk += record.milk;
        self.egg += record.egg;
    }

    fn into_row(self, bucket: &DateTime<FixedOffset>) -> HourlyUsage {
        HourlyUsage {
            timestamp: to_bucket_label(bucket),
            flour_kg: round2(self.flour / Decimal::ONE_HUNDRED),
            groat_kg: round2(self.groat / Decimal::ONE_THOUSAND),
            milk_l: round2(self.milk / Decimal::ONE_THOUSAND),
            egg_pcs: round2(self.egg),
        }
    }
}

/// Round to two decimals, halves away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Start of the local hour containing `local`, keeping the offset in force at
/// that instant so repeated wall-clock hours stay distinct.
fn floor_to_hour(local: &DateTime<Tz>) -> Option<DateTime<FixedOffset>> {
    local
        .fixed_offset()
        .with_minute(0)?
        .with_second(0)?
        .with_nanosecond(0)
}

/// Aggregate records into hourly buckets in `zone`, sorted by bucket start.
///
/// Empty buckets are not emitted. Records with an unparsable timestamp are
/// skipped with a warning.
pub fn aggregate_hourly(records: &[UsageRecord], zone: Tz) -> Vec<HourlyUsage> {
    let mut buckets: BTreeMap<DateTime<FixedOffset>, Totals> = BTreeMap::new();

    for record in records {
        let instant = match parse_instant(&record.timestamp) {
            Ok(instant) => instant,
            Err(e) => {
                warn!(timestamp = %record.timestamp, error = %e, "skipping record with invalid timestamp");
                continue;
            }
        };
        let Some(bucket) = floor_to_hour(&to_reference(&instant, zone)) else {
            warn!(timestamp = %record.timestamp, "skipping record that cannot be bucketed");
            continue;
        };
        buckets.entry(bucket).or_default().add(record);
    }

    buckets
        .into_iter()
        .map(|(bucket, totals)| totals.into_row(&bucket))
        .collect()
}

/// Parse a JSON array of usage records and aggregate it.
///
/// # Errors
/// Returns `CoverageError::Json` if the document itself is malformed. A
/// literal `null` document aggregates to nothing.
pub fn aggregate_json(json: &str, zone: Tz) -> Result<Vec<HourlyUsage>> {
    let records: Option<Vec<UsageRecord>> = serde_json::from_str(json)?;
    Ok(aggregate_hourly(&records.unwrap_or_default(), zone))
}

/// Pretty-printed JSON array of summary rows.
pub fn usage_to_json(rows: &[HourlyUsage]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}
