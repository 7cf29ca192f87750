//! Reconcile coverage periods against a report window.
//!
//! Collects every instant at which coverage could change inside the window
//! (the window edges plus the clipped edges of each overlapping period), sorts
//! and deduplicates them, and turns adjacent pairs into half-open intervals.
//! Gaps with no coverage at all come out as intervals like any other.

use chrono::DateTime;
use chrono_tz::Tz;
use tracing::debug;

use crate::error::Result;
use crate::period::{CoveragePeriod, ReportInterval, ReportWindow};
use crate::zone::{resolve_reference_zone, to_reference};

/// Build the canonical interval partition of `window` in the reference zone
/// returned by [`resolve_reference_zone`].
///
/// See [`build_intervals_in`] for the full contract.
pub fn build_intervals(
    window: &ReportWindow,
    periods: &[CoveragePeriod],
) -> Result<Vec<ReportInterval>> {
    build_intervals_in(window, periods, resolve_reference_zone())
}

/// Build the canonical interval partition of `window`, expressing every
/// boundary in `zone`.
///
/// The result is sorted, contiguous (`out[i].end == out[i + 1].begin`), and its
/// union is exactly `[window.begin, window.end)`. Input order does not matter.
///
/// - Open-ended periods are clipped at the window end.
/// - Periods entirely outside the window contribute nothing.
/// - Degenerate periods (`end <= begin`) contribute nothing.
///
/// # Errors
/// Returns `CoverageError::InvalidWindow` if `window.end <= window.begin`. No
/// partial output is produced.
pub fn build_intervals_in(
    window: &ReportWindow,
    periods: &[CoveragePeriod],
    zone: Tz,
) -> Result<Vec<ReportInterval>> {
    window.validate()?;

    let report_begin = to_reference(&window.begin, zone);
    let report_end = to_reference(&window.end, zone);

    let mut boundaries = collect_boundaries(report_begin, report_end, periods, zone);
    boundaries.sort_unstable();
    boundaries.dedup();

    let intervals: Vec<ReportInterval> = boundaries
        .windows(2)
        .filter(|pair| pair[1] > pair[0])
        .map(|pair| ReportInterval {
            begin: pair[0],
            end: pair[1],
        })
        .collect();

    debug!(
        periods = periods.len(),
        boundaries = boundaries.len(),
        intervals = intervals.len(),
        "built report intervals"
    );

    Ok(intervals)
}

/// Window edges plus the clipped edges of every period that overlaps the
/// window. Unsorted, may contain duplicates.
fn collect_boundaries(
    report_begin: DateTime<Tz>,
    report_end: DateTime<Tz>,
    periods: &[CoveragePeriod],
    zone: Tz,
) -> Vec<DateTime<Tz>> {
    let mut boundaries = Vec::with_capacity(2 + periods.len() * 2);
    boundaries.push(report_begin);
    boundaries.push(report_end);

    for period in periods {
        if period.is_degenerate() {
            continue;
        }

        let begin = to_reference(&period.begin, zone);
        // Open-ended coverage stops at the report horizon.
        let end = period
            .end
            .as_ref()
            .map_or(report_end, |end| to_reference(end, zone));

        if end <= report_begin || begin >= report_end {
            continue;
        }

        boundaries.push(begin.max(report_begin));
        boundaries.push(end.min(report_end));
    }

    boundaries
}
