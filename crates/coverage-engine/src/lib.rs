//! # coverage-engine
//!
//! Reconciles contract coverage periods against a report window.
//!
//! Given a window and a set of periods (each possibly open-ended), the engine
//! returns the minimal, sorted list of half-open intervals marking every point
//! where coverage could change, including stretches with no coverage at all.
//! All instants are compared in a single reference zone (`Europe/Warsaw`, with
//! fallbacks) regardless of the offsets they were written with.
//!
//! ```rust
//! use coverage_engine::{build_intervals, load_periods, to_iso, ReportWindow};
//!
//! let window = ReportWindow::parse("2022-01-01T00:00:00+01:00", "2022-02-01T00:00:00+01:00").unwrap();
//! let periods = load_periods(r#"[{"BEGIN":"2022-01-15T00:00:00+01:00","END":null}]"#).unwrap();
//!
//! let intervals = build_intervals(&window, &periods).unwrap();
//! assert_eq!(intervals.len(), 2);
//! assert_eq!(to_iso(&intervals[1].end), "2022-02-01T00:00:00+01:00");
//! ```
//!
//! ## Modules
//!
//! - [`reconcile`] — window + periods → canonical interval partition
//! - [`zone`] — reference zone resolution and conversion
//! - [`period`] — `CoveragePeriod`, `ReportWindow`, `ReportInterval`
//! - [`instant`] — parsing offset-aware instants from text
//! - [`contracts`] — contract JSON → coverage periods
//! - [`format`] — ISO rendering of instants and intervals
//! - [`aggregate`] — hourly usage summaries
//! - [`error`] — Error types

pub mod aggregate;
pub mod contracts;
pub mod error;
pub mod format;
pub mod instant;
pub mod period;
pub mod reconcile;
pub mod zone;

pub use aggregate::{aggregate_hourly, aggregate_json, HourlyUsage, UsageRecord};
pub use contracts::{load_periods, load_periods_from_file};
pub use error::CoverageError;
pub use format::{intervals_to_json, to_iso};
pub use instant::parse_instant;
pub use period::{CoveragePeriod, ReportInterval, ReportWindow};
pub use reconcile::{build_intervals, build_intervals_in};
pub use zone::{resolve_reference_zone, to_reference};
