//! Value types shared by the reconciler and its callers.

use chrono::{DateTime, FixedOffset, TimeDelta};
use chrono_tz::Tz;

use crate::error::{CoverageError, Result};
use crate::instant::parse_instant;

/// One contiguous span of active coverage (e.g. a contract).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoveragePeriod {
    pub begin: DateTime<FixedOffset>,
    /// `None` means open-ended: coverage continues past any report horizon.
    pub end: Option<DateTime<FixedOffset>>,
}

impl CoveragePeriod {
    pub fn new(begin: DateTime<FixedOffset>, end: Option<DateTime<FixedOffset>>) -> Self {
        Self { begin, end }
    }

    /// A period whose end is at or before its begin. Such periods are inert.
    pub fn is_degenerate(&self) -> bool {
        self.end.is_some_and(|end| end <= self.begin)
    }
}

/// The reporting window `[begin, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub begin: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl ReportWindow {
    /// Build a window, rejecting `end <= begin`.
    ///
    /// # Errors
    /// Returns `CoverageError::InvalidWindow` when the window is empty or inverted.
    pub fn new(begin: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Result<Self> {
        let window = Self { begin, end };
        window.validate()?;
        Ok(window)
    }

    /// Parse both edges with [`parse_instant`] and validate the result.
    pub fn parse(begin: &str, end: &str) -> Result<Self> {
        Self::new(parse_instant(begin)?, parse_instant(end)?)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.end <= self.begin {
            return Err(CoverageError::InvalidWindow {
                begin: self.begin.to_rfc3339(),
                end: self.end.to_rfc3339(),
            });
        }
        Ok(())
    }
}

/// A half-open output interval `[begin, end)` in the reference zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportInterval {
    pub begin: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl ReportInterval {
    pub fn duration(&self) -> TimeDelta {
        self.end.signed_duration_since(self.begin)
    }

    /// Whether `instant` falls inside `[begin, end)`.
    pub fn contains(&self, instant: &DateTime<Tz>) -> bool {
        self.begin <= *instant && *instant < self.end
    }
}
