//! Loading coverage periods from contract JSON.
//!
//! The input is an array of objects with textual `BEGIN` and optional `END`
//! instants:
//!
//! ```json
//! [
//!   { "BEGIN": "2022-01-10T00:00:00+01:00", "END": "2022-01-20T00:00:00+01:00" },
//!   { "BEGIN": "2022-03-01T00:00:00+01:00", "END": null }
//! ]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{CoverageError, Result};
use crate::instant::parse_instant;
use crate::period::CoveragePeriod;

/// Raw contract record as it appears in the input file.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractRecord {
    #[serde(rename = "BEGIN", alias = "begin", alias = "Begin")]
    pub begin: String,
    #[serde(rename = "END", alias = "end", alias = "End", default)]
    pub end: Option<String>,
}

impl ContractRecord {
    /// Parse both instants. A missing, null, or blank `END` is open-ended.
    pub fn to_period(&self, index: usize) -> Result<CoveragePeriod> {
        let begin = parse_instant(&self.begin).map_err(|e| invalid(index, "BEGIN", e))?;
        let end = match self.end.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(parse_instant(text).map_err(|e| invalid(index, "END", e))?),
        };
        Ok(CoveragePeriod::new(begin, end))
    }
}

fn invalid(index: usize, field: &'static str, source: CoverageError) -> CoverageError {
    CoverageError::InvalidContract {
        index,
        field,
        reason: source.to_string(),
    }
}

/// Parse a JSON array of contract records into coverage periods. A literal
/// `null` document yields no periods.
///
/// # Errors
/// Returns `CoverageError::Json` for malformed JSON and
/// `CoverageError::InvalidContract` for the first record whose instants cannot
/// be parsed. Nothing is returned for the other records in that case.
pub fn load_periods(json: &str) -> Result<Vec<CoveragePeriod>> {
    let records: Option<Vec<ContractRecord>> = serde_json::from_str(json)?;
    records
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, record)| record.to_period(index))
        .collect()
}

/// Read `path` and hand its contents to [`load_periods`].
pub fn load_periods_from_file(path: impl AsRef<Path>) -> Result<Vec<CoveragePeriod>> {
    let json = std::fs::read_to_string(path)?;
    load_periods(&json)
}
