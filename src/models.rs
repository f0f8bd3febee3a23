//! Data models for monarch reign statistics.
//!
//! This module contains the raw dataset record, the rule for deriving a
//! reign duration from its textual year range, and the result structures
//! handed from aggregation to presentation.

use crate::error::StatError;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// A raw monarch record as it appears in the source dataset.
///
/// The dataset uses short JSON keys (`nm`, `hse`, `yrs`); keys not listed
/// here (the dataset also carries a `cty` country field) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monarch {
    /// Full name of the monarch.
    #[serde(rename = "nm")]
    pub name: String,
    /// Ruling house or dynasty.
    #[serde(rename = "hse")]
    pub house: String,
    /// Reign range, e.g. `"1066-1087"`, `"1952-"` or `"1066"`.
    #[serde(rename = "yrs")]
    pub years: String,
}

/// Number of years spanned by a textual reign range.
///
/// The range splits on `-` into one or two segments:
/// - a single segment is a reign of less than one recorded year → 0;
/// - `"start-"` is an open reign, measured against `reference_year`;
/// - `"start-end"` is a closed reign → `end - start`, with no clamping
///   (malformed data can legally yield a negative span).
///
/// Only the open-reign branch depends on `reference_year`; callers pass the
/// current UTC year for live data or a pinned year for reproducible runs.
pub fn reign_duration(years: &str, reference_year: i32) -> Result<i32, StatError> {
    let segments: Vec<&str> = years.split('-').collect();

    match segments.as_slice() {
        // The single-segment branch never parses its content.
        [_] => Ok(0),
        [start, ""] => Ok(reference_year - parse_year(years, start)?),
        [start, end] => Ok(parse_year(years, end)? - parse_year(years, start)?),
        _ => Err(StatError::MalformedReign {
            years: years.to_string(),
        }),
    }
}

/// Parse one segment of a reign range as an integer year.
///
/// Surrounding whitespace is tolerated, as in the source dataset's
/// original consumers.
fn parse_year(years: &str, segment: &str) -> Result<i32, StatError> {
    segment.trim().parse().map_err(|_| StatError::YearParse {
        years: years.to_string(),
        value: segment.to_string(),
    })
}

/// The current UTC calendar year.
pub fn current_utc_year() -> i32 {
    Utc::now().year()
}

/// A monarch record with its reign duration resolved.
///
/// The duration is computed once at construction against a fixed reference
/// year; records are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReignRecord {
    /// Full name of the monarch.
    pub name: String,
    /// Ruling house or dynasty, used as a grouping key.
    pub house: String,
    /// Reign duration in years.
    pub duration: i32,
}

impl ReignRecord {
    /// Resolve a raw record's duration against `reference_year`.
    pub fn resolve(monarch: &Monarch, reference_year: i32) -> Result<Self, StatError> {
        Ok(Self {
            name: monarch.name.clone(),
            house: monarch.house.clone(),
            duration: reign_duration(&monarch.years, reference_year)?,
        })
    }

    /// First whitespace-delimited token of the monarch's name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

/// Resolve every raw record, failing on the first malformed reign range.
///
/// A single parse failure aborts the whole pass; there are no partial
/// results and no skipping of malformed records.
pub fn resolve_all(
    monarchs: &[Monarch],
    reference_year: i32,
) -> Result<Vec<ReignRecord>, StatError> {
    monarchs
        .iter()
        .map(|m| ReignRecord::resolve(m, reference_year))
        .collect()
}

/// The monarch with the longest single reign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongestReign {
    /// Full name of the monarch.
    pub name: String,
    /// Reign duration in years.
    pub years: i32,
}

/// A house together with the summed duration of its members' reigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HouseTotal {
    /// House or dynasty name.
    pub house: String,
    /// Summed reign duration in years.
    pub years: i32,
}

/// Summary statistics computed from one pass over the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReignStats {
    /// Total number of records in the dataset.
    pub total_monarchs: usize,
    /// Monarch with the longest single reign.
    pub longest_reign: LongestReign,
    /// House with the greatest cumulative reign duration.
    pub longest_house: HouseTotal,
    /// Most frequently occurring first name.
    pub most_common_first_name: String,
}

/// Metadata about a statistics run.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Where the dataset came from (URL or local path).
    pub dataset_source: String,
    /// Date and time the statistics were computed.
    pub generated_at: DateTime<Utc>,
    /// Year used to close open-ended reigns.
    pub reference_year: i32,
    /// Wall-clock duration of the run in seconds.
    pub duration_seconds: f64,
}

/// The complete statistics report.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// Metadata about the run.
    pub metadata: ReportMetadata,
    /// The headline statistics.
    pub stats: ReignStats,
    /// Cumulative reign duration per house, in first-appearance order.
    pub house_totals: Vec<HouseTotal>,
    /// First-name occurrence counts, in first-appearance order.
    pub first_name_counts: Vec<(String, usize)>,
}
