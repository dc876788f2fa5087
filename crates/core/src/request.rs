//! SimpleJson `/query` request model and range timestamp parsing.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use serde::Deserialize;

use crate::error::QueryError;

/// Body of a `/query` call. Grafana sends more fields than these
/// (`interval`, `maxDataPoints`, ...); they are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub targets: Vec<Target>,
    #[serde(default)]
    pub range: Option<TimeRange>,
}

impl QueryRequest {
    pub fn from_json(body: &[u8]) -> Result<Self, QueryError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// The only target served; additional targets are ignored.
    pub fn primary_target(&self) -> Result<&Target, QueryError> {
        self.targets.first().ok_or(QueryError::MissingTarget)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Target {
    /// Dataset name.
    pub target: String,
    #[serde(rename = "type", default)]
    pub kind: TargetKind,
}

/// Output-type hint. Only the literal `table` selects the table shape;
/// every other value, including a missing or null hint, is a series request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum TargetKind {
    Table,
    #[default]
    Timeseries,
}

impl From<Option<String>> for TargetKind {
    fn from(hint: Option<String>) -> Self {
        match hint.as_deref() {
            Some("table") => TargetKind::Table,
            _ => TargetKind::Timeseries,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

impl TimeRange {
    /// Parse both boundaries; either one failing rejects the request.
    pub fn bounds(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), QueryError> {
        Ok((parse_range_timestamp(&self.from)?, parse_range_timestamp(&self.to)?))
    }
}

const MAX_FRACTION_DIGITS: usize = 6;

/// Parse `YYYY-MM-DDTHH:MM:SS.ffffffZ`. The fraction carries 1 to 6 digits
/// (Grafana sends milliseconds); there is no fallback format.
pub fn parse_range_timestamp(raw: &str) -> Result<DateTime<Utc>, QueryError> {
    let invalid = || QueryError::InvalidTimestamp(raw.to_string());

    let body = raw.strip_suffix('Z').ok_or_else(invalid)?;
    let (whole, fraction) = body.split_once('.').ok_or_else(invalid)?;

    let year_digits = whole.split('-').next().unwrap_or_default();
    if year_digits.len() != 4 || !year_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if fraction.is_empty()
        || fraction.len() > MAX_FRACTION_DIGITS
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let naive = NaiveDateTime::parse_from_str(whole, "%Y-%m-%dT%H:%M:%S").map_err(|_| invalid())?;
    let micros: u32 = format!("{fraction:0<width$}", width = MAX_FRACTION_DIGITS)
        .parse()
        .map_err(|_| invalid())?;
    let naive = naive.with_nanosecond(micros * 1_000).ok_or_else(invalid)?;

    Ok(naive.and_utc())
}
