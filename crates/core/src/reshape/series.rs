use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::document::{Document, FieldValue};
use crate::error::QueryError;

use super::{cell, field_order};

/// Timestamp field of every time-indexed document.
pub const DATE_FIELD: &str = "Date";

/// Value column of the placeholder shape used when a range matches nothing.
pub const PLACEHOLDER_FIELD: &str = "Datapoint";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesResult {
    /// `[value..., epoch_ms]` per document.
    pub datapoints: Vec<Vec<FieldValue>>,
    pub target: String,
}

/// Whole seconds since the epoch times 1000; the sub-second part is
/// truncated, not rounded.
pub fn epoch_millis(ts: DateTime<Utc>) -> i64 {
    ts.timestamp() * 1000
}

/// Build the series shape for `target`.
///
/// Each datapoint lists every non-`Date` field in first-appearance order,
/// followed by the `Date` value as epoch milliseconds. A dataset with more
/// than one value field therefore yields wider datapoints than the nominal
/// `[value, epoch_ms]` pair.
pub fn build_series(target: &str, documents: &[Document]) -> Result<SeriesResult, QueryError> {
    let mut names: Vec<&str> = if documents.is_empty() {
        vec![DATE_FIELD, PLACEHOLDER_FIELD]
    } else {
        field_order(documents).into_iter().collect()
    };
    names.retain(|name| *name != DATE_FIELD);

    let datapoints = documents
        .iter()
        .map(|doc| -> Result<Vec<FieldValue>, QueryError> {
            let mut point: Vec<FieldValue> = names.iter().map(|name| cell(doc, name)).collect();
            point.push(timestamp_cell(target, doc)?);
            Ok(point)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SeriesResult {
        datapoints,
        target: target.to_string(),
    })
}

fn timestamp_cell(target: &str, doc: &Document) -> Result<FieldValue, QueryError> {
    doc.get(DATE_FIELD)
        .and_then(FieldValue::as_timestamp)
        .map(|ts| FieldValue::Integer(epoch_millis(ts)))
        .ok_or_else(|| QueryError::MalformedDocument {
            dataset: target.to_string(),
            field: DATE_FIELD.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 12, 6, h, m, s).unwrap()
    }

    #[test]
    fn group2_scenario() {
        let docs = vec![Document::new().with(DATE_FIELD, at(13, 36, 49)).with("value", 2.5)];
        let series = build_series("group2", &docs).unwrap();
        assert_eq!(
            serde_json::to_value(&series).unwrap(),
            json!({"datapoints": [[2.5, 1_607_261_809_000_i64]], "target": "group2"})
        );
    }

    #[test]
    fn date_moves_last_whatever_its_position() {
        let docs = vec![Document::new()
            .with("a", 1_i64)
            .with(DATE_FIELD, at(0, 0, 1))
            .with("b", "two")];
        let series = build_series("s", &docs).unwrap();
        assert_eq!(
            series.datapoints,
            vec![vec![
                FieldValue::Integer(1),
                FieldValue::from("two"),
                FieldValue::Integer(at(0, 0, 1).timestamp_millis()),
            ]]
        );
    }

    #[test]
    fn sub_second_part_is_truncated() {
        let ts = at(13, 36, 49) + Duration::milliseconds(999);
        assert_eq!(epoch_millis(ts), 1_607_261_809_000);

        let before_epoch = Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 59).unwrap()
            + Duration::milliseconds(500);
        assert_eq!(epoch_millis(before_epoch), -1000);
    }

    #[test]
    fn empty_range_yields_no_datapoints() {
        let series = build_series("quiet", &[]).unwrap();
        assert_eq!(
            serde_json::to_value(&series).unwrap(),
            json!({"datapoints": [], "target": "quiet"})
        );
    }

    #[test]
    fn null_values_become_empty_strings() {
        let docs = vec![
            Document::new().with(DATE_FIELD, at(1, 0, 0)).with("v", None::<f64>),
            Document::new().with(DATE_FIELD, at(2, 0, 0)),
        ];
        let series = build_series("s", &docs).unwrap();
        assert_eq!(
            serde_json::to_value(&series.datapoints).unwrap(),
            json!([["", 1_607_216_400_000_i64], ["", 1_607_220_000_000_i64]])
        );
    }

    #[test]
    fn nan_values_become_empty_strings() {
        let docs = vec![Document::new().with(DATE_FIELD, at(1, 0, 0)).with("v", f64::NAN)];
        let series = build_series("s", &docs).unwrap();
        assert_eq!(
            serde_json::to_value(&series.datapoints).unwrap(),
            json!([["", 1_607_216_400_000_i64]])
        );
    }

    #[test]
    fn non_timestamp_date_is_rejected() {
        let docs = vec![Document::new().with(DATE_FIELD, "2020-12-06").with("v", 1_i64)];
        let err = build_series("bad", &docs).unwrap_err();
        assert!(matches!(err, QueryError::MalformedDocument { ref dataset, .. } if dataset == "bad"));
        assert!(!err.is_client_error());
    }
}
