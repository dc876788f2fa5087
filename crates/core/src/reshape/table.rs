use serde::Serialize;

use crate::document::{Document, FieldValue};

use super::{cell, field_order};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    pub text: String,
    /// Always `"string"`, whatever the values hold.
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ColumnDescriptor {
    fn string(name: &str) -> Self {
        Self {
            text: name.to_string(),
            kind: "string",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableResult {
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<Vec<FieldValue>>,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Build the table shape: one row per document in store order, each row
/// aligned to the column list. No documents yields no columns and no rows.
pub fn build_table(documents: &[Document]) -> TableResult {
    let names = field_order(documents);

    let rows = documents
        .iter()
        .map(|doc| names.iter().map(|name| cell(doc, name)).collect())
        .collect();

    TableResult {
        columns: names.iter().map(|name| ColumnDescriptor::string(name)).collect(),
        rows,
        kind: "table",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn group1_scenario() {
        let docs = vec![
            Document::new().with("colA", "x").with("colB", 1_i64),
            Document::new().with("colA", "y").with("colB", None::<i64>),
        ];
        let table = build_table(&docs);
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            json!({
                "columns": [
                    {"text": "colA", "type": "string"},
                    {"text": "colB", "type": "string"}
                ],
                "rows": [["x", 1], ["y", ""]],
                "type": "table"
            })
        );
    }

    #[test]
    fn empty_dataset_has_no_columns_or_rows() {
        let table = build_table(&[]);
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            json!({"columns": [], "rows": [], "type": "table"})
        );
    }

    #[test]
    fn every_row_matches_column_count() {
        let docs = vec![
            Document::new().with("a", 1_i64),
            Document::new().with("b", "two").with("a", 2_i64),
            Document::new().with("c", true),
        ];
        let table = build_table(&docs);
        let names: Vec<&str> = table.columns.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        for row in &table.rows {
            assert_eq!(row.len(), table.columns.len());
        }
        // Cells follow column order, not each document's own order.
        assert_eq!(
            table.rows[1],
            vec![FieldValue::Integer(2), FieldValue::from("two"), FieldValue::empty()]
        );
        assert_eq!(
            table.rows[2],
            vec![FieldValue::empty(), FieldValue::empty(), FieldValue::Boolean(true)]
        );
    }

    #[test]
    fn mixed_type_columns_keep_their_values() {
        let docs = vec![
            Document::new().with("v", 1_i64),
            Document::new().with("v", "one"),
            Document::new().with("v", 1.5),
        ];
        let table = build_table(&docs);
        assert_eq!(table.columns.len(), 1);
        assert_eq!(table.columns[0].kind, "string");
        assert_eq!(
            serde_json::to_value(&table.rows).unwrap(),
            json!([[1], ["one"], [1.5]])
        );
    }

    #[test]
    fn nan_cells_become_empty_strings() {
        let docs = vec![
            Document::new().with("v", 1.5),
            Document::new().with("v", f64::NAN),
        ];
        let table = build_table(&docs);
        assert_eq!(serde_json::to_value(&table.rows).unwrap(), json!([[1.5], [""]]));
    }

    #[test]
    fn timestamp_cells_render_as_rfc3339_millis() {
        use chrono::{Duration, TimeZone, Utc};

        let when =
            Utc.with_ymd_and_hms(2020, 12, 6, 13, 36, 49).unwrap() + Duration::milliseconds(250);
        let docs = vec![Document::new().with("name", "pump-1").with("seen", when)];
        let table = build_table(&docs);
        assert_eq!(
            serde_json::to_value(&table.rows).unwrap(),
            json!([["pump-1", "2020-12-06T13:36:49.250Z"]])
        );
    }
}
