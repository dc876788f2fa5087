//! Reshaping fetched documents into the two SimpleJson result schemas.
//!
//! Both shapes are built generically over [`Document`] field maps: column
//! order is the order in which field names first appear across the fetched
//! documents, and absent, null or NaN values become `""` before they reach a cell.

mod series;
mod table;

pub use series::{build_series, epoch_millis, SeriesResult, DATE_FIELD, PLACEHOLDER_FIELD};
pub use table::{build_table, ColumnDescriptor, TableResult};

use indexmap::IndexSet;
use serde::Serialize;

use crate::document::{Document, FieldValue};

/// One element of a `/query` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryResult {
    Table(TableResult),
    Series(SeriesResult),
}

/// The wire response: always a one-element list.
pub type QueryResponse = Vec<QueryResult>;

/// Field names in order of first appearance across `documents`.
fn field_order(documents: &[Document]) -> IndexSet<&str> {
    documents.iter().flat_map(Document::field_names).collect()
}

/// The cell for `name` in `document`, with absent, null and NaN normalized to `""`.
fn cell(document: &Document, name: &str) -> FieldValue {
    match document.get(name) {
        None | Some(FieldValue::Null) => FieldValue::empty(),
        Some(FieldValue::Float(f)) if f.is_nan() => FieldValue::empty(),
        Some(value) => value.clone(),
    }
}
