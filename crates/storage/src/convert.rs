//! BSON to [`Document`] conversion.
//!
//! Type mapping:
//! - `string` → `Text`
//! - `int32`, `int64` → `Integer`
//! - `double`, `decimal128` → `Float` (decimals that do not fit fall back to `Text`)
//! - `bool` → `Boolean`
//! - `date` → `Timestamp`
//! - `null`, `undefined`, NaN → `Null`
//! - `objectId` → `Text` (hex)
//! - anything else → `Text` holding its relaxed extended JSON

use chrono::{DateTime, Utc};
use mongodb::bson::{Bson, Document as BsonDocument};

use docdash_core::{Document, FieldValue};

/// Storage identifier field, never surfaced.
pub const ID_FIELD: &str = "_id";

pub fn document_from_bson(doc: BsonDocument) -> Document {
    doc.into_iter()
        .filter(|(name, _)| name != ID_FIELD)
        .map(|(name, value)| (name, field_from_bson(value)))
        .collect()
}

pub fn field_from_bson(value: Bson) -> FieldValue {
    match value {
        Bson::String(s) => FieldValue::Text(s),
        Bson::Int32(i) => FieldValue::Integer(i64::from(i)),
        Bson::Int64(i) => FieldValue::Integer(i),
        Bson::Double(f) if f.is_nan() => FieldValue::Null,
        Bson::Double(f) => FieldValue::Float(f),
        Bson::Boolean(b) => FieldValue::Boolean(b),
        Bson::DateTime(dt) => match DateTime::<Utc>::from_timestamp_millis(dt.timestamp_millis()) {
            Some(ts) => FieldValue::Timestamp(ts),
            None => FieldValue::Text(dt.to_string()),
        },
        Bson::Null | Bson::Undefined => FieldValue::Null,
        Bson::ObjectId(oid) => FieldValue::Text(oid.to_hex()),
        other @ Bson::Decimal128(_) => {
            let json = other.into_relaxed_extjson();
            let digits = json.get("$numberDecimal").and_then(|v| v.as_str());
            match digits.and_then(|s| s.parse::<f64>().ok()) {
                Some(f) if f.is_nan() => FieldValue::Null,
                Some(f) => FieldValue::Float(f),
                None => FieldValue::Text(digits.map(str::to_string).unwrap_or_else(|| json.to_string())),
            }
        }
        other => FieldValue::Text(other.into_relaxed_extjson().to_string()),
    }
}
