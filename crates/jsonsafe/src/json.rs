//! Interop with `serde_json`, the output boundary of the crate.

use std::io::Write;

use serde_json::Value as JsonValue;

use crate::Result;
use crate::normalize::normalize;
use crate::number::{bigint_to_number, decimal_to_f64, timestamp_to_iso};
use crate::value::{Number, Value};

/// Normalize `value` and convert it to a `serde_json::Value`.
///
/// `serde_json::Map` holds each key once: when an object carries the same
/// key twice, the later value wins and stays in the first key's position.
/// [`normalize`] and the `Serialize` impl (used by [`to_string`]) keep every
/// entry.
pub fn to_json(value: &Value) -> JsonValue {
    JsonValue::from(normalize(value))
}

/// Compact JSON text for `value`, scalar extensions projected.
pub fn to_string(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn to_string_pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn to_writer<W: Write>(writer: W, value: &Value) -> Result<()> {
    serde_json::to_writer(writer, value)?;
    Ok(())
}

fn number_to_json(n: Number) -> JsonValue {
    match n {
        Number::I64(i) => JsonValue::from(i),
        Number::U64(u) => JsonValue::from(u),
        // from_f64 refuses NaN and infinities
        Number::F64(f) => serde_json::Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number),
    }
}

/// Scalar extensions that were not normalized beforehand are projected here
/// too, so the conversion can never leak one. Duplicate object keys collapse
/// to the last value (see [`to_json`]).
impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(n) => number_to_json(n),
            Value::String(s) => JsonValue::String(s),
            Value::Decimal(d) => decimal_to_f64(&d).map_or(JsonValue::Null, |f| number_to_json(Number::F64(f))),
            Value::Timestamp(ts) => JsonValue::String(timestamp_to_iso(&ts)),
            Value::BigInt(i) => number_to_json(bigint_to_number(i)),
            Value::Array(items) => JsonValue::Array(items.into_iter().map(JsonValue::from).collect()),
            Value::Object(entries) => {
                let mut out = serde_json::Map::with_capacity(entries.len());
                for (k, v) in entries {
                    out.insert(k, JsonValue::from(v));
                }
                JsonValue::Object(out)
            }
        }
    }
}

/// Plain JSON is already JSON-safe; this is a lossless lift.
impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(json_number(&n)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect()),
        }
    }
}

pub(crate) fn json_number(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::I64(i)
    } else if let Some(u) = n.as_u64() {
        Number::U64(u)
    } else {
        Number::F64(n.as_f64().unwrap_or(f64::NAN))
    }
}
