//! Decoder for the tagged JSON form data-access layers use on the wire.
//!
//! A scalar extension travels as a two-key envelope:
//!
//! ```text
//! {"$type": "Decimal",  "value": "12.50"}
//! {"$type": "DateTime", "value": "2024-01-15T10:30:00+02:00"}
//! {"$type": "BigInt",   "value": "9007199254740993"}
//! ```
//!
//! Everything else is plain JSON and lifts into [`Value`] as is. Envelopes
//! with an unknown tag, or with a payload that does not parse, are kept as
//! ordinary objects unless [`Options::strict`] is set.

use std::io::Read;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, trace};

use crate::json::json_number;
use crate::options::Options;
use crate::value::{Number, Value};
use crate::{Error, Result};

const TAG_DECIMAL: &str = "Decimal";
const TAG_DATETIME: &str = "DateTime";
const TAG_BIGINT: &str = "BigInt";

pub fn from_tagged_str(s: &str, options: &Options) -> Result<Value> {
    let v: JsonValue = serde_json::from_str(s)?;
    from_tagged_value(v, options)
}

pub fn from_tagged_reader<R: Read>(mut reader: R, options: &Options) -> Result<Value> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    from_tagged_str(&s, options)
}

pub fn from_tagged_value(value: JsonValue, options: &Options) -> Result<Value> {
    options.validate()?;
    let mut path = String::new();
    decode(value, &mut path, options)
}

fn decode(value: JsonValue, path: &mut String, options: &Options) -> Result<Value> {
    match value {
        JsonValue::Object(map) => {
            if let Some(tag) = envelope_tag(&map, options) {
                match decode_envelope(tag, &map[&options.value_key], path.as_str()) {
                    Ok(v) => {
                        trace!(path = path.as_str(), tag, "decoded tagged value");
                        return Ok(v);
                    }
                    Err(e) if options.strict => return Err(e),
                    Err(e) => debug!(path = path.as_str(), error = %e, "keeping envelope as plain object"),
                }
            }
            let mut out = Vec::with_capacity(map.len());
            for (key, child) in map {
                let len = path.len();
                push_segment(path, &key);
                let decoded = decode(child, path, options)?;
                path.truncate(len);
                out.push((key, decoded));
            }
            Ok(Value::Object(out))
        }
        JsonValue::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (idx, child) in items.into_iter().enumerate() {
                let len = path.len();
                push_segment(path, &idx.to_string());
                out.push(decode(child, path, options)?);
                path.truncate(len);
            }
            Ok(Value::Array(out))
        }
        scalar => Ok(Value::from(scalar)),
    }
}

/// The tag of `map` if it has exactly the envelope shape.
fn envelope_tag<'m>(map: &'m Map<String, JsonValue>, options: &Options) -> Option<&'m str> {
    if map.len() != 2 || !map.contains_key(&options.value_key) {
        return None;
    }
    map.get(&options.type_key)?.as_str()
}

fn decode_envelope(tag: &str, payload: &JsonValue, path: &str) -> Result<Value> {
    match tag {
        TAG_DECIMAL => parse_decimal(payload)
            .map(Value::Decimal)
            .ok_or_else(|| Error::tagged(path, format!("invalid Decimal payload: {}", payload))),
        TAG_DATETIME => parse_datetime(payload)
            .map(Value::Timestamp)
            .ok_or_else(|| Error::tagged(path, format!("invalid DateTime payload: {}", payload))),
        TAG_BIGINT => parse_bigint(payload)
            .map(Value::BigInt)
            .ok_or_else(|| Error::tagged(path, format!("invalid BigInt payload: {}", payload))),
        other => Err(Error::tagged(path, format!("unknown tag `{}`", other))),
    }
}

fn parse_decimal(payload: &JsonValue) -> Option<Decimal> {
    let text = match payload {
        JsonValue::String(s) => s.trim().to_string(),
        JsonValue::Number(n) => n.to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

fn parse_datetime(payload: &JsonValue) -> Option<DateTime<Utc>> {
    let s = payload.as_str()?;
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_bigint(payload: &JsonValue) -> Option<i128> {
    match payload {
        JsonValue::String(s) => s.trim().parse::<i128>().ok(),
        JsonValue::Number(n) => match json_number(n) {
            Number::I64(i) => Some(i as i128),
            Number::U64(u) => Some(u as i128),
            Number::F64(_) => None,
        },
        _ => None,
    }
}

/// Append a JSON pointer segment (RFC 6901 escaping).
fn push_segment(path: &mut String, segment: &str) {
    path.push('/');
    for ch in segment.chars() {
        match ch {
            '~' => path.push_str("~0"),
            '/' => path.push_str("~1"),
            c => path.push(c),
        }
    }
}
