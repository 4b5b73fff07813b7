//! `serde::Serialize` for [`Value`].
//!
//! Serializing never emits a scalar extension: decimals, timestamps and big
//! integers are written in their projected form, and non-finite floats are
//! written as `null` since JSON has no spelling for them.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::number::{bigint_to_number, decimal_to_f64, timestamp_to_iso};
use crate::value::{Number, Value};

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::I64(i) => serializer.serialize_i64(i),
            Number::U64(u) => serializer.serialize_u64(u),
            Number::F64(f) if f.is_finite() => serializer.serialize_f64(f),
            Number::F64(_) => serializer.serialize_unit(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Decimal(d) => match decimal_to_f64(d) {
                Some(f) => serializer.serialize_f64(f),
                None => serializer.serialize_unit(),
            },
            Value::Timestamp(ts) => serializer.serialize_str(&timestamp_to_iso(ts)),
            Value::BigInt(i) => bigint_to_number(*i).serialize(serializer),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}
