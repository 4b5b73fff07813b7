#![no_main]
use chrono::{DateTime, Utc};
use jsonsafe::{Value, normalize, to_json};
use libfuzzer_sys::{arbitrary, fuzz_target};
use rust_decimal::Decimal;

const MAX_DEPTH: usize = 8;
const MAX_ARRAY_SIZE: usize = 20;
const MAX_OBJECT_SIZE: usize = 20;

fn arbitrary_value(u: &mut arbitrary::Unstructured, depth: usize) -> arbitrary::Result<Value> {
    if depth >= MAX_DEPTH {
        return Ok(Value::Null);
    }
    let choice: u8 = u.arbitrary()?;
    Ok(match choice % 11 {
        0 => Value::Null,
        1 => Value::Bool(u.arbitrary()?),
        2 => Value::from(u.arbitrary::<i64>()?),
        3 => {
            let n: f64 = u.arbitrary()?;
            if n.is_finite() { Value::from(n) } else { Value::Null }
        }
        4 => Value::String(u.arbitrary()?),
        5 => {
            let lo: u32 = u.arbitrary()?;
            let mid: u32 = u.arbitrary()?;
            let hi: u32 = u.arbitrary()?;
            let scale = u.int_in_range(0..=28)?;
            Value::Decimal(Decimal::from_parts(lo, mid, hi, u.arbitrary()?, scale))
        }
        6 => {
            let millis = u.int_in_range(
                DateTime::<Utc>::MIN_UTC.timestamp_millis()..=DateTime::<Utc>::MAX_UTC.timestamp_millis(),
            )?;
            DateTime::<Utc>::from_timestamp_millis(millis).map_or(Value::Null, Value::Timestamp)
        }
        7 => Value::BigInt(u.arbitrary()?),
        8 | 9 => {
            let size = u.int_in_range(0..=MAX_ARRAY_SIZE)?;
            let mut arr = Vec::with_capacity(size);
            for _ in 0..size {
                arr.push(arbitrary_value(u, depth + 1)?);
            }
            Value::Array(arr)
        }
        _ => {
            let size = u.int_in_range(0..=MAX_OBJECT_SIZE)?;
            let mut obj = Vec::with_capacity(size);
            for _ in 0..size {
                let key: String = u.arbitrary()?;
                obj.push((key, arbitrary_value(u, depth + 1)?));
            }
            Value::Object(obj)
        }
    })
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);
    if let Ok(value) = arbitrary_value(&mut u, 0) {
        let once = normalize(&value);
        assert!(once.is_json_safe(), "extension survived: {:?}", once);
        assert_eq!(normalize(&once), once, "not idempotent for {:?}", value);

        let text = jsonsafe::to_string(&value).expect("serializing a Value cannot fail");
        let parsed: serde_json::Value = serde_json::from_str(&text).expect("output is valid JSON");
        assert_eq!(parsed, to_json(&value));
    }
});
