//! Projections of the scalar extensions onto JSON-safe scalars.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::value::Number;

/// Nearest `f64` to `d`.
///
/// Goes through the decimal text so the result is correctly rounded:
/// `Decimal("99.99")` lands on the same double as the literal `99.99`.
pub fn decimal_to_f64(d: &Decimal) -> Option<f64> {
    d.to_string().parse::<f64>().ok().or_else(|| d.to_f64())
}

/// Integers inside the 64-bit range stay exact; wider ones fall back to `f64`.
pub fn bigint_to_number(i: i128) -> Number {
    if let Ok(v) = i64::try_from(i) {
        Number::I64(v)
    } else if let Ok(v) = u64::try_from(i) {
        Number::U64(v)
    } else {
        Number::F64(i as f64)
    }
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ`, truncated to milliseconds.
///
/// Years outside `0..=9999` use the ISO-8601 extended form: a sign and six
/// digits (`+012000-01-01T00:00:00.000Z`, `-000005-...`).
pub fn timestamp_to_iso(ts: &DateTime<Utc>) -> String {
    let year = ts.year();
    if (0..=9999).contains(&year) {
        return ts.to_rfc3339_opts(SecondsFormat::Millis, true);
    }
    let sign = if year < 0 { '-' } else { '+' };
    format!(
        "{}{:06}-{}",
        sign,
        year.unsigned_abs(),
        ts.format("%m-%dT%H:%M:%S%.3fZ")
    )
}

/// Shortest round-tripping text for a finite float; `null` otherwise.
pub(crate) fn format_f64(value: f64) -> String {
    if !value.is_finite() {
        return String::from("null");
    }
    if value == 0.0 {
        // drop the sign of -0.0
        return String::from("0.0");
    }
    let mut buf = ryu::Buffer::new();
    String::from(buf.format_finite(value))
}
