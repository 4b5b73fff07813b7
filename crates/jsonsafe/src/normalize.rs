//! Projection of a data-layer value into a JSON-safe value.
//!
//! Scalar extensions are rewritten: decimals become `f64`, timestamps become
//! ISO-8601 strings (UTC, millisecond precision) and big integers become
//! ordinary numbers. Arrays keep their length and order, objects keep their
//! keys and key order, and every other node is copied unchanged.
//!
//! The walk uses an explicit stack of open containers instead of recursion,
//! so nesting depth is limited by heap rather than by the thread stack.

use core::slice;

use crate::number::{bigint_to_number, decimal_to_f64, timestamp_to_iso};
use crate::value::{Number, Value};

/// Build a JSON-safe copy of `value`. The input is left untouched.
///
/// Applying `normalize` to its own output returns an equal value.
pub fn normalize(value: &Value) -> Value {
    let mut current = match Step::of(value) {
        Step::Open(frame) => frame,
        Step::Leaf(leaf) => return leaf,
    };
    let mut parents: Vec<Frame<'_>> = Vec::new();
    loop {
        match current.next_child() {
            Some(child) => match Step::of(child) {
                Step::Open(frame) => parents.push(core::mem::replace(&mut current, frame)),
                Step::Leaf(leaf) => current.push(leaf),
            },
            None => match parents.pop() {
                Some(parent) => {
                    let done = core::mem::replace(&mut current, parent).finish();
                    current.push(done);
                }
                None => return current.finish(),
            },
        }
    }
}

/// Project a single non-container node.
///
/// The scalar-extension arms come first; containers never reach this point.
fn project(value: &Value) -> Value {
    match value {
        Value::Decimal(d) => decimal_to_f64(d).map_or(Value::Null, |f| Value::Number(Number::F64(f))),
        Value::Timestamp(ts) => Value::String(timestamp_to_iso(ts)),
        Value::BigInt(i) => Value::Number(bigint_to_number(*i)),
        other => other.clone(),
    }
}

enum Step<'a> {
    Leaf(Value),
    Open(Frame<'a>),
}

impl<'a> Step<'a> {
    fn of(value: &'a Value) -> Self {
        match value {
            Value::Array(items) => Step::Open(Frame::Array {
                items: items.iter(),
                out: Vec::with_capacity(items.len()),
            }),
            Value::Object(entries) => Step::Open(Frame::Object {
                entries: entries.iter(),
                pending: None,
                out: Vec::with_capacity(entries.len()),
            }),
            leaf => Step::Leaf(project(leaf)),
        }
    }
}

/// A container whose children are being normalized.
enum Frame<'a> {
    Array {
        items: slice::Iter<'a, Value>,
        out: Vec<Value>,
    },
    Object {
        entries: slice::Iter<'a, (String, Value)>,
        // key of the child currently being normalized
        pending: Option<&'a str>,
        out: Vec<(String, Value)>,
    },
}

impl<'a> Frame<'a> {
    fn next_child(&mut self) -> Option<&'a Value> {
        match self {
            Frame::Array { items, .. } => items.next(),
            Frame::Object { entries, pending, .. } => {
                let (key, value) = entries.next()?;
                *pending = Some(key.as_str());
                Some(value)
            }
        }
    }

    fn push(&mut self, value: Value) {
        match self {
            Frame::Array { out, .. } => out.push(value),
            Frame::Object { pending, out, .. } => {
                if let Some(key) = pending.take() {
                    out.push((key.to_string(), value));
                }
            }
        }
    }

    fn finish(self) -> Value {
        match self {
            Frame::Array { out, .. } => Value::Array(out),
            Frame::Object { out, .. } => Value::Object(out),
        }
    }
}
