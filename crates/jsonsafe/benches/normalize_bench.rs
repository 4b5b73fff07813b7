use std::hint::black_box;

use chrono::{Duration, TimeZone, Utc};
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use jsonsafe::Value;
use rust_decimal::Decimal;

fn invoices(rows: usize) -> Value {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..rows)
        .map(|i| {
            Value::object([
                ("id", Value::BigInt(i as i128)),
                ("amount", Value::Decimal(Decimal::new(1_000 + i as i64, 2))),
                ("issuedAt", Value::Timestamp(start + Duration::minutes(i as i64))),
                ("patient", Value::from(format!("p{}", i))),
                ("paid", Value::from(i % 3 == 0)),
            ])
        })
        .collect()
}

fn nested(depth: usize, breadth: usize) -> Value {
    if depth == 0 {
        return Value::Decimal(Decimal::new(12345, 3));
    }
    Value::object((0..breadth).map(|i| (format!("k{}", i), nested(depth - 1, breadth))))
}

pub fn normalize_benchmarks(c: &mut Criterion) {
    let cases = [
        ("invoices_1k", invoices(1_000)),
        ("invoices_10k", invoices(10_000)),
        ("nested_5x5", nested(5, 5)),
    ];
    let mut group = c.benchmark_group("normalize");
    for (name, v) in &cases {
        let bytes = jsonsafe::to_string(v).map(|s| s.len()).unwrap_or(0);
        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_function(format!("normalize::{name}"), |b| {
            b.iter(|| black_box(jsonsafe::normalize(black_box(v))))
        });
        group.bench_function(format!("to_json::{name}"), |b| {
            b.iter(|| black_box(jsonsafe::to_json(black_box(v))))
        });
        group.bench_function(format!("to_string::{name}"), |b| {
            b.iter_batched(
                || v.clone(),
                |v| black_box(jsonsafe::to_string(&v)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, normalize_benchmarks);
criterion_main!(benches);
