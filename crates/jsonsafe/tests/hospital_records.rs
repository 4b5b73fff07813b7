#![cfg(feature = "json")]
//! Records shaped like the ones a hospital data layer returns: money as
//! decimals, times as timestamps, counters as big integers.

use chrono::{DateTime, TimeZone, Utc};
use jsonsafe::{Value, to_json};
use rust_decimal::Decimal;
use serde_json::json;

struct Payment {
    amount: Decimal,
    paid_at: Option<DateTime<Utc>>,
}

struct Subscription {
    id: i128,
    plan: &'static str,
    monthly_fee: Decimal,
    renews_at: DateTime<Utc>,
    payments: Vec<Payment>,
}

impl From<&Payment> for Value {
    fn from(p: &Payment) -> Self {
        Value::object([("amount", Value::from(p.amount)), ("paidAt", Value::from(p.paid_at))])
    }
}

impl From<&Subscription> for Value {
    fn from(s: &Subscription) -> Self {
        Value::object([
            ("id", Value::from(s.id)),
            ("plan", Value::from(s.plan)),
            ("monthlyFee", Value::from(s.monthly_fee)),
            ("renewsAt", Value::from(s.renews_at)),
            ("payments", s.payments.iter().map(Value::from).collect()),
        ])
    }
}

#[test]
fn subscription_with_payments() {
    let sub = Subscription {
        id: 42,
        plan: "clinic-pro",
        monthly_fee: Decimal::new(14999, 2),
        renews_at: Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap(),
        payments: vec![
            Payment {
                amount: Decimal::new(14999, 2),
                paid_at: Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 5).unwrap()),
            },
            Payment {
                amount: Decimal::new(0, 0),
                paid_at: None,
            },
        ],
    };

    assert_eq!(
        to_json(&Value::from(&sub)),
        json!({
            "id": 42,
            "plan": "clinic-pro",
            "monthlyFee": 149.99,
            "renewsAt": "2024-07-01T00:00:00.000Z",
            "payments": [
                {"amount": 149.99, "paidAt": "2024-06-01T08:00:05.000Z"},
                {"amount": 0.0, "paidAt": null}
            ]
        })
    );
}

#[test]
fn doctor_listing_keeps_order() {
    let doctors: Value = ["Okafor", "Lindqvist", "Tanaka"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            Value::object([
                ("id", Value::BigInt(i as i128 + 1)),
                ("name", Value::from(name)),
                ("rating", Value::Decimal(Decimal::new(45 + i as i64, 1))),
            ])
        })
        .collect();

    assert_eq!(
        to_json(&doctors),
        json!([
            {"id": 1, "name": "Okafor", "rating": 4.5},
            {"id": 2, "name": "Lindqvist", "rating": 4.6},
            {"id": 3, "name": "Tanaka", "rating": 4.7}
        ])
    );
}
