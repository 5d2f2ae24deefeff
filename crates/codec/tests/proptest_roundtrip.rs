//! Property-based round-trip laws

use chrono::{TimeZone, Utc};
use fulfil_codec::DeltaScope;
use fulfil_codec::prelude::*;
use proptest::prelude::*;

fn codec() -> Codec {
    let now = Utc.with_ymd_and_hms(2024, 5, 17, 6, 45, 10).unwrap();
    Codec::builder().clock(FixedClock::new(now)).build()
}

fn round_trip(value: &Value) -> Value {
    let codec = codec();
    let wire = codec.to_wire(value).unwrap();
    codec.from_wire(&wire).unwrap()
}

fn date() -> impl Strategy<Value = Date> {
    (1i32..=9999, 0u32..12, 1u32..=28).prop_map(|(y, m, d)| Date::new(y, m, d).unwrap())
}

fn time() -> impl Strategy<Value = Time> {
    (0u32..24, 0u32..60, 0u32..60, 0u32..1000).prop_map(|(h, m, s, ms)| Time::new(h, m, s, ms).unwrap())
}

fn offset() -> impl Strategy<Value = Option<i64>> {
    prop::option::of(-500i64..500)
}

fn delta() -> impl Strategy<Value = Delta> {
    (offset(), offset(), offset(), offset(), offset(), offset()).prop_map(
        |(years, months, days, hours, minutes, seconds)| Delta {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        },
    )
}

/// The delta a decoder sees: zero components are falsy on the wire
fn truthy(delta: Delta) -> Delta {
    let nonzero = |c: Option<i64>| c.filter(|v| *v != 0);
    Delta {
        years: nonzero(delta.years),
        months: nonzero(delta.months),
        days: nonzero(delta.days),
        hours: nonzero(delta.hours),
        minutes: nonzero(delta.minutes),
        seconds: nonzero(delta.seconds),
    }
}

fn typed_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        date().prop_map(Value::date),
        (date(), time()).prop_map(|(d, t)| Value::datetime(DateTime::combine(&d, &t))),
        time().prop_map(Value::time),
        (-10_000_000i64..10_000_000).prop_map(|ms| Value::timedelta(TimeDelta::from_seconds(ms as f64 / 1000.0))),
        (any::<i128>(), -20i64..=40).prop_map(|(n, scale)| Value::decimal(Decimal::new(n.into(), scale))),
        prop::collection::vec(any::<u8>(), 0..512).prop_map(Value::bytes),
    ]
}

fn value_tree() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
        typed_value(),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z_]{1,6}", inner), 0..6)
                .prop_map(|entries| entries.into_iter().collect::<Value>()),
        ]
    })
}

proptest! {
    #[test]
    fn typed_values_round_trip(value in typed_value()) {
        prop_assert_eq!(round_trip(&value), value);
    }

    #[test]
    fn trees_round_trip(value in value_tree()) {
        prop_assert_eq!(round_trip(&value), value);
    }

    #[test]
    fn relative_dates_carry_their_delta(delta in delta()) {
        let codec = codec();
        let Ok(date) = Date::relative(delta, codec.clock()) else {
            return Ok(());
        };
        let revived = round_trip(&Value::date(date));
        let revived = revived.as_date().unwrap();
        match truthy(delta.restrict(DeltaScope::Date)).non_empty() {
            Some(d) => {
                let expected = d.apply_to_date(codec.clock().today()).unwrap();
                prop_assert_eq!(revived.as_naive(), expected);
                prop_assert_eq!(revived.delta(), Some(&d));
            }
            None => {
                prop_assert_eq!(revived.as_naive(), date.as_naive());
                prop_assert_eq!(revived.delta(), None);
            }
        }
    }

    #[test]
    fn relative_datetimes_evaluate_against_the_clock(delta in delta()) {
        let codec = codec();
        let Ok(dt) = DateTime::relative(delta, codec.clock()) else {
            return Ok(());
        };
        let revived = round_trip(&Value::datetime(dt));
        let revived = revived.as_datetime().unwrap();
        match truthy(delta).non_empty() {
            Some(d) => {
                let expected = d.apply_to_datetime(codec.clock().now()).unwrap();
                prop_assert_eq!(revived.as_utc(), expected);
                prop_assert_eq!(revived.delta(), Some(&d));
            }
            None => {
                prop_assert_eq!(revived.as_utc(), dt.as_utc());
                prop_assert_eq!(revived.delta(), None);
            }
        }
    }
}
