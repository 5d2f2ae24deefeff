//! Structural behaviour of the response and request transformers

use chrono::{TimeZone, Utc};
use fulfil_codec::prelude::*;
use fulfil_codec::CodecConfig;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::{Value as Json, json};

#[fixture]
fn codec() -> Codec {
    let now = Utc.with_ymd_and_hms(2024, 7, 4, 18, 30, 0).unwrap();
    Codec::builder().clock(FixedClock::new(now)).build()
}

#[rstest]
#[case::date(
    json!({"__class__": "date", "year": 2024, "month": 2, "day": 29}),
    Value::date(Date::new(2024, 1, 29).unwrap())
)]
#[case::datetime(
    json!({"__class__": "datetime", "year": 2024, "month": 12, "day": 31,
           "hour": 23, "minute": 59, "second": 59, "microsecond": 1000}),
    Value::datetime(DateTime::new(2024, 11, 31, 23, 59, 59, 1).unwrap())
)]
#[case::time(
    json!({"__class__": "time", "hour": 5, "minute": 30, "second": 0, "microsecond": 0}),
    Value::time(Time::new(5, 30, 0, 0).unwrap())
)]
#[case::timedelta(
    json!({"__class__": "timedelta", "seconds": 90}),
    Value::timedelta(TimeDelta::from_seconds(90.0))
)]
#[case::decimal_capitalised(
    json!({"__class__": "Decimal", "decimal": "3.14"}),
    Value::decimal(Decimal::new(314.into(), 2))
)]
#[case::bytes(
    json!({"__class__": "bytes", "base64": "AAEC"}),
    Value::bytes(vec![0u8, 1, 2])
)]
#[case::decimal_nan(
    json!({"__class__": "decimal", "decimal": "NaN"}),
    Value::Null
)]
#[case::relative_date(
    json!({"__class__": "date", "dd": -4}),
    Value::date(Date::relative(Delta::new().with_days(-4), &FixedClock::new(
        Utc.with_ymd_and_hms(2024, 7, 4, 18, 30, 0).unwrap()
    )).unwrap())
)]
fn revives_tagged_leaf(codec: Codec, #[case] wire: Json, #[case] expected: Value) {
    assert_eq!(codec.transform_response(wire).unwrap(), expected);
}

#[rstest]
#[case::plain(json!({"name": "widget", "qty": 3}))]
#[case::unknown_tag(json!({"__class__": "set", "items": [1, 2]}))]
#[case::missing_base64(json!({"__class__": "bytes"}))]
#[case::bad_year(json!({"__class__": "date", "year": {"not": "a number"}}))]
fn passes_through(codec: Codec, #[case] wire: Json) {
    let revived = codec.transform_response(wire.clone()).unwrap();
    assert_eq!(codec.transform_request(&revived).unwrap(), wire);
}

#[rstest]
fn nested_structures_keep_their_shape(codec: Codec) {
    let wire = json!({
        "a": [{"__class__": "time", "hour": 5, "minute": 30, "second": 0, "microsecond": 0}],
        "lines": [
            {"product": 1, "price": {"__class__": "decimal", "decimal": "9.99"}},
            {"product": 2, "price": null},
        ],
        "meta": {"shipped": {"__class__": "date", "year": 2024, "month": 7, "day": 1}},
    });
    let revived = codec.transform_response(wire).unwrap();

    assert_eq!(
        revived.get("a"),
        Some(&Value::Array(vec![Value::time(Time::new(5, 30, 0, 0).unwrap())]))
    );
    let lines = revived.get("lines").and_then(Value::as_array).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].get("price"), Some(&Value::decimal(Decimal::new(999.into(), 2))));
    assert_eq!(lines[1].get("price"), Some(&Value::Null));
    assert_eq!(
        revived.get("meta").and_then(|m| m.get("shipped")),
        Some(&Value::date(Date::new(2024, 6, 1).unwrap()))
    );
}

#[rstest]
fn request_encodes_typed_values_inside_containers(codec: Codec) {
    let mut line = Map::new();
    line.insert("price".into(), Value::decimal(Decimal::new(5.into(), 0)));
    line.insert("at".into(), Value::time(Time::new(12, 0, 0, 0).unwrap()));
    let value = Value::Array(vec![Value::Object(line), Value::Null]);

    assert_eq!(
        codec.transform_request(&value).unwrap(),
        json!([
            {
                "price": {"__class__": "Decimal", "decimal": "5"},
                "at": {"__class__": "time", "hour": 12, "minute": 0, "second": 0, "microsecond": 0},
            },
            null,
        ])
    );
}

#[rstest]
fn key_order_survives_both_directions(codec: Codec) {
    let text = r#"{"z":1,"y":{"__class__":"Decimal","decimal":"2"},"x":[3]}"#;
    let value = codec.from_wire(text).unwrap();
    assert_eq!(codec.to_wire(&value).unwrap(), text);
}

#[rstest]
#[case(0, false)]
#[case(1, false)]
#[case(2, true)]
fn depth_limit(#[case] max_depth: usize, #[case] ok: bool) {
    let codec = Codec::builder()
        .config(CodecConfig::default().with_max_depth(max_depth))
        .build();
    let wire = json!({"outer": {"__class__": "time", "hour": 1}});
    let result = codec.transform_response(wire);
    assert_eq!(result.is_ok(), ok);
    if let Err(err) = result {
        assert!(matches!(err, CodecError::DepthExceeded { limit } if limit == max_depth));
    }
}

#[test]
fn free_functions_use_a_default_codec() {
    let value = fulfil_codec::from_wire(r#"[1, {"__class__": "bytes", "base64": "aGk="}]"#).unwrap();
    assert_eq!(value, Value::Array(vec![Value::from(1), Value::bytes(b"hi".to_vec())]));
    assert_eq!(
        fulfil_codec::to_wire(&value).unwrap(),
        r#"[1,{"__class__":"bytes","base64":"aGk="}]"#
    );
}
