//! Serde integration
//!
//! `Serialize` writes the tagged wire form, so a [`Value`] embedded in any
//! serde-derived request struct reaches the server in the shape it expects.
//! `Deserialize` parses generic JSON and revives it against the system
//! clock.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};

use super::Value;
use crate::clock::SystemClock;
use crate::config::DEFAULT_MAX_DEPTH;
use crate::encode;
use crate::revive::Reviver;
use crate::transform::{transform_request, transform_response};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),

            Value::Bool(b) => serializer.serialize_bool(*b),

            Value::Number(n) => n.serialize(serializer),

            Value::String(s) => serializer.serialize_str(s),

            // Containers go through the depth-limited encoder
            Value::Array(_) | Value::Object(_) => transform_request(self, DEFAULT_MAX_DEPTH)
                .map_err(ser::Error::custom)?
                .serialize(serializer),

            typed => encode::encode_typed(typed).serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = serde_json::Value::deserialize(deserializer)?;
        let clock = SystemClock;
        transform_response(json, &Reviver::new(&clock), DEFAULT_MAX_DEPTH)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::{Date, Time};
    use crate::value::Map;
    use pretty_assertions::assert_eq;
    use bigdecimal::BigDecimal as Decimal;
    use serde_json::json;

    #[test]
    fn test_serialize_writes_wire_form() {
        let mut map = Map::new();
        map.insert("when".into(), Value::date(Date::new(2024, 0, 15).unwrap()));
        map.insert("amount".into(), Value::decimal(Decimal::new(105.into(), 1)));
        let json = serde_json::to_value(Value::Object(map)).unwrap();
        assert_eq!(
            json,
            json!({
                "when": {"__class__": "date", "year": 2024, "month": 1, "day": 15},
                "amount": {"__class__": "Decimal", "decimal": "10.5"},
            })
        );
    }

    #[test]
    fn test_deserialize_revives() {
        let value: Value = serde_json::from_str(
            r#"[{"__class__": "time", "hour": 5, "minute": 30, "second": 0, "microsecond": 0}]"#,
        )
        .unwrap();
        assert_eq!(
            value,
            Value::Array(vec![Value::time(Time::new(5, 30, 0, 0).unwrap())])
        );
    }

    fn nested(depth: usize) -> Value {
        (0..depth).fold(Value::from(1), |inner, _| Value::Array(vec![inner]))
    }

    #[test]
    fn test_serialize_respects_depth_limit() {
        assert!(serde_json::to_string(&nested(DEFAULT_MAX_DEPTH)).is_ok());

        let err = serde_json::to_string(&nested(DEFAULT_MAX_DEPTH + 1)).unwrap_err();
        assert!(err.to_string().contains(&DEFAULT_MAX_DEPTH.to_string()));
    }

    #[derive(Debug, serde::Deserialize, serde::Serialize)]
    struct Envelope {
        id: u32,
        payload: Value,
    }

    #[test]
    fn test_embedded_in_derived_struct() {
        let envelope: Envelope = serde_json::from_value(json!({
            "id": 7,
            "payload": {"__class__": "decimal", "decimal": "1.25"},
        }))
        .unwrap();
        assert_eq!(envelope.id, 7);
        assert_eq!(envelope.payload, Value::decimal(Decimal::new(125.into(), 2)));

        let back = serde_json::to_value(&envelope).unwrap();
        assert_eq!(back["payload"], json!({"__class__": "Decimal", "decimal": "1.25"}));
    }
}
