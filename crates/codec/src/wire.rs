//! Lenient readers for fields of tagged wire objects

use crate::value::{Map, Value};

/// A field that is present but cannot be read as a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Malformed(pub(crate) &'static str);

/// Read a numeric field. Numbers and numeric strings are accepted; `null`
/// and absence both read as `None`.
pub(crate) fn number(map: &Map, key: &'static str) -> Result<Option<f64>, Malformed> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce(value).map(Some).ok_or(Malformed(key)),
    }
}

/// Read an integral field, truncating any fractional part toward zero
pub(crate) fn integer(map: &Map, key: &'static str) -> Result<Option<i64>, Malformed> {
    if let Some(Value::Number(n)) = map.get(key) {
        if let Some(i) = n.as_i64() {
            return Ok(Some(i));
        }
    }
    match number(map, key)? {
        None => Ok(None),
        Some(f) => truncate(f).map(Some).ok_or(Malformed(key)),
    }
}

/// Numeric value of a wire scalar, if it has one
pub(crate) fn coerce(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Truncate toward zero, rejecting values outside the `i64` range
pub(crate) fn truncate(f: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_807.0;
    let t = f.trunc();
    (t.is_finite() && t.abs() < LIMIT).then_some(t as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(json: serde_json::Value) -> Map {
        match Value::from(json) {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn test_integer_field() {
        let m = map(json!({"a": 5, "b": "7", "c": 2.9, "d": null, "e": "x", "f": true}));
        assert_eq!(integer(&m, "a"), Ok(Some(5)));
        assert_eq!(integer(&m, "b"), Ok(Some(7)));
        assert_eq!(integer(&m, "c"), Ok(Some(2)));
        assert_eq!(integer(&m, "d"), Ok(None));
        assert_eq!(integer(&m, "missing"), Ok(None));
        assert_eq!(integer(&m, "e"), Err(Malformed("e")));
        assert_eq!(integer(&m, "f"), Err(Malformed("f")));
    }

    #[test]
    fn test_number_field() {
        let m = map(json!({"s": 1.5, "t": " 2.25 ", "u": "NaN"}));
        assert_eq!(number(&m, "s"), Ok(Some(1.5)));
        assert_eq!(number(&m, "t"), Ok(Some(2.25)));
        assert_eq!(number(&m, "u"), Err(Malformed("u")));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(-2.7), Some(-2));
        assert_eq!(truncate(1e300), None);
        assert_eq!(truncate(f64::NAN), None);
    }
}
