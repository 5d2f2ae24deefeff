//! Recursive response and request transformers
//!
//! Both walks count container nesting from the root (depth 0) and stop with
//! [`CodecError::DepthExceeded`] when a container would sit at `max_depth`.

use serde_json::Value as Json;

use crate::encode;
use crate::error::{CodecError, CodecResult};
use crate::revive::Reviver;
use crate::value::{Map, Value};

/// Revive a parsed JSON tree.
///
/// Children are revived first and the rebuilt object is then revived as a
/// whole: a tagged object's own fields are scalars, so only the second pass
/// turns it into a typed value.
pub fn transform_response(
    json: Json,
    reviver: &Reviver<'_>,
    max_depth: usize,
) -> CodecResult<Value> {
    response(json, reviver, max_depth, 0)
}

fn response(json: Json, reviver: &Reviver<'_>, limit: usize, depth: usize) -> CodecResult<Value> {
    match json {
        Json::Array(items) => {
            enter(depth, limit)?;
            items
                .into_iter()
                .map(|item| response(item, reviver, limit, depth + 1))
                .collect::<CodecResult<Vec<_>>>()
                .map(Value::Array)
        }
        Json::Object(fields) => {
            enter(depth, limit)?;
            let mut map = Map::with_capacity(fields.len());
            for (key, field) in fields {
                let field = match field {
                    nested @ (Json::Object(_) | Json::Array(_)) => {
                        response(nested, reviver, limit, depth + 1)?
                    }
                    scalar => reviver.revive(Value::from(scalar)),
                };
                map.insert(key, field);
            }
            Ok(reviver.revive(Value::Object(map)))
        }
        scalar => Ok(Value::from(scalar)),
    }
}

/// Encode a value tree into the tagged wire form
pub fn transform_request(value: &Value, max_depth: usize) -> CodecResult<Json> {
    request(value, max_depth, 0)
}

fn request(value: &Value, limit: usize, depth: usize) -> CodecResult<Json> {
    Ok(match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(n) => Json::Number(n.clone()),
        Value::String(s) => Json::String(s.clone()),
        Value::Array(items) => {
            enter(depth, limit)?;
            Json::Array(
                items
                    .iter()
                    .map(|item| request(item, limit, depth + 1))
                    .collect::<CodecResult<_>>()?,
            )
        }
        Value::Object(map) => {
            enter(depth, limit)?;
            let mut out = serde_json::Map::with_capacity(map.len());
            for (key, field) in map {
                out.insert(key.clone(), request(field, limit, depth + 1)?);
            }
            Json::Object(out)
        }
        Value::Date(d) => encode::date(d),
        Value::DateTime(dt) => encode::datetime(dt),
        Value::Time(t) => encode::time(t),
        Value::TimeDelta(td) => encode::timedelta(td),
        Value::Decimal(d) => encode::decimal(d),
        Value::Bytes(b) => encode::bytes(b),
    })
}

fn enter(depth: usize, limit: usize) -> CodecResult<()> {
    if depth >= limit {
        return Err(CodecError::DepthExceeded { limit });
    }
    Ok(())
}
