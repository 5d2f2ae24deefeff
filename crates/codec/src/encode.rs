//! Encoder: typed values to tagged wire objects

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bigdecimal::BigDecimal as Decimal;
use serde_json::{Map as JsonMap, Number, Value as Json};

use crate::delta::DeltaScope;
use crate::tag::{DISCRIMINATOR, Tag};
use crate::temporal::{Date, DateTime, Time, TimeDelta};
use crate::value::Value;

/// Largest integer an f64 holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Tagged wire form of a typed value; `None` for plain JSON values.
///
/// Dispatch order is Date, DateTime, Time, TimeDelta, Decimal, Bytes.
pub(crate) fn encode_typed(value: &Value) -> Option<Json> {
    let encoded = match value {
        Value::Date(d) => date(d),
        Value::DateTime(dt) => datetime(dt),
        Value::Time(t) => time(t),
        Value::TimeDelta(td) => timedelta(td),
        Value::Decimal(d) => decimal(d),
        Value::Bytes(b) => bytes(b),
        Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Array(_)
        | Value::Object(_) => return None,
    };
    Some(encoded)
}

fn tagged(tag: Tag) -> JsonMap<String, Json> {
    let mut out = JsonMap::new();
    out.insert(DISCRIMINATOR.to_owned(), Json::from(tag.wire_name()));
    out
}

pub(crate) fn date(d: &Date) -> Json {
    let mut out = tagged(Tag::Date);
    out.insert("year".into(), d.year().into());
    out.insert("month".into(), (d.month0() + 1).into());
    out.insert("day".into(), d.day().into());
    if let Some(delta) = d.delta() {
        delta.write_wire(&mut out, DeltaScope::Date);
    }
    Json::Object(out)
}

/// UTC fields; sub-millisecond precision is already gone, so `microsecond`
/// is always a multiple of 1000.
pub(crate) fn datetime(dt: &DateTime) -> Json {
    let mut out = tagged(Tag::DateTime);
    out.insert("year".into(), dt.year().into());
    out.insert("month".into(), (dt.month0() + 1).into());
    out.insert("day".into(), dt.day().into());
    out.insert("hour".into(), dt.hour().into());
    out.insert("minute".into(), dt.minute().into());
    out.insert("second".into(), dt.second().into());
    out.insert("microsecond".into(), (dt.millisecond() * 1_000).into());
    if let Some(delta) = dt.delta() {
        delta.write_wire(&mut out, DeltaScope::DateTime);
    }
    Json::Object(out)
}

pub(crate) fn time(t: &Time) -> Json {
    let mut out = tagged(Tag::Time);
    out.insert("hour".into(), t.hour().into());
    out.insert("minute".into(), t.minute().into());
    out.insert("second".into(), t.second().into());
    out.insert("microsecond".into(), (t.millisecond() * 1_000).into());
    Json::Object(out)
}

/// Only elapsed seconds are sent; years and months are dropped.
pub(crate) fn timedelta(td: &TimeDelta) -> Json {
    if td.has_calendar_components() {
        tracing::debug!(
            years = td.years(),
            months = td.months(),
            "timedelta calendar components are not representable on the wire"
        );
    }
    let mut out = tagged(Tag::TimeDelta);
    out.insert("seconds".into(), seconds(td.total_seconds()));
    Json::Object(out)
}

fn seconds(total: f64) -> Json {
    if total.fract() == 0.0 && total.abs() <= MAX_SAFE_INTEGER {
        Json::from(total as i64)
    } else {
        Number::from_f64(total).map_or(Json::Null, Json::Number)
    }
}

pub(crate) fn decimal(d: &Decimal) -> Json {
    let mut out = tagged(Tag::Decimal);
    out.insert("decimal".into(), Json::from(d.to_string()));
    Json::Object(out)
}

/// One encode call over the whole buffer; the engine has no input ceiling.
pub(crate) fn bytes(b: &[u8]) -> Json {
    let mut out = tagged(Tag::Bytes);
    out.insert("base64".into(), Json::from(STANDARD.encode(b)));
    Json::Object(out)
}
