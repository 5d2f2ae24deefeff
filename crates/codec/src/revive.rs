//! Decoder: tagged wire objects to typed values
//!
//! Revival never fails. A tagged object the decoder cannot make sense of is
//! handed back unchanged, which keeps clients working when the server adds
//! tags or sends fields this codec does not expect.

use std::fmt;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use bytes::Bytes;
use chrono::NaiveTime;
use bigdecimal::BigDecimal as Decimal;

use crate::clock::Clock;
use crate::delta::{Delta, DeltaScope};
use crate::tag::{DISCRIMINATOR, Tag};
use crate::temporal::{self, Date, DateTime, Time, TimeDelta};
use crate::value::{Map, Value};
use crate::wire::{self, Malformed};

/// Standard alphabet, padding optional, trailing bits tolerated
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Why a tagged object was passed through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    /// A field is present but unreadable
    Field(&'static str),
    /// The fields describe a value outside the representable range
    Range(&'static str),
}

impl From<Malformed> for Rejection {
    fn from(Malformed(field): Malformed) -> Self {
        Self::Field(field)
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => write!(f, "unreadable field '{field}'"),
            Self::Range(what) => write!(f, "{what} out of range"),
        }
    }
}

/// Tag-dispatching decoder for a single value.
///
/// Relative dates are evaluated against the clock it borrows.
#[derive(Debug, Clone, Copy)]
pub struct Reviver<'a> {
    clock: &'a dyn Clock,
}

impl<'a> Reviver<'a> {
    /// Create a reviver reading "now" from `clock`
    pub const fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    /// Decode one value.
    ///
    /// Objects carrying a recognised discriminator become typed values;
    /// everything else, including `null`, is returned unchanged. The value's
    /// children are not visited.
    pub fn revive(&self, value: Value) -> Value {
        let Value::Object(map) = value else {
            return value;
        };
        let Some(tag) = discriminator(&map) else {
            return Value::Object(map);
        };

        let revived = match tag {
            Tag::Decimal => return decimal(&map),
            Tag::DateTime => self.datetime(&map).map(Value::DateTime),
            Tag::Date => self.date(&map).map(Value::Date),
            Tag::Time => time(&map).map(Value::Time),
            Tag::TimeDelta => timedelta(&map).map(Value::TimeDelta),
            Tag::Bytes => bytes(&map).map(Value::Bytes),
        };

        match revived {
            Ok(value) => value,
            Err(reason) => {
                tracing::debug!(%tag, %reason, "passing malformed tagged object through");
                Value::Object(map)
            }
        }
    }

    fn date(&self, map: &Map) -> Result<Date, Rejection> {
        if let Some(delta) = Delta::from_wire(map, DeltaScope::Date) {
            return Date::relative(delta, self.clock).map_err(|_| Rejection::Range("relative date"));
        }
        let Some(year) = wire::integer(map, "year")? else {
            return Ok(Date::today(self.clock));
        };
        let (month0, day) = month_and_day(map)?;
        temporal::normalize_date(year, month0, day)
            .map(Date::from_naive)
            .ok_or(Rejection::Range("date"))
    }

    fn datetime(&self, map: &Map) -> Result<DateTime, Rejection> {
        if let Some(delta) = Delta::from_wire(map, DeltaScope::DateTime) {
            return DateTime::relative(delta, self.clock)
                .map_err(|_| Rejection::Range("relative datetime"));
        }
        let Some(year) = wire::integer(map, "year")? else {
            return Ok(DateTime::now(self.clock));
        };
        let (month0, day) = month_and_day(map)?;
        let millis = time_millis(map)?;
        temporal::normalize_date(year, month0, day)
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
            .and_then(|midnight| {
                midnight.checked_add_signed(chrono::TimeDelta::try_milliseconds(millis)?)
            })
            .map(DateTime::from_utc)
            .ok_or(Rejection::Range("datetime"))
    }
}

/// Recognised discriminator of a wire object
fn discriminator(map: &Map) -> Option<Tag> {
    let name = map.get(DISCRIMINATOR)?.as_str()?;
    let tag = Tag::parse(name);
    if tag.is_none() {
        tracing::trace!(discriminator = name, "unrecognised discriminator");
    }
    tag
}

/// 0-based month and day, defaulting to January and the 1st.
///
/// A zero month is falsy on the wire and means January, not December of the
/// year before.
fn month_and_day(map: &Map) -> Result<(i64, i64), Malformed> {
    let month0 = match wire::integer(map, "month")? {
        None | Some(0) => 0,
        Some(month) => month.checked_sub(1).ok_or(Malformed("month"))?,
    };
    let day = wire::integer(map, "day")?.unwrap_or(1);
    Ok((month0, day))
}

/// Milliseconds since midnight from the time fields, absent parts zero
fn time_millis(map: &Map) -> Result<i64, Rejection> {
    let hour = wire::integer(map, "hour")?.unwrap_or(0);
    let minute = wire::integer(map, "minute")?.unwrap_or(0);
    let second = wire::integer(map, "second")?.unwrap_or(0);
    let millisecond = wire::integer(map, "microsecond")?.unwrap_or(0) / 1_000;
    temporal::total_millis(hour, minute, second, millisecond).ok_or(Rejection::Range("time"))
}

fn time(map: &Map) -> Result<Time, Rejection> {
    let millis = time_millis(map)?;
    Time::wrapping(0, 0, 0, millis).ok_or(Rejection::Range("time"))
}

fn timedelta(map: &Map) -> Result<TimeDelta, Rejection> {
    let seconds = wire::number(map, "seconds")?.unwrap_or(0.0);
    Ok(TimeDelta::from_seconds(seconds))
}

fn bytes(map: &Map) -> Result<Bytes, Rejection> {
    let encoded = map
        .get("base64")
        .and_then(Value::as_str)
        .ok_or(Rejection::Field("base64"))?;
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    FORGIVING
        .decode(compact)
        .map(Bytes::from)
        .map_err(|_| Rejection::Field("base64"))
}

/// Decimal from a string or number field; anything unusable is `null`
fn decimal(map: &Map) -> Value {
    let text = match map.get("decimal") {
        Some(Value::String(s)) => s.trim().to_owned(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    if text.is_empty() {
        tracing::debug!("empty decimal revived as null");
        return Value::Null;
    }
    match text.parse::<Decimal>() {
        Ok(d) => Value::Decimal(d),
        Err(_) => {
            tracing::debug!(decimal = %text, "unparseable decimal revived as null");
            Value::Null
        }
    }
}
