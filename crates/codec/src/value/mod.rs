//! Typed value tree
//!
//! [`Value`] is what the decoder produces and the encoder consumes: plain
//! JSON structure plus the six tagged types the server knows how to send.

mod convert;
mod display;
mod kind;
mod serde;

pub use kind::ValueKind;

use bytes::Bytes;
use indexmap::IndexMap;
use bigdecimal::BigDecimal as Decimal;

use crate::temporal::{Date, DateTime, Time, TimeDelta};

/// Object map, insertion ordered
pub type Map = IndexMap<String, Value>;

/// A JSON value in which tagged wire objects have been revived
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null
    #[default]
    Null,

    /// Boolean
    Bool(bool),

    /// Number, keeping the integer/float distinction of the wire
    Number(serde_json::Number),

    /// UTF-8 string
    String(String),

    /// Ordered array
    Array(Vec<Value>),

    /// Object with insertion-ordered keys
    Object(Map),

    /// Arbitrary precision decimal
    Decimal(Decimal),

    /// Naive calendar date
    Date(Date),

    /// UTC date and time
    DateTime(DateTime),

    /// Naive time of day
    Time(Time),

    /// Interval
    TimeDelta(TimeDelta),

    /// Binary data
    Bytes(Bytes),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value
    #[inline]
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a string value
    #[inline]
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create an empty object
    #[inline]
    pub fn object() -> Self {
        Self::Object(Map::new())
    }

    /// Create an empty array
    #[inline]
    pub const fn array() -> Self {
        Self::Array(Vec::new())
    }

    /// Create a decimal value
    #[inline]
    pub fn decimal(v: Decimal) -> Self {
        Self::Decimal(v)
    }

    /// Create a date value
    #[inline]
    pub const fn date(v: Date) -> Self {
        Self::Date(v)
    }

    /// Create a datetime value
    #[inline]
    pub const fn datetime(v: DateTime) -> Self {
        Self::DateTime(v)
    }

    /// Create a time value
    #[inline]
    pub const fn time(v: Time) -> Self {
        Self::Time(v)
    }

    /// Create an interval value
    #[inline]
    pub const fn timedelta(v: TimeDelta) -> Self {
        Self::TimeDelta(v)
    }

    /// Create a bytes value
    #[inline]
    pub fn bytes(v: impl Into<Bytes>) -> Self {
        Self::Bytes(v.into())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Date(_) => ValueKind::Date,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::Time(_) => ValueKind::Time,
            Self::TimeDelta(_) => ValueKind::TimeDelta,
            Self::Bytes(_) => ValueKind::Bytes,
        }
    }

    /// Check if this is one of the tagged wire types
    #[inline]
    #[must_use]
    pub fn is_typed(&self) -> bool {
        self.kind().is_typed()
    }

    /// Check if this is null
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is an array or object
    #[inline]
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Object(_))
    }

    // ==================== Accessors ====================

    /// Try to get as boolean
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as JSON number
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&serde_json::Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Try to get as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as array slice
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as object reference
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Try to get as decimal
    #[inline]
    #[must_use]
    pub fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Self::Decimal(d) => Some(d),
            _ => None,
        }
    }

    /// Try to get as date
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&Date> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Try to get as datetime
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get as time
    #[inline]
    #[must_use]
    pub fn as_time(&self) -> Option<&Time> {
        match self {
            Self::Time(t) => Some(t),
            _ => None,
        }
    }

    /// Try to get as interval
    #[inline]
    #[must_use]
    pub fn as_timedelta(&self) -> Option<&TimeDelta> {
        match self {
            Self::TimeDelta(td) => Some(td),
            _ => None,
        }
    }

    /// Try to get as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Look up a key of an object; `None` for missing keys and non-objects
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}
