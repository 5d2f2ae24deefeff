//! # fulfil-codec
//!
//! Typed codec for the tagged JSON wire format of business-object servers.
//!
//! The server encodes types JSON cannot carry (decimals, dates, datetimes,
//! times, intervals, byte blobs) as objects with a `__class__` discriminator.
//! This crate revives those objects into [`Value`] variants on the way in and
//! writes the identical tagged form on the way out, including the `dy dM dd
//! dh dm ds` offsets of relative dates.
//!
//! ```
//! use fulfil_codec::{Value, from_wire, to_wire};
//!
//! let value = from_wire(r#"{"total": {"__class__": "decimal", "decimal": "10.50"}}"#)?;
//! assert!(matches!(value.get("total"), Some(Value::Decimal(_))));
//! assert_eq!(
//!     to_wire(&value)?,
//!     r#"{"total":{"__class__":"Decimal","decimal":"10.50"}}"#
//! );
//! # Ok::<(), fulfil_codec::CodecError>(())
//! ```
//!
//! Relative dates are evaluated against an injected [`Clock`]; pin it with
//! [`FixedClock`] for reproducible decoding:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use fulfil_codec::{Codec, FixedClock};
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
//! let codec = Codec::builder().clock(FixedClock::new(now)).build();
//! let value = codec.from_wire(r#"{"__class__": "date", "dM": 1}"#)?;
//! assert_eq!(value.to_string(), "Date(2024-02-29 +{+1M})");
//! # Ok::<(), fulfil_codec::CodecError>(())
//! ```

pub mod clock;
pub mod codec;
pub mod config;
pub mod delta;
mod encode;
pub mod error;
pub mod revive;
pub mod tag;
pub mod temporal;
pub mod transform;
pub mod value;
mod wire;

pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{Codec, CodecBuilder};
pub use config::CodecConfig;
pub use delta::{Delta, DeltaScope};
pub use error::{CodecError, CodecResult};
pub use revive::Reviver;
pub use tag::{DISCRIMINATOR, Tag};
pub use temporal::{Date, DateTime, Time, TimeDelta};
pub use transform::{transform_request, transform_response};
pub use value::{Map, Value, ValueKind};

pub use bytes::Bytes;
pub use bigdecimal::BigDecimal as Decimal;

/// Parse and revive wire text with a default [`Codec`]
pub fn from_wire(text: &str) -> CodecResult<Value> {
    Codec::default().from_wire(text)
}

/// Encode and stringify a value with a default [`Codec`]
pub fn to_wire(value: &Value) -> CodecResult<String> {
    Codec::default().to_wire(value)
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Clock, Codec, CodecError, CodecResult, Date, DateTime, Decimal, Delta, FixedClock, Map,
        SystemClock, Time, TimeDelta, Value, ValueKind,
    };
}
