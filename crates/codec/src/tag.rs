//! Wire discriminator for tagged values

use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

/// Object key that carries the discriminator on the wire
pub const DISCRIMINATOR: &str = "__class__";

/// The fixed set of tagged wire types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Arbitrary-precision decimal carried as a string
    Decimal,
    /// UTC date and time
    DateTime,
    /// Naive calendar date
    Date,
    /// Naive time of day
    Time,
    /// Elapsed seconds
    TimeDelta,
    /// Base64 byte blob
    Bytes,
}

impl Tag {
    /// All tags, in encoder dispatch order
    pub const ALL: [Tag; 6] = [
        Tag::Date,
        Tag::DateTime,
        Tag::Time,
        Tag::TimeDelta,
        Tag::Decimal,
        Tag::Bytes,
    ];

    /// Parse a discriminator, ignoring ASCII case
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| name.eq_ignore_ascii_case(tag.name()))
    }

    /// Lowercase name used when comparing discriminators
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Decimal => "decimal",
            Tag::DateTime => "datetime",
            Tag::Date => "date",
            Tag::Time => "time",
            Tag::TimeDelta => "timedelta",
            Tag::Bytes => "bytes",
        }
    }

    /// Discriminator emitted by the encoder.
    ///
    /// The server expects `Decimal` capitalised and every other tag in
    /// lowercase.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Tag::Decimal => "Decimal",
            other => other.name(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tag {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CodecError::UnknownTag { tag: s.to_string() })
    }
}
