use std::fmt;

use crate::tag::Tag;

/// Runtime discriminator of a [`Value`](super::Value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
    Decimal,
    Date,
    DateTime,
    Time,
    TimeDelta,
    Bytes,
}

impl ValueKind {
    /// Wire tag of a typed kind; `None` for plain JSON kinds
    pub const fn tag(self) -> Option<Tag> {
        match self {
            Self::Decimal => Some(Tag::Decimal),
            Self::Date => Some(Tag::Date),
            Self::DateTime => Some(Tag::DateTime),
            Self::Time => Some(Tag::Time),
            Self::TimeDelta => Some(Tag::TimeDelta),
            Self::Bytes => Some(Tag::Bytes),
            Self::Null | Self::Bool | Self::Number | Self::String | Self::Array | Self::Object => {
                None
            }
        }
    }

    /// Check if this kind travels as a tagged object
    pub const fn is_typed(self) -> bool {
        self.tag().is_some()
    }

    /// Get a descriptive name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
            Self::TimeDelta => "timedelta",
            Self::Bytes => "bytes",
        }
    }
}

impl From<Tag> for ValueKind {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Decimal => Self::Decimal,
            Tag::DateTime => Self::DateTime,
            Tag::Date => Self::Date,
            Tag::Time => Self::Time,
            Tag::TimeDelta => Self::TimeDelta,
            Tag::Bytes => Self::Bytes,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
