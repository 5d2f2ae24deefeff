//! Codec Error Types
//!
//! Decoding malformed-but-object-shaped wire data never produces an error:
//! such values pass through unchanged. Errors here cover the generic JSON
//! primitives, the recursion limit, and application-side constructors.

use thiserror::Error;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors produced by the codec
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CodecError {
    /// The JSON parse or stringify primitive failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The value tree nests containers deeper than the configured limit
    #[error("Nesting depth exceeds limit of {limit}")]
    DepthExceeded {
        /// Configured maximum container depth
        limit: usize,
    },

    /// A component passed to a typed-value constructor is out of range
    #[error("Invalid {field}: {value}")]
    InvalidComponent {
        /// Name of the offending component
        field: &'static str,
        /// The rejected value
        value: i64,
    },

    /// Calendar arithmetic left the representable range
    #[error("{what} is out of the representable range")]
    OutOfRange {
        /// What was being computed
        what: &'static str,
    },

    /// A discriminator string names no known tagged type
    #[error("Unknown discriminator: '{tag}'")]
    UnknownTag {
        /// The unrecognised discriminator
        tag: String,
    },
}

impl CodecError {
    /// Create an invalid component error
    pub fn invalid_component(field: &'static str, value: impl Into<i64>) -> Self {
        Self::InvalidComponent {
            field,
            value: value.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(what: &'static str) -> Self {
        Self::OutOfRange { what }
    }

    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::Json(_) => "CODEC_JSON",
            Self::DepthExceeded { .. } => "CODEC_DEPTH_EXCEEDED",
            Self::InvalidComponent { .. } => "CODEC_INVALID_COMPONENT",
            Self::OutOfRange { .. } => "CODEC_OUT_OF_RANGE",
            Self::UnknownTag { .. } => "CODEC_UNKNOWN_TAG",
        }
    }

    /// Whether the error was caused by the input rather than by the codec
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Json(e) if e.is_io())
    }
}
