//! Codec entry points

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::CodecConfig;
use crate::error::CodecResult;
use crate::revive::Reviver;
use crate::transform;
use crate::value::Value;

/// Bidirectional codec between wire text and [`Value`] trees.
///
/// Cheap to clone; the clock is shared.
#[derive(Debug, Clone)]
pub struct Codec {
    config: CodecConfig,
    clock: Arc<dyn Clock>,
}

impl Default for Codec {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Codec {
    /// Codec with the system clock and default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a codec
    pub fn builder() -> CodecBuilder {
        CodecBuilder::default()
    }

    /// Active configuration
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Clock used for relative dates
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Decoder bound to this codec's clock
    pub fn reviver(&self) -> Reviver<'_> {
        Reviver::new(self.clock.as_ref())
    }

    /// Decode a single value without visiting its children
    pub fn revive(&self, value: Value) -> Value {
        self.reviver().revive(value)
    }

    /// Revive a parsed JSON tree
    pub fn transform_response(&self, json: serde_json::Value) -> CodecResult<Value> {
        transform::transform_response(json, &self.reviver(), self.config.max_depth)
    }

    /// Encode a value tree into the tagged wire form
    pub fn transform_request(&self, value: &Value) -> CodecResult<serde_json::Value> {
        transform::transform_request(value, self.config.max_depth)
    }

    /// Parse wire text and revive it
    pub fn from_wire(&self, text: &str) -> CodecResult<Value> {
        let json = serde_json::from_str(text)?;
        self.transform_response(json)
    }

    /// Parse wire bytes and revive them
    pub fn from_slice(&self, bytes: &[u8]) -> CodecResult<Value> {
        let json = serde_json::from_slice(bytes)?;
        self.transform_response(json)
    }

    /// Encode a value tree and stringify it
    pub fn to_wire(&self, value: &Value) -> CodecResult<String> {
        let json = self.transform_request(value)?;
        Ok(serde_json::to_string(&json)?)
    }

    /// Like [`Codec::to_wire`], indented
    pub fn to_wire_pretty(&self, value: &Value) -> CodecResult<String> {
        let json = self.transform_request(value)?;
        Ok(serde_json::to_string_pretty(&json)?)
    }
}

/// Builder for [`Codec`]
#[derive(Debug, Default)]
pub struct CodecBuilder {
    config: CodecConfig,
    clock: Option<Arc<dyn Clock>>,
}

impl CodecBuilder {
    /// Use `clock` for relative dates
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Use an already shared clock
    pub fn shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Limit container nesting
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the codec, defaulting to the system clock
    pub fn build(self) -> Codec {
        Codec {
            config: self.config,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        }
    }
}
