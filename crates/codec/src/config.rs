//! Codec configuration

use serde::{Deserialize, Serialize};

/// Default limit on container nesting, matching serde_json's parser limit
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Environment variable read by [`CodecConfig::from_env`]
pub const MAX_DEPTH_ENV: &str = "FULFIL_CODEC_MAX_DEPTH";

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Maximum number of nested arrays/objects the transformers walk
    pub max_depth: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CodecConfig {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_DEPTH_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(depth) => config.max_depth = depth,
                Err(e) => tracing::warn!(
                    var = MAX_DEPTH_ENV,
                    value = %raw,
                    error = %e,
                    "ignoring invalid max depth"
                ),
            }
        }

        config
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
