//! # fulfil-log
//!
//! Logging bootstrap shared by the fulfil tools.
//!
//! Libraries in the workspace only emit `tracing` events; binaries call one
//! of the init functions here once at startup.
//!
//! ```rust
//! use fulfil_log::prelude::*;
//!
//! fn main() -> LogResult<()> {
//!     let _guard = fulfil_log::auto_init()?;
//!     info!(port = 8080, "starting");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, FORMAT_ENV, Format, LEVEL_ENV, Writer};
pub use error::{LogError, LogResult};

// Re-export tracing macros
pub use tracing::{debug, error, info, trace, warn};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{LogResult, auto_init, debug, error, info, init, init_with, trace, warn};
}

/// Auto-detect and initialize the best logging configuration.
///
/// `FULFIL_LOG` or `RUST_LOG` selects [`Config::from_env`]; otherwise debug
/// builds get [`Config::development`] and release builds
/// [`Config::production`].
pub fn auto_init() -> LogResult<LoggerGuard> {
    let from_env = std::env::var_os(LEVEL_ENV).is_some() || std::env::var_os("RUST_LOG").is_some();
    if from_env {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
