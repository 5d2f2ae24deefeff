//! Configuration types
//!
//! - `base`: core structs (`Config`, `Format`, `Writer`, `DisplayConfig`)
//! - `presets`: development, production, test and environment setups

mod base;
mod presets;

pub use base::{Config, DisplayConfig, Format, Writer};
pub use presets::{FORMAT_ENV, LEVEL_ENV};
