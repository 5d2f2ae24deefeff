//! `fulfil`: revive and re-encode tagged JSON payloads from the command line.

mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use fulfil_codec::{Codec, CodecConfig, FixedClock};
use fulfil_log::{Config, LoggerBuilder, LoggerGuard};

use cli::{Cli, Command, GlobalArgs};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(&cli.global)?;
    let codec = build_codec(&cli.global);

    tracing::debug!(
        max_depth = codec.config().max_depth,
        now = ?cli.global.now,
        "codec ready"
    );

    match cli.command {
        Command::Revive(input) => commands::revive(&codec, &input),
        Command::Normalize { input, pretty } => commands::normalize(&codec, &input, pretty),
    }
}

fn init_logging(global: &GlobalArgs) -> anyhow::Result<LoggerGuard> {
    let config = Config {
        level: global.log_level.clone(),
        format: global.log_format,
        ..Config::default()
    };
    LoggerBuilder::from_config(config)
        .build()
        .context("failed to initialise logging")
}

fn build_codec(global: &GlobalArgs) -> Codec {
    let mut config = CodecConfig::from_env();
    if let Some(depth) = global.max_depth {
        config = config.with_max_depth(depth);
    }

    let builder = Codec::builder().config(config);
    match global.now {
        Some(now) => builder.clock(FixedClock::new(now)).build(),
        None => builder.build(),
    }
}
