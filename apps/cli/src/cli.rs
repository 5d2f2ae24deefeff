use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use fulfil_log::Format;

#[derive(Parser)]
#[command(name = "fulfil", version, about = "Revive and re-encode tagged JSON payloads")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Evaluate relative dates against this instant instead of the wall clock
    #[arg(long, global = true, env = "FULFIL_NOW", value_name = "RFC3339")]
    pub now: Option<DateTime<Utc>>,

    /// Maximum nesting of arrays and objects
    #[arg(long, global = true, env = "FULFIL_CODEC_MAX_DEPTH")]
    pub max_depth: Option<usize>,

    /// Log filter directive, written to stderr
    #[arg(long, global = true, env = "FULFIL_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log output format (pretty, compact, json)
    #[arg(long, global = true, env = "FULFIL_LOG_FORMAT", default_value = "compact")]
    pub log_format: Format,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the revived value tree with typed leaves spelled out
    Revive(InputArgs),

    /// Revive a payload and write it back in canonical wire form
    Normalize {
        #[command(flatten)]
        input: InputArgs,

        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Args)]
pub struct InputArgs {
    /// Payload file; stdin when omitted or `-`
    pub file: Option<PathBuf>,
}
