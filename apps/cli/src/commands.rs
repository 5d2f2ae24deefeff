use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::Context;
use fulfil_codec::{Codec, Value};

use crate::cli::InputArgs;

pub fn revive(codec: &Codec, input: &InputArgs) -> anyhow::Result<()> {
    let value = decode(codec, input)?;
    emit(&value.to_string())
}

pub fn normalize(codec: &Codec, input: &InputArgs, pretty: bool) -> anyhow::Result<()> {
    let value = decode(codec, input)?;
    let text = if pretty {
        codec.to_wire_pretty(&value)
    } else {
        codec.to_wire(&value)
    }
    .context("failed to encode payload")?;
    emit(&text)
}

fn decode(codec: &Codec, input: &InputArgs) -> anyhow::Result<Value> {
    let text = read_input(input.file.as_deref())?;
    let value = codec.from_wire(&text).context("failed to decode payload")?;
    tracing::debug!(kind = %value.kind(), "payload decoded");
    Ok(value)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn emit(text: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}").context("failed to write output")?;
    Ok(())
}
