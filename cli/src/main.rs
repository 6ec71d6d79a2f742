//! wav2png CLI - render an audio file to a waveform preview.

mod args;
mod pipeline;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use w2p_common::PreviewConfig;

use crate::args::{load_config, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<()> {
    let base = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PreviewConfig::default(),
    };
    let config = cli.resolve(base)?;

    init_tracing(config.verbose);

    let output = cli.output_path(config.mode);
    pipeline::run(&cli.input, &output, &config).with_context(|| {
        format!(
            "failed to convert {} to {}",
            cli.input.display(),
            output.display()
        )
    })
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
