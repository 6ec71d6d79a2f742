//! Command-line flags and their resolution into a [`PreviewConfig`].

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use w2p_common::{default_output_path, OutputMode, PreviewConfig, PreviewError, PreviewResult, Rgba};

#[derive(Parser, Debug)]
#[command(name = "wav2png")]
#[command(version, about = "Render an audio file to a waveform PNG or .prev envelope", long_about = None)]
#[command(disable_help_flag = true, allow_negative_numbers = true)]
pub struct Cli {
    /// Input audio file (WAV, FLAC, MP3, Ogg Vorbis, ...)
    pub input: PathBuf,

    /// Output file (default: input path with a .png or .prev extension)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Preview width in pixels / envelope entries (default: 256)
    #[arg(short = 'w', long)]
    pub width: Option<i64>,

    /// Image height in pixels (default: 256)
    #[arg(short = 'h', long)]
    pub height: Option<i64>,

    /// Print stream details and debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Write the binary .prev envelope instead of a PNG
    #[arg(short = 'b', long)]
    pub binary: bool,

    /// Background colour as #rrggbb (default: #000000)
    #[arg(long, value_name = "HEX")]
    pub background: Option<Rgba>,

    /// Waveform colour as #rrggbb (default: #ffffff)
    #[arg(long, value_name = "HEX")]
    pub foreground: Option<Rgba>,

    /// JSON file with default settings; flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl Cli {
    /// Apply the flags on top of `base`.
    ///
    /// Non-positive widths fail with `InvalidResolution`. Heights are only
    /// checked in image mode, where non-positive values fail with
    /// `InvalidDimensions`.
    pub fn resolve(&self, base: PreviewConfig) -> PreviewResult<PreviewConfig> {
        let mut config = base;

        if self.binary {
            config.mode = OutputMode::Binary;
        }
        config.verbose |= self.verbose;

        if let Some(w) = self.width {
            config.width = u32::try_from(w)
                .ok()
                .filter(|&w| w > 0)
                .ok_or(PreviewError::InvalidResolution(w))?;
        }

        if let Some(h) = self.height {
            match u32::try_from(h) {
                Ok(h) => config.height = h,
                Err(_) if config.mode == OutputMode::Image => {
                    return Err(PreviewError::InvalidDimensions {
                        width: config.width as i64,
                        height: h,
                    });
                }
                Err(_) => {}
            }
        }

        if let Some(bg) = self.background {
            config.background = bg;
        }
        if let Some(fg) = self.foreground {
            config.foreground = fg;
        }

        config.validate()?;
        Ok(config)
    }

    /// Output path for the resolved mode.
    pub fn output_path(&self, mode: OutputMode) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input, mode))
    }
}

/// Load a [`PreviewConfig`] from a JSON file.
pub fn load_config(path: &Path) -> anyhow::Result<PreviewConfig> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
