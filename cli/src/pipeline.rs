//! Conversion pipeline: decode -> envelope -> PNG or `.prev`.
//!
//! ```text
//! AudioDecoder::decode_mono -> build_envelope -+-> BitmapRenderer -> write_png
//!                                              +-> write_prev_file
//! ```
//!
//! Each stage consumes the previous stage's output. Nothing is written
//! until the final stage, and that write is atomic.

use std::path::Path;

use tracing::debug;
use w2p_audio::{build_envelope, AudioDecoder};
use w2p_common::{AudioStreamInfo, OutputMode, PreviewConfig, PreviewResult};
use w2p_prev::write_prev_file;
use w2p_render::{write_png, BitmapRenderer};

/// Convert `input` to `output` according to `config`.
pub fn run(input: &Path, output: &Path, config: &PreviewConfig) -> PreviewResult<()> {
    config.validate()?;

    let mut decoder = AudioDecoder::open(input)?;
    if config.verbose {
        println!("{}", stream_summary(input, decoder.stream_info()));
    }

    let wav = decoder.decode_mono()?;
    let envelope = build_envelope(&wav, config.width as usize)?;
    drop(wav);

    match config.mode {
        OutputMode::Image => {
            if config.verbose {
                println!(
                    "rendering waveform to {} x {} image to file {}",
                    config.width,
                    config.height,
                    output.display()
                );
            }
            let bitmap = BitmapRenderer::new(config.height)
                .with_colors(config.background, config.foreground)
                .render(&envelope)?;
            write_png(&bitmap, output)?;
        }
        OutputMode::Binary => {
            if config.verbose {
                println!(
                    "rendering waveform to binary file of length {} path: {}",
                    config.width,
                    output.display()
                );
            }
            write_prev_file(&envelope, output)?;
        }
    }

    debug!(input = %input.display(), output = %output.display(), "Conversion finished");
    Ok(())
}

/// Human-readable header summary printed in verbose mode.
pub fn stream_summary(path: &Path, info: &AudioStreamInfo) -> String {
    let frames = info
        .frames
        .map_or_else(|| "unknown".to_string(), |f| f.to_string());
    let bit_depth = info
        .bits_per_sample
        .map_or_else(|| "unknown".to_string(), |b| b.to_string());
    format!(
        "File: {}\nduration: {:.1}s\nframes: {}\nchannels: {}\nsample rate: {}\nbit depth: {}\ncodec: {}",
        path.display(),
        info.duration_secs(),
        frames,
        info.channels,
        info.sample_rate,
        bit_depth,
        info.codec.display_name(),
    )
}
