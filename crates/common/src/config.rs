//! Preview configuration: output mode, dimensions, colours, verbosity.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{PreviewError, PreviewResult};

/// Default preview width (envelope resolution) in pixels/buckets.
pub const DEFAULT_WIDTH: u32 = 256;
/// Default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 256;

/// What the pipeline writes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// RGBA PNG image.
    #[default]
    Image,
    /// Raw `.prev` envelope bytes.
    Binary,
}

impl OutputMode {
    /// File extension used for default output paths.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Image => "png",
            Self::Binary => "prev",
        }
    }
}

/// Top-level preview configuration.
///
/// Built by the CLI (optionally starting from a JSON file) and passed by
/// reference into the pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Number of envelope buckets; also the image width.
    pub width: u32,
    /// Image height in pixels. Ignored in binary mode.
    pub height: u32,
    pub background: Rgba,
    pub foreground: Rgba,
    pub mode: OutputMode,
    /// Print a stream summary before rendering.
    pub verbose: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: Rgba::BLACK,
            foreground: Rgba::WHITE,
            mode: OutputMode::Image,
            verbose: false,
        }
    }
}

impl PreviewConfig {
    /// Reject dimensions the pipeline cannot produce.
    pub fn validate(&self) -> PreviewResult<()> {
        if self.width == 0 {
            return Err(PreviewError::InvalidResolution(0));
        }
        if self.mode == OutputMode::Image && self.height == 0 {
            return Err(PreviewError::InvalidDimensions {
                width: self.width as i64,
                height: 0,
            });
        }
        Ok(())
    }
}

/// Output path for `input` when none is given: the input path with its
/// extension replaced by the mode's extension.
pub fn default_output_path(input: &Path, mode: OutputMode) -> PathBuf {
    input.with_extension(mode.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = PreviewConfig::default();
        assert_eq!(cfg.width, 256);
        assert_eq!(cfg.height, 256);
        assert_eq!(cfg.background, Rgba::BLACK);
        assert_eq!(cfg.foreground, Rgba::WHITE);
        assert_eq!(cfg.mode, OutputMode::Image);
        assert!(!cfg.verbose);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_width() {
        let cfg = PreviewConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(PreviewError::InvalidResolution(0))
        ));
    }

    #[test]
    fn zero_height_only_matters_for_images() {
        let cfg = PreviewConfig {
            height: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(PreviewError::InvalidDimensions { height: 0, .. })
        ));

        let cfg = PreviewConfig {
            height: 0,
            mode: OutputMode::Binary,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn default_output_path_replaces_extension() {
        assert_eq!(
            default_output_path(Path::new("music/song.wav"), OutputMode::Image),
            PathBuf::from("music/song.png")
        );
        assert_eq!(
            default_output_path(Path::new("music/song.flac"), OutputMode::Binary),
            PathBuf::from("music/song.prev")
        );
        assert_eq!(
            default_output_path(Path::new("noext"), OutputMode::Image),
            PathBuf::from("noext.png")
        );
        // Dots in directory names are not treated as extensions.
        assert_eq!(
            default_output_path(Path::new("v1.2/take"), OutputMode::Binary),
            PathBuf::from("v1.2/take.prev")
        );
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: PreviewConfig =
            serde_json::from_str(r##"{"width": 800, "mode": "binary", "foreground": "#ff0000"}"##)
                .expect("parse config");
        assert_eq!(cfg.width, 800);
        assert_eq!(cfg.height, DEFAULT_HEIGHT);
        assert_eq!(cfg.mode, OutputMode::Binary);
        assert_eq!(cfg.foreground, Rgba::from_hex(0xFF0000));
        assert_eq!(cfg.background, Rgba::BLACK);
    }
}
