//! Audio codec identifiers and per-stream metadata.

use serde::{Deserialize, Serialize};

/// Audio codec identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCodec {
    Aac,
    Mp3,
    Flac,
    Wav,
    Opus,
    Vorbis,
    /// A codec the decoder supports but we have no name for.
    Other,
}

impl AudioCodec {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Aac => "AAC",
            Self::Mp3 => "MP3",
            Self::Flac => "FLAC",
            Self::Wav => "PCM/WAV",
            Self::Opus => "Opus",
            Self::Vorbis => "Vorbis",
            Self::Other => "other",
        }
    }
}

/// Header information for the decoded audio stream.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioStreamInfo {
    pub codec: AudioCodec,
    pub sample_rate: u32,
    pub channels: u16,
    /// Bits per sample of the source encoding, if the container reports it.
    pub bits_per_sample: Option<u32>,
    /// Total frame count, if known before decoding.
    pub frames: Option<u64>,
}

impl AudioStreamInfo {
    /// Duration in seconds, or 0.0 when the frame count is unknown.
    pub fn duration_secs(&self) -> f64 {
        match self.frames {
            Some(frames) if self.sample_rate > 0 => frames as f64 / self.sample_rate as f64,
            _ => 0.0,
        }
    }
}
