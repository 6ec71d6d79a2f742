//! Audio error types (thiserror-based).

use thiserror::Error;
use w2p_common::PreviewError;

/// Audio subsystem error type.
#[derive(Error, Debug)]
pub enum AudioError {
    /// Failed to open or read an audio file.
    #[error("Failed to open audio file: {0}")]
    FileOpen(String),

    /// The audio format/codec is not supported.
    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error from Symphonia.
    #[error("Decode error: {0}")]
    Decode(String),

    /// No audio track found in the container.
    #[error("No audio track found in file")]
    NoAudioTrack,

    /// The caller's abort check asked decoding to stop.
    #[error("Decoding aborted")]
    Aborted,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<AudioError> for PreviewError {
    fn from(err: AudioError) -> Self {
        match err {
            AudioError::FileOpen(path) => PreviewError::InputNotFound { path },
            AudioError::Aborted => PreviewError::Aborted,
            AudioError::Io(e) => PreviewError::Io(e),
            other => PreviewError::Decode(other.to_string()),
        }
    }
}
