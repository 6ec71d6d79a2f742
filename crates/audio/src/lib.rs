//! `w2p-audio` — Audio decoding and envelope generation for wav2png.
//!
//! - **Decoding**: Symphonia-based decode of WAV, FLAC, MP3, Vorbis, AAC
//! - **Down-mix**: Per-frame channel averaging into one mono sequence
//! - **Waveform**: Fixed-resolution min/max envelope building
//!
//! # Architecture
//!
//! ```text
//! AudioDecoder -> decode_mono -> build_envelope -> Envelope
//! ```
//!
//! The whole file is decoded into memory before the envelope is built.
//! Decoder errors are converted into [`w2p_common::PreviewError`] at the
//! crate boundary.

pub mod decoder;
pub mod error;
pub mod waveform;

// Re-export primary types at crate root for convenience
pub use decoder::{downmix_to_mono, AudioDecoder, DecodedAudio};
pub use error::AudioError;
pub use waveform::{bucket_range, build_envelope};
