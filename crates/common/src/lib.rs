//! `w2p-common` — Shared types, configuration, and errors for the wav2png pipeline.
//!
//! This crate is the foundation that the other pipeline crates depend on:
//!
//! - **Types**: `MinMax`, `Envelope` (the fixed-length amplitude summary)
//! - **Color**: `Rgba` (pixel colour, hex parsing)
//! - **Codec**: `AudioCodec`, `AudioStreamInfo` (decoder header data)
//! - **Config**: `PreviewConfig`, `OutputMode`
//! - **Errors**: `PreviewError` (thiserror-based), `PreviewResult`
//! - **Atomic**: `write_atomic` (temp file + rename)

pub mod atomic;
pub mod codec;
pub mod color;
pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use atomic::write_atomic;
pub use codec::{AudioCodec, AudioStreamInfo};
pub use color::{ParseColorError, Rgba};
pub use config::{default_output_path, OutputMode, PreviewConfig};
pub use error::{PreviewError, PreviewResult};
pub use types::{Envelope, MinMax};
