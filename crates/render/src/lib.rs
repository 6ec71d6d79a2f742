//! `w2p-render` — Bitmap rendering and PNG output for waveform envelopes.
//!
//! ```text
//! Envelope -> BitmapRenderer -> Bitmap -> encode_png / write_png
//! ```
//!
//! Each envelope entry becomes one image column. Columns are independent,
//! so painting could run in parallel without synchronization.

pub mod bitmap;
pub mod encode;

pub use bitmap::{value_to_row, Bitmap, BitmapRenderer};
pub use encode::{encode_png, write_png};
