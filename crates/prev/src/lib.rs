//! `w2p-prev` — The `.prev` binary envelope format.
//!
//! A `.prev` file is `2 * N` bytes for an N-entry envelope: no header, no
//! magic number, no length prefix. See [`codec`] for the byte mapping.

pub mod codec;
pub mod load;
pub mod save;

pub use codec::{decode, dequantize, encode, quantize, BYTES_PER_ENTRY};
pub use load::read_prev_file;
pub use save::write_prev_file;
