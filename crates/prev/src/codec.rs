//! `.prev` byte layout.
//!
//! Each envelope entry is two bytes, min then max, each the amplitude
//! mapped from `[-1.0, 1.0]` onto `[0, 255]` with `(v + 1) * 127.5`,
//! rounded half away from zero and saturated. There is no header; the
//! entry count is the byte length divided by two.

use w2p_common::{Envelope, MinMax, PreviewError, PreviewResult};

/// Bytes per envelope entry.
pub const BYTES_PER_ENTRY: usize = 2;

const SCALE: f32 = 127.5;

/// Quantize one amplitude to a byte.
pub fn quantize(value: f32) -> u8 {
    // `as u8` saturates and maps NaN to 0.
    ((value + 1.0) * SCALE).round() as u8
}

/// Inverse of [`quantize`], up to one quantization step.
pub fn dequantize(byte: u8) -> f32 {
    byte as f32 / SCALE - 1.0
}

/// Serialize `envelope` to `2 * envelope.len()` bytes.
pub fn encode(envelope: &Envelope) -> Vec<u8> {
    let mut data = Vec::with_capacity(envelope.len() * BYTES_PER_ENTRY);
    for mm in envelope {
        data.push(quantize(mm.min));
        data.push(quantize(mm.max));
    }
    data
}

/// Parse `.prev` bytes back into an envelope.
pub fn decode(data: &[u8]) -> PreviewResult<Envelope> {
    if data.is_empty() {
        return Err(PreviewError::EmptyInput);
    }
    if data.len() % BYTES_PER_ENTRY != 0 {
        return Err(PreviewError::MalformedEnvelope { len: data.len() });
    }

    let entries = data
        .chunks_exact(BYTES_PER_ENTRY)
        .map(|pair| MinMax::new(dequantize(pair[0]), dequantize(pair[1])))
        .collect();
    Ok(Envelope::from_entries(entries))
}
