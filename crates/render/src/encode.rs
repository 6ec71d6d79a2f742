//! PNG encoding of rendered bitmaps.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Encoder};
use tracing::info;
use w2p_common::{write_atomic, PreviewError, PreviewResult};

use crate::bitmap::Bitmap;

/// Encode `bitmap` as an 8-bit RGBA PNG in memory.
pub fn encode_png(bitmap: &Bitmap) -> PreviewResult<Vec<u8>> {
    let mut buffer = Vec::new();
    encode_png_to_writer(bitmap, &mut buffer).map_err(|e| PreviewError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Encode `bitmap` and write it to `path`.
///
/// The file either ends up holding the complete image or is not touched.
pub fn write_png(bitmap: &Bitmap, path: &Path) -> PreviewResult<()> {
    let data = encode_png(bitmap)?;
    write_atomic(path, &data)?;
    info!(
        path = %path.display(),
        width = bitmap.width(),
        height = bitmap.height(),
        "Wrote waveform image"
    );
    Ok(())
}

fn encode_png_to_writer<W: Write>(bitmap: &Bitmap, writer: W) -> Result<(), png::EncodingError> {
    let mut encoder = Encoder::new(writer, bitmap.width(), bitmap.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&bitmap.to_rgba8())?;
    png_writer.finish()
}
