//! Envelope rasterization: one vertical bar per column.
//!
//! Amplitude `+1.0` maps to row 0 (top) and `-1.0` to row `height - 1`
//! (bottom). Rows are computed by linear interpolation, truncated, and
//! clamped into the image.

use tracing::debug;
use w2p_common::{Envelope, PreviewError, PreviewResult, Rgba};

/// Row-major RGBA pixel buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Bitmap {
    /// Create a bitmap filled with `fill`.
    ///
    /// Fails with `InvalidDimensions` when the pixel count overflows or the
    /// buffer cannot be allocated.
    pub fn filled(width: u32, height: u32, fill: Rgba) -> PreviewResult<Self> {
        let too_large = || PreviewError::InvalidDimensions {
            width: width as i64,
            height: height as i64,
        };
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(too_large)?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| too_large())?;
        pixels.resize(len, fill);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Flat RGBA bytes, 4 per pixel, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_array()).collect()
    }

    fn paint_column(&mut self, x: u32, rows: std::ops::RangeInclusive<u32>, color: Rgba) {
        let w = self.width as usize;
        for y in rows {
            self.pixels[y as usize * w + x as usize] = color;
        }
    }
}

/// Map an amplitude in `[-1.0, 1.0]` to a row in `[0, height - 1]`.
///
/// Values outside the range (or NaN) are clamped to the nearest edge row.
pub fn value_to_row(value: f32, height: u32) -> u32 {
    let last = height.saturating_sub(1) as f64;
    let row = (1.0 - value as f64) * 0.5 * last;
    if row.is_nan() {
        return 0;
    }
    row.clamp(0.0, last) as u32
}

/// Renders envelopes into bitmaps of a fixed height.
#[derive(Clone, Debug)]
pub struct BitmapRenderer {
    height: u32,
    background: Rgba,
    foreground: Rgba,
}

impl BitmapRenderer {
    /// Renderer with the default opaque black background and white bars.
    pub fn new(height: u32) -> Self {
        Self {
            height,
            background: Rgba::BLACK,
            foreground: Rgba::WHITE,
        }
    }

    pub fn with_colors(mut self, background: Rgba, foreground: Rgba) -> Self {
        self.background = background;
        self.foreground = foreground;
        self
    }

    /// Render `envelope` into a `envelope.len()` x `height` bitmap.
    ///
    /// Every pixel starts as background; column `i` is then painted with
    /// the foreground from the row of its max to the row of its min,
    /// inclusive.
    pub fn render(&self, envelope: &Envelope) -> PreviewResult<Bitmap> {
        let width = u32::try_from(envelope.len()).map_err(|_| PreviewError::InvalidDimensions {
            width: envelope.len() as i64,
            height: self.height as i64,
        })?;
        if width == 0 || self.height == 0 {
            return Err(PreviewError::InvalidDimensions {
                width: width as i64,
                height: self.height as i64,
            });
        }

        let mut bitmap = Bitmap::filled(width, self.height, self.background)?;

        for (x, mm) in envelope.iter().enumerate() {
            let top = value_to_row(mm.max, self.height);
            let bottom = value_to_row(mm.min, self.height);
            // min > max only for hand-built envelopes; paint the span anyway.
            let (top, bottom) = if top <= bottom {
                (top, bottom)
            } else {
                (bottom, top)
            };
            bitmap.paint_column(x as u32, top..=bottom, self.foreground);
        }

        debug!(width, height = self.height, "Rendered envelope bitmap");
        Ok(bitmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use w2p_common::MinMax;

    fn column(bitmap: &Bitmap, x: u32) -> Vec<Rgba> {
        (0..bitmap.height())
            .map(|y| bitmap.pixel(x, y).expect("in bounds"))
            .collect()
    }

    #[test]
    fn value_to_row_edges() {
        assert_eq!(value_to_row(1.0, 4), 0);
        assert_eq!(value_to_row(-1.0, 4), 3);
        assert_eq!(value_to_row(0.0, 4), 1); // 1.5 truncated
        assert_eq!(value_to_row(0.0, 5), 2);
        assert_eq!(value_to_row(-1.0, 256), 255);
    }

    #[test]
    fn value_to_row_clamps() {
        assert_eq!(value_to_row(1.5, 10), 0);
        assert_eq!(value_to_row(-1.0001, 10), 9);
        assert_eq!(value_to_row(f32::NAN, 10), 0);
        assert_eq!(value_to_row(0.3, 1), 0);
    }

    #[test]
    fn full_scale_column_fills_height() {
        let env = Envelope::from_entries(vec![MinMax::new(-1.0, 1.0)]);
        let bmp = BitmapRenderer::new(4).render(&env).expect("render");
        assert_eq!(bmp.width(), 1);
        assert_eq!(bmp.height(), 4);
        assert!(column(&bmp, 0).iter().all(|&p| p == Rgba::WHITE));
    }

    #[test]
    fn silent_column_paints_single_row() {
        let env = Envelope::from_entries(vec![MinMax::new(0.0, 0.0)]);
        let bmp = BitmapRenderer::new(5).render(&env).expect("render");
        let col = column(&bmp, 0);
        assert_eq!(col[2], Rgba::WHITE);
        assert_eq!(col.iter().filter(|&&p| p == Rgba::WHITE).count(), 1);
    }

    #[test]
    fn bottom_edge_bucket_indexes_last_row() {
        let env = Envelope::from_entries(vec![MinMax::new(-1.0, -1.0)]);
        let bmp = BitmapRenderer::new(8).render(&env).expect("render");
        assert_eq!(bmp.pixel(0, 7), Some(Rgba::WHITE));
        assert_eq!(bmp.pixel(0, 6), Some(Rgba::BLACK));
    }

    #[test]
    fn positive_half_paints_upper_rows() {
        let env = Envelope::from_entries(vec![MinMax::new(0.0, 1.0)]);
        let bmp = BitmapRenderer::new(5).render(&env).expect("render");
        let col = column(&bmp, 0);
        assert_eq!(
            col,
            vec![Rgba::WHITE, Rgba::WHITE, Rgba::WHITE, Rgba::BLACK, Rgba::BLACK]
        );
    }

    #[test]
    fn custom_colors() {
        let bg = Rgba::from_hex(0x202020);
        let fg = Rgba::from_hex(0xFF8800);
        let env = Envelope::from_entries(vec![MinMax::new(0.5, 1.0), MinMax::new(-1.0, -0.5)]);
        let bmp = BitmapRenderer::new(3).with_colors(bg, fg).render(&env).expect("render");
        assert_eq!(bmp.pixel(0, 0), Some(fg));
        assert_eq!(bmp.pixel(0, 2), Some(bg));
        assert_eq!(bmp.pixel(1, 0), Some(bg));
        assert_eq!(bmp.pixel(1, 2), Some(fg));
    }

    #[test]
    fn zero_height_is_invalid() {
        let env = Envelope::from_entries(vec![MinMax::new(-0.5, 0.5)]);
        let err = BitmapRenderer::new(0).render(&env).expect_err("should fail");
        assert!(matches!(
            err,
            PreviewError::InvalidDimensions {
                width: 1,
                height: 0
            }
        ));
    }

    #[test]
    fn empty_envelope_is_invalid() {
        let env = Envelope::from_entries(Vec::new());
        let err = BitmapRenderer::new(16).render(&env).expect_err("should fail");
        assert!(matches!(err, PreviewError::InvalidDimensions { width: 0, .. }));
    }

    #[test]
    fn rgba8_layout_is_row_major() {
        let env = Envelope::from_entries(vec![MinMax::new(1.0, 1.0), MinMax::new(-1.0, -1.0)]);
        let bmp = BitmapRenderer::new(2).render(&env).expect("render");
        let bytes = bmp.to_rgba8();
        assert_eq!(bytes.len(), 2 * 2 * 4);
        // Row 0: white, black. Row 1: black, white.
        assert_eq!(&bytes[0..4], &[255, 255, 255, 255]);
        assert_eq!(&bytes[4..8], &[0, 0, 0, 255]);
        assert_eq!(&bytes[8..12], &[0, 0, 0, 255]);
        assert_eq!(&bytes[12..16], &[255, 255, 255, 255]);
    }

    #[test]
    fn oversized_bitmap_is_invalid_not_abort() {
        let env = Envelope::from_entries(vec![MinMax::new(-0.5, 0.5); 70_000]);
        let err = BitmapRenderer::new(u32::MAX)
            .render(&env)
            .expect_err("should fail");
        assert!(matches!(
            err,
            PreviewError::InvalidDimensions {
                width: 70_000,
                height: 4_294_967_295
            }
        ));
    }

    #[test]
    fn filled_rejects_unallocatable_size() {
        let err = Bitmap::filled(u32::MAX, u32::MAX, Rgba::BLACK).expect_err("should fail");
        assert!(matches!(err, PreviewError::InvalidDimensions { .. }));
    }

    #[test]
    fn pixel_out_of_bounds() {
        let bmp = Bitmap::filled(2, 2, Rgba::BLACK).expect("bitmap");
        assert_eq!(bmp.pixel(2, 0), None);
        assert_eq!(bmp.pixel(0, 2), None);
    }
}
