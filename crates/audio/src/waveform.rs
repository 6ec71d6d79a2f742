//! Envelope generation: reduce a mono sample sequence to a fixed number of
//! min/max buckets.
//!
//! The index range `[0, len - 1]` is split into `resolution` contiguous
//! buckets with a uniform floating-point step of `(len - 1) / resolution`.
//! Bucket `i` covers the half-open range
//! `[floor(i * step), floor((i + 1) * step))`, both ends clamped to
//! `len - 1`. Because both ends use the same expression, bucket `i`'s end is
//! always bucket `i + 1`'s start.
//!
//! Buckets read disjoint slices of the input, so they could be computed in
//! parallel without synchronization.

use std::ops::Range;

use tracing::debug;
use w2p_common::{Envelope, MinMax, PreviewError, PreviewResult};

/// Sample index range covered by bucket `index`.
///
/// `len` must be at least 1 and `resolution` at least 1. The range may be
/// empty (`start == end`) when there are fewer samples than buckets.
pub fn bucket_range(len: usize, resolution: usize, index: usize) -> Range<usize> {
    let last = len.saturating_sub(1);
    let step = last as f64 / resolution as f64;
    let start = ((index as f64 * step) as usize).min(last);
    let end = (((index + 1) as f64 * step) as usize).min(last);
    start..end
}

/// Build an envelope of exactly `resolution` entries from `wav`.
///
/// Each entry holds the min and max of its bucket, clamped to
/// `[-1.0, 1.0]`. An empty bucket takes both values from the sample at its
/// start index.
pub fn build_envelope(wav: &[f32], resolution: usize) -> PreviewResult<Envelope> {
    if wav.is_empty() {
        return Err(PreviewError::EmptyInput);
    }
    if resolution == 0 {
        return Err(PreviewError::InvalidResolution(0));
    }

    let entries: Vec<MinMax> = (0..resolution)
        .map(|i| {
            let range = bucket_range(wav.len(), resolution, i);
            let first = wav[range.start];
            let (min, max) = wav[range]
                .iter()
                .fold((first, first), |(lo, hi), &s| (lo.min(s), hi.max(s)));
            MinMax::new(min, max).clamped()
        })
        .collect();

    debug!(
        samples = wav.len(),
        resolution = resolution,
        "Built waveform envelope"
    );

    Ok(Envelope::from_entries(entries))
}
