//! Core envelope types.

use serde::{Deserialize, Serialize};

/// Amplitude range covered by one time bucket.
///
/// Values are in `[-1.0, 1.0]` with `min <= max` once produced by the
/// envelope builder or the `.prev` decoder.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MinMax {
    pub min: f32,
    pub max: f32,
}

impl MinMax {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp both ends to `[-1.0, 1.0]`.
    pub fn clamped(self) -> Self {
        Self {
            min: self.min.clamp(-1.0, 1.0),
            max: self.max.clamp(-1.0, 1.0),
        }
    }

    /// Peak-to-peak span of the bucket.
    pub fn span(self) -> f32 {
        self.max - self.min
    }
}

impl From<(f32, f32)> for MinMax {
    fn from((min, max): (f32, f32)) -> Self {
        Self { min, max }
    }
}

/// Fixed-length sequence of min/max pairs, one per bucket, left to right in time.
///
/// The length is fixed at construction; there is no way to push or remove
/// entries afterward.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    entries: Vec<MinMax>,
}

impl Envelope {
    pub fn from_entries(entries: Vec<MinMax>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MinMax] {
        &self.entries
    }

    /// Number of buckets (the preview resolution).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<MinMax> {
        self.entries.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MinMax> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<MinMax> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Envelope {
    type Item = &'a MinMax;
    type IntoIter = std::slice::Iter<'a, MinMax>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_limits_range() {
        let mm = MinMax::new(-1.2, 1.0000001).clamped();
        assert_eq!(mm, MinMax::new(-1.0, 1.0));

        let mm = MinMax::new(-0.25, 0.5).clamped();
        assert_eq!(mm, MinMax::new(-0.25, 0.5));
    }

    #[test]
    fn span_of_full_scale() {
        assert!((MinMax::new(-1.0, 1.0).span() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn envelope_accessors() {
        let env = Envelope::from_entries(vec![(-0.5, 0.5).into(), MinMax::new(0.0, 0.1)]);
        assert_eq!(env.len(), 2);
        assert!(!env.is_empty());
        assert_eq!(env.get(0), Some(MinMax::new(-0.5, 0.5)));
        assert_eq!(env.get(2), None);
        assert_eq!(env.iter().count(), 2);
        assert_eq!(env.into_entries().len(), 2);
    }
}
