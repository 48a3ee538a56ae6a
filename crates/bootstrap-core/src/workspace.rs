//! Reusable buffers for bootstrap resampling
//!
//! A resample is built from a fresh set of indices on every bootstrap
//! iteration. The workspace keeps the index and value buffers alive between
//! iterations so a bootstrap run allocates them once.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Index and value buffers for drawing resamples with replacement
#[derive(Debug, Default, Clone)]
pub struct ResampleWorkspace {
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl ResampleWorkspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workspace with room for resamples of `size` values
    pub fn with_capacity(size: usize) -> Self {
        Self {
            indices: Vec::with_capacity(size),
            values: Vec::with_capacity(size),
        }
    }

    /// Fill the index buffer with `n_samples` indices drawn uniformly from `[0, n_samples)`
    ///
    /// Leaves the buffer empty when `n_samples` is zero.
    pub fn generate_indices<R: Rng + ?Sized>(&mut self, rng: &mut R, n_samples: usize) -> &[usize] {
        self.indices.clear();
        if n_samples == 0 {
            return &self.indices;
        }

        let dist = Uniform::new(0, n_samples);
        self.indices.extend((0..n_samples).map(|_| dist.sample(rng)));
        &self.indices
    }

    /// Draw one resample of `source` with replacement
    ///
    /// The returned slice has the same length as `source` and is overwritten
    /// by the next call.
    pub fn resample<R: Rng + ?Sized>(&mut self, source: &[f64], rng: &mut R) -> &[f64] {
        self.generate_indices(rng, source.len());

        self.values.clear();
        self.values.extend(self.indices.iter().map(|&idx| {
            debug_assert!(idx < source.len(), "Index {idx} out of bounds");
            source[idx]
        }));
        &self.values
    }

    /// Indices used for the most recent resample
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomSource;

    #[test]
    fn test_indices_in_range() {
        let mut ws = ResampleWorkspace::new();
        let mut rng = RandomSource::seeded(42);

        let indices = ws.generate_indices(&mut rng, 7);
        assert_eq!(indices.len(), 7);
        assert!(indices.iter().all(|&i| i < 7));
    }

    #[test]
    fn test_zero_samples() {
        let mut ws = ResampleWorkspace::new();
        let mut rng = RandomSource::seeded(42);
        assert!(ws.generate_indices(&mut rng, 0).is_empty());
        assert!(ws.resample(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_resample_matches_indices() {
        let source = vec![10.0, 20.0, 30.0, 40.0];
        let mut ws = ResampleWorkspace::with_capacity(source.len());
        let mut rng = RandomSource::seeded(3);

        let resampled = ws.resample(&source, &mut rng).to_vec();
        let expected: Vec<f64> = ws.indices().iter().map(|&i| source[i]).collect();
        assert_eq!(resampled, expected);
    }

    #[test]
    fn test_buffer_reuse_keeps_length() {
        let source = vec![1.0, 2.0, 3.0];
        let mut ws = ResampleWorkspace::new();
        let mut rng = RandomSource::seeded(11);

        for _ in 0..10 {
            assert_eq!(ws.resample(&source, &mut rng).len(), 3);
        }
    }

    #[test]
    fn test_all_indices_reachable() {
        let mut ws = ResampleWorkspace::new();
        let mut rng = RandomSource::seeded(8);
        let mut seen = [false; 5];

        for _ in 0..200 {
            for &i in ws.generate_indices(&mut rng, 5) {
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
