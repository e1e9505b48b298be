//! Random number source injected into AI decisions.
//!
//! Production code passes a seeded `ChaCha8Rng`; tests and replays can pass a
//! [`SequenceRandom`] that returns a fixed script of values.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Uniform random source in [0, 1).
pub trait RandomSource {
    /// Next uniform sample in [0, 1).
    fn next_unit(&mut self) -> f32;

    /// Uniform sample in [lo, hi).
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_unit()
    }

    /// Uniform sample in [-magnitude, magnitude).
    fn signed(&mut self, magnitude: f32) -> f32 {
        self.range(-magnitude, magnitude)
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f32) -> bool {
        self.next_unit() < p
    }
}

impl RandomSource for ChaCha8Rng {
    fn next_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRandom {
    /// Values are clamped into [0, 1). An empty list always yields 0.
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|v| v.clamp(0.0, 1.0 - f32::EPSILON))
                .collect(),
            cursor: 0,
        }
    }

    /// Number of samples drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_sequence_cycles() {
        let mut rng = SequenceRandom::new([0.1, 0.9]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.9);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_sequence_clamps_out_of_range() {
        let mut rng = SequenceRandom::new([1.5, -2.0]);
        assert!(rng.next_unit() < 1.0);
        assert_eq!(rng.next_unit(), 0.0);
    }

    #[test]
    fn test_range_and_chance() {
        let mut rng = SequenceRandom::new([0.5]);
        assert!((rng.range(10.0, 20.0) - 15.0).abs() < 1e-6);
        assert!((rng.signed(4.0)).abs() < 1e-6);
        assert!(!rng.chance(0.5));
        assert!(rng.chance(0.51));
    }

    #[test]
    fn test_chacha_in_unit_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
