//! Deterministic multiplicative RNG.
//!
//! Every random draw in the crate goes through this generator so that the
//! same seed reproduces the same texture bit for bit on every platform.
//! Cell-based noises create one instance per cell, seeded from the cell's
//! tiling index, so cell contents never depend on visiting order.

use rand::{RngCore, SeedableRng};

const MULTIPLIER: u32 = 3_039_177_861;

/// Multiplicative congruential generator over `u32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterministicRng {
    state: u32,
}

impl DeterministicRng {
    /// Create a new RNG. A zero seed is the generator's fixed point, so it maps to 1.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed > 0 { seed } else { 1 },
        }
    }

    /// Advance the state and return it.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER);
        self.state
    }

    /// Uniform float in `[0, 1]`.
    #[inline]
    pub fn uniform(&mut self) -> f32 {
        (self.next_u32() as f64 / u32::MAX as f64) as f32
    }

    /// Uniform float between `start` and `end`.
    #[inline]
    pub fn uniform_range(&mut self, start: f32, end: f32) -> f32 {
        self.uniform().mul_add(end - start, start)
    }

    /// Integer in `[start, end]`, rounded half up from the float draw.
    ///
    /// The endpoints get half the probability of interior values.
    #[inline]
    pub fn uniform_u32(&mut self, start: u32, end: u32) -> u32 {
        (self.uniform_range(start as f32, end as f32) + 0.5).floor() as u32
    }

    /// Poisson-distributed count (Knuth's method).
    pub fn poisson(&mut self, mean: f32) -> u32 {
        let limit = (-mean).exp();
        let mut count = 0;
        let mut product = self.uniform();
        while product > limit {
            count += 1;
            product *= self.uniform();
        }
        count
    }
}

impl RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        DeterministicRng::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let low = DeterministicRng::next_u32(self) as u64;
        let high = DeterministicRng::next_u32(self) as u64;
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = DeterministicRng::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for DeterministicRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
