//! Deterministic pseudo-random number generation for particle placement.

/// Small xorshift32 generator.
///
/// The effect only needs cheap, repeatable jitter; seeding with a fixed value
/// makes every spawn decision and tween target reproducible under test.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u32,
}

impl Rng {
    /// Create a generator from a seed (zero is remapped, xorshift has a fixed
    /// point at zero).
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Next value in [0, 1].
    pub fn next(&mut self) -> f32 {
        // xorshift32
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        (self.state as f32) / (u32::MAX as f32)
    }

    /// Uniform draw in [min, max].
    pub fn next_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next() * (max - min)
    }

    /// Bernoulli trial: true with probability `p`. A probability of zero (or
    /// less) never fires.
    pub fn chance(&mut self, p: f32) -> bool {
        p > 0.0 && self.next() <= p
    }
}
