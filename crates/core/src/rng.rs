//! RNG module - uniform random piece generation
//!
//! Every draw picks one of the 7 piece kinds with equal probability,
//! independent of history. There is no bag: the same kind can come up any
//! number of times in a row.
//!
//! The generator is backed by a seeded ChaCha8 stream, so the same seed always
//! yields the same sequence.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::PieceKind;

/// Uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: ChaCha8Rng,
    seed: u64,
}

impl PieceGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a generator with a seed taken from the thread-local RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        let index = self.rng.random_range(0..PieceKind::ALL.len());
        PieceKind::ALL[index]
    }

    /// The seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Iterator for PieceGenerator {
    type Item = PieceKind;

    fn next(&mut self) -> Option<PieceKind> {
        Some(self.draw())
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
