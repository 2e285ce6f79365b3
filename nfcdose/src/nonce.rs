// nfcdose/src/nonce.rs

//! Nonce sources for the common command data block.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the 16-bit request nonce placed in the common command block.
pub trait NonceSource: Send {
    /// Nonce for the next command frame.
    fn next_nonce(&mut self) -> u16;
}

/// Default source: uniformly random values.
#[derive(Debug)]
pub struct RandomNonce {
    rng: StdRng,
}

impl RandomNonce {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceSource for RandomNonce {
    fn next_nonce(&mut self) -> u16 {
        self.rng.r#gen()
    }
}

/// Always the same value. Lets tests predict the exact frame bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedNonce(pub u16);

impl NonceSource for FixedNonce {
    fn next_nonce(&mut self) -> u16 {
        self.0
    }
}
