//! Uniform draw sources for combat checks and world generation.
//!
//! Everything probabilistic in the engine draws through [`RollSource`], so a
//! session is fully determined by its seed and a test can script the exact
//! sequence of draws it needs.

use std::collections::VecDeque;

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

pub trait RollSource {
    /// Uniform integer draw in `[0, bound)`.
    fn below(&mut self, bound: u32) -> u32;

    /// Uniform integer draw in `[0, 100)`.
    fn percent(&mut self) -> u32 {
        self.below(100)
    }

    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

/// Seeded ChaCha8 stream, the production source.
pub struct SeededRolls {
    rng: ChaCha8Rng,
}

impl SeededRolls {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl RollSource for SeededRolls {
    fn below(&mut self, bound: u32) -> u32 {
        // Modulo reduction; the bias is negligible at grid-sized bounds.
        self.rng.next_u32() % bound
    }

    fn unit(&mut self) -> f64 {
        (self.rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Replays a fixed queue of raw values, for deterministic tests.
///
/// Each engine draw consumes one value: `below(b)` yields `value % b`,
/// `unit()` yields `(value % 1000) / 1000`. When the queue runs dry the
/// fallback value is used, so a script only needs to cover the draws it
/// cares about.
pub struct ScriptedRolls {
    values: VecDeque<u64>,
    fallback: u64,
}

impl ScriptedRolls {
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        Self { values: values.into_iter().collect(), fallback: 0 }
    }

    pub fn with_fallback(values: impl IntoIterator<Item = u64>, fallback: u64) -> Self {
        Self { values: values.into_iter().collect(), fallback }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    fn take(&mut self) -> u64 {
        self.values.pop_front().unwrap_or(self.fallback)
    }
}

impl RollSource for ScriptedRolls {
    fn below(&mut self, bound: u32) -> u32 {
        (self.take() % u64::from(bound)) as u32
    }

    fn unit(&mut self) -> f64 {
        (self.take() % 1000) as f64 / 1000.0
    }
}
