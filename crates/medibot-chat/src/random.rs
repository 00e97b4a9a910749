//! Injectable randomness.
//!
//! Greeting choice, default-answer choice and the follow-up coin flip all
//! go through [`RandomSource`] so a conversation can be replayed exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool;
}

/// Pick one item uniformly. `None` only for an empty slice.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.pick(items.len()))
}

/// Clamp a probability into what `gen_bool` accepts. NaN counts as never.
fn probability(p: f64) -> Option<f64> {
    if p.is_nan() || p <= 0.0 {
        None
    } else {
        Some(p.min(1.0))
    }
}

/// Thread-local OS-seeded generator. The production default.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn chance(&mut self, p: f64) -> bool {
        probability(p).is_some_and(|p| rand::thread_rng().gen_bool(p))
    }
}

/// Deterministic generator for reproducible transcripts (`--seed`).
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    fn chance(&mut self, p: f64) -> bool {
        match probability(p) {
            Some(p) => self.0.gen_bool(p),
            None => false,
        }
    }
}
