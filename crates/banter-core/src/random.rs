//! Injectable randomness.
//!
//! Persona overflow, fallback phrase choice, the 60/40 mood coin, typing
//! delay and starter selection all draw from a [`Randomness`] so tests can
//! script exact outcomes instead of depending on a seed.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of random decisions.
pub trait Randomness: Send {
    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform integer in `low..=high`.
    fn between(&mut self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        let span = high - low + 1;
        low + (self.unit() * span as f64) as u64 % span
    }
}

/// Randomness shared between the engine and the session.
pub type SharedRandomness = Arc<Mutex<Box<dyn Randomness>>>;

/// Wrap `source` for sharing.
pub fn shared(source: impl Randomness + 'static) -> SharedRandomness {
    Arc::new(Mutex::new(Box::new(source)))
}

/// Pick one element uniformly. Returns `None` for an empty slice.
pub fn choose<'a, T>(rng: &mut dyn Randomness, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.index(items.len()))
}

/// [`Randomness`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng + Send> Randomness for RngSource<R> {
    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn between(&mut self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }
}
