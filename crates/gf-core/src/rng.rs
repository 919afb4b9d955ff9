//! Deterministic per-run RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each engine run owns exactly one `SimRng`, seeded from the run
//! configuration.  All trajectory randomness (lounge choice, destination
//! jitter, control-point offsets, walking speeds, spawn offsets, sizes) is
//! drawn from this single stream during the precompute pass, so the same
//! seed always reproduces the same run frame-for-frame.  The frame-update
//! path draws nothing — randomness is front-loaded at `start`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Draw a fresh seed from the thread-local entropy source.
///
/// Used when a run does not need to be reproducible (the default for
/// interactive sessions); record the value if you want to replay the run.
pub fn entropy_seed() -> u64 {
    rand::random()
}

/// Run-level RNG for trajectory generation.
///
/// Wraps `SmallRng` — the fastest `rand` generator, fine for visual variance
/// (this is not cryptographic material).
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically.  The same seed always produces the same
    /// sequence.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed
    /// type (`f32` in `[0, 1)`, any integer width, …).
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
