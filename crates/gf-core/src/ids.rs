//! Strongly typed, zero-cost identifier wrappers.

use std::fmt;

/// Index of a particle within one simulation run.
///
/// `Copy + Ord + Hash` so it can be used as a map key and sorted collection
/// element without ceremony.  The inner integer is `pub` to allow direct
/// indexing into particle `Vec`s via `id.0 as usize`, but callers should
/// prefer the [`index`](ParticleId::index) helper for clarity.
///
/// Ids are assigned sequentially at precompute time and are stable for the
/// particle's lifetime; a renderer can key animated elements on them.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticleId(pub u32);

impl ParticleId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParticleId({})", self.0)
    }
}

impl From<ParticleId> for usize {
    #[inline(always)]
    fn from(id: ParticleId) -> usize {
        id.0 as usize
    }
}
