//! Strongly-typed particle identifier.
//!
//! The newtype keeps raw `usize` loop counters from being passed
//! where an index into the particle store is expected.

use serde::{Deserialize, Serialize};

/// Index into the particle store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticleId(pub u32);

impl ParticleId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ParticleId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl std::fmt::Display for ParticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
