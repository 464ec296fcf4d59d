//! `MeshId`: an opaque handle for a discovered mesh-topology variable
//!
//! Mesh contexts are keyed by identity, not by variable name: malformed
//! input may carry two meshes with the same name, and each must keep its own
//! derived facts. `MeshId` wraps a nonzero `u64`; 0 is reserved as a sentinel.

use serde::{Deserialize, Serialize};
use std::{fmt, num::NonZeroU64};

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MeshId(NonZeroU64);

impl MeshId {
    /// Creates a `MeshId` from a raw value. Returns `None` for 0.
    #[inline]
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(MeshId)
    }

    /// Id for the mesh at zero-based position `index` of a discovery pass.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        MeshId(NonZeroU64::MIN.saturating_add(index as u64))
    }

    /// Returns the raw value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for MeshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MeshId").field(&self.get()).finish()
    }
}

impl fmt::Display for MeshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(MeshId, u64);
    assert_eq_size!(Option<MeshId>, u64);
}
