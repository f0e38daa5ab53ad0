// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex ID.
///
/// Vertices of a graph of order `n` are numbered densely `1..=n`, matching the
/// numbering used in graph files. [`Vid::slot`] gives the zero-based index for
/// array-backed state.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vid(u32);

impl Vid {
    /// Creates a vertex ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is zero; vertex numbering starts at 1.
    pub fn new(id: u32) -> Self {
        assert!(id != 0, "Vid numbering starts at 1");
        Self(id)
    }

    /// Vertex ID for a zero-based slot.
    pub fn from_slot(slot: usize) -> Self {
        Self(slot as u32 + 1)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Zero-based index of this vertex.
    #[inline]
    pub fn slot(&self) -> usize {
        (self.0 - 1) as usize
    }

    /// Iterates `1..=order` in increasing order.
    ///
    /// `order` saturates at `u32::MAX`; storages refuse larger graphs.
    pub fn range(order: usize) -> impl Iterator<Item = Vid> {
        let last = u32::try_from(order).unwrap_or(u32::MAX);
        (1..=last).map(Vid)
    }
}

impl From<u32> for Vid {
    fn from(val: u32) -> Self {
        Self::new(val)
    }
}

impl fmt::Debug for Vid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vid({})", self.0)
    }
}

impl fmt::Display for Vid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
