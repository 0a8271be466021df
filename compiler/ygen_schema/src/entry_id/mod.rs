//! Entry IDs for the flat schema arena.

use std::fmt;

/// Index into the schema entry arena.
///
/// # Design
/// Entries reference each other by index rather than by pointer:
/// - Memory: 4 bytes per link
/// - Equality: O(1) integer compare
/// - No reference cycles between parents and children
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct EntryId(u32);

impl EntryId {
    /// Create a new `EntryId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        EntryId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryId({})", self.0)
    }
}
