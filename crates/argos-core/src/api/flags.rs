// Copyright 2026 argos
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Flag sets for buffer storage creation and memory mapping.
//!
//! The bit values are this crate's own; the backend translates each set
//! into the native bitfield.

/// Flags describing an immutable buffer allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StorageFlags {
    bits: u32,
}

impl StorageFlags {
    /// No capabilities beyond server-side copies.
    pub const NONE: Self = Self { bits: 0 };
    /// The allocation may be updated through `sub_data` after creation.
    pub const DYNAMIC_STORAGE: Self = Self { bits: 1 << 0 };
    /// The allocation may be mapped for reading.
    pub const MAP_READ: Self = Self { bits: 1 << 1 };
    /// The allocation may be mapped for writing.
    pub const MAP_WRITE: Self = Self { bits: 1 << 2 };
    /// The allocation may stay mapped while the driver uses it.
    pub const MAP_PERSISTENT: Self = Self { bits: 1 << 3 };
    /// Persistent maps are kept coherent without explicit flushes.
    pub const MAP_COHERENT: Self = Self { bits: 1 << 4 };
    /// Hint to place the allocation in client memory.
    pub const CLIENT_STORAGE: Self = Self { bits: 1 << 5 };

    /// Creates a set from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    /// Returns the raw bits.
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Combines two sets.
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Checks whether every bit of `other` is set in `self`.
    pub const fn contains(&self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Checks whether no bits are set.
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl std::ops::BitOr for StorageFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for StorageFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

/// Flags describing a ranged buffer mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MapAccessFlags {
    bits: u32,
}

impl MapAccessFlags {
    /// The mapping will be read.
    pub const READ: Self = Self { bits: 1 << 0 };
    /// The mapping will be written.
    pub const WRITE: Self = Self { bits: 1 << 1 };
    /// The mapping stays valid while the driver uses the buffer.
    pub const PERSISTENT: Self = Self { bits: 1 << 2 };
    /// The mapping is kept coherent without explicit flushes.
    pub const COHERENT: Self = Self { bits: 1 << 3 };
    /// Previous contents of the mapped range may be discarded.
    pub const INVALIDATE_RANGE: Self = Self { bits: 1 << 4 };
    /// Previous contents of the whole buffer may be discarded.
    pub const INVALIDATE_BUFFER: Self = Self { bits: 1 << 5 };
    /// Modified ranges are announced explicitly via flush.
    pub const FLUSH_EXPLICIT: Self = Self { bits: 1 << 6 };
    /// The driver does not synchronize pending operations before mapping.
    pub const UNSYNCHRONIZED: Self = Self { bits: 1 << 7 };

    /// Creates a set from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    /// Returns the raw bits.
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Combines two sets.
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Checks whether every bit of `other` is set in `self`.
    pub const fn contains(&self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Checks whether no bits are set.
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl std::ops::BitOr for MapAccessFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for MapAccessFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_flags_compose() {
        let flags = StorageFlags::MAP_READ | StorageFlags::MAP_WRITE;
        assert!(flags.contains(StorageFlags::MAP_READ));
        assert!(flags.contains(StorageFlags::MAP_WRITE));
        assert!(!flags.contains(StorageFlags::MAP_PERSISTENT));
        assert!(StorageFlags::NONE.is_empty());
    }

    #[test]
    fn map_access_flags_compose() {
        let mut flags = MapAccessFlags::WRITE;
        flags |= MapAccessFlags::FLUSH_EXPLICIT;
        assert!(flags.contains(MapAccessFlags::WRITE | MapAccessFlags::FLUSH_EXPLICIT));
        assert!(!flags.contains(MapAccessFlags::READ));
    }
}
