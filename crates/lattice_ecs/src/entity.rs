//! # Entity Handles
//!
//! Entities are lightweight identifiers packed into one unsigned integer:
//! - Upper half: index into the entity table
//! - Lower half: version counter for safe slot reuse
//!
//! The all-ones bit pattern is reserved as the null sentinel and is never
//! produced by allocation.

use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Fixed-width unsigned representation behind an [`Entity`] handle.
///
/// The width is a compile-time choice: `u32` (the default, 16-bit index /
/// 16-bit version) or `u64` for larger worlds. Sealed; the codec assumes a
/// 64-bit host for the `u64` repr.
pub trait HandleRepr:
    sealed::Sealed + Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static
{
    /// Total width of the handle in bits.
    const BITS: u32;

    /// Width of each packed half (index and version).
    const HALF: u32 = Self::BITS / 2;

    /// Highest dense index the table may allocate. The all-ones index is
    /// reserved so that no issued handle can ever equal [`Entity::NULL`].
    const INDEX_LIMIT: usize = ((1u64 << (Self::BITS / 2)) - 1) as usize;

    /// Highest version a slot can carry; a slot reaching it is retired.
    const VERSION_LIMIT: u32 = ((1u64 << (Self::BITS / 2)) - 1) as u32;

    /// The all-ones bit pattern, reserved as the null sentinel.
    const MAX: Self;

    /// Narrows raw bits into the repr. Bits above the repr width are dropped.
    fn from_bits(bits: u64) -> Self;

    /// The raw bit pattern widened to 64 bits.
    fn to_bits(self) -> u64;
}

impl HandleRepr for u32 {
    const BITS: u32 = 32;
    const MAX: Self = u32::MAX;

    #[inline]
    fn from_bits(bits: u64) -> Self {
        bits as Self
    }

    #[inline]
    fn to_bits(self) -> u64 {
        u64::from(self)
    }
}

impl HandleRepr for u64 {
    const BITS: u32 = 64;
    const MAX: Self = u64::MAX;

    #[inline]
    fn from_bits(bits: u64) -> Self {
        bits
    }

    #[inline]
    fn to_bits(self) -> u64 {
        self
    }
}

/// Unique identifier for an entity.
///
/// A handle refers to a logical entity only while the entity table's slot at
/// `index()` still carries `version()`; once the slot is recycled, the old
/// handle is permanently stale. Handles are plain values - copying one never
/// extends the underlying entity's lifetime.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Entity<E: HandleRepr = u32>(E);

impl<E: HandleRepr> Entity<E> {
    /// Null/invalid entity handle (all bits set).
    pub const NULL: Self = Self(E::MAX);

    /// Packs an index and a version into a handle.
    #[inline]
    #[must_use]
    pub fn from_parts(index: usize, version: u32) -> Self {
        Self(E::from_bits(((index as u64) << E::HALF) | u64::from(version)))
    }

    /// The index half: this handle's position in the entity table.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        (self.0.to_bits() >> E::HALF) as usize
    }

    /// The version half: how many times the slot had been recycled when this
    /// handle was issued.
    #[inline]
    #[must_use]
    pub fn version(self) -> u32 {
        let half_mask = (1u64 << E::HALF) - 1;
        (self.0.to_bits() & half_mask) as u32
    }

    /// A new handle with the index replaced and the version preserved.
    #[inline]
    #[must_use]
    pub fn with_index(self, index: usize) -> Self {
        Self::from_parts(index, self.version())
    }

    /// A new handle with the version replaced and the index preserved.
    #[inline]
    #[must_use]
    pub fn with_version(self, version: u32) -> Self {
        Self::from_parts(self.index(), version)
    }

    /// Checks if this handle is the null sentinel.
    #[inline]
    #[must_use]
    pub fn is_null(self) -> bool {
        self.0 == E::MAX
    }

    /// The raw packed representation.
    #[inline]
    #[must_use]
    pub fn to_bits(self) -> E {
        self.0
    }
}

impl<E: HandleRepr> Default for Entity<E> {
    fn default() -> Self {
        Self::NULL
    }
}

impl<E: HandleRepr> fmt::Debug for Entity<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("Entity(null)")
        } else {
            write!(f, "Entity({}v{})", self.index(), self.version())
        }
    }
}
