/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # 128-bit Value
//!
//! The plain 16-byte value exchanged by the compare-and-swap operations.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

/// A 16-byte value made of two 64-bit words.
///
/// Layout is stable and contiguous in memory:
///
/// ```text
/// offset 0: lo
/// offset 8: hi
/// ```
///
/// There is no padding and no implicit tag bits. Each word uses the native
/// integer representation of the host.
///
/// This type is only the *value*; the shared, atomically updated location
/// is [`AtomicUint128`](crate::AtomicUint128).
///
/// # Example
///
/// ```rust
/// use prism3_dwcas::Uint128;
///
/// let v = Uint128::new(0xdead, 7);
/// assert_eq!(v.lo, 0xdead);
/// assert_eq!(v.hi, 7);
/// assert_eq!(Uint128::from(v.into_u128()), v);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Uint128 {
    /// The word at the lower address.
    pub lo: u64,
    /// The word at the higher address.
    pub hi: u64,
}

impl Uint128 {
    /// The all-zero value.
    pub const ZERO: Self = Self { lo: 0, hi: 0 };

    /// Creates a value from its two words.
    ///
    /// # Parameters
    ///
    /// * `lo` - The word stored at the lower address.
    /// * `hi` - The word stored at the higher address.
    #[inline]
    pub const fn new(lo: u64, hi: u64) -> Self {
        Self { lo, hi }
    }

    /// Packs the two words into a `u128`, with `lo` as the low 64 bits.
    #[inline]
    pub const fn into_u128(self) -> u128 {
        ((self.hi as u128) << 64) | self.lo as u128
    }

    /// Splits a `u128` into two words, the low 64 bits becoming `lo`.
    #[inline]
    pub const fn from_u128(value: u128) -> Self {
        Self {
            lo: value as u64,
            hi: (value >> 64) as u64,
        }
    }
}

impl From<(u64, u64)> for Uint128 {
    #[inline]
    fn from((lo, hi): (u64, u64)) -> Self {
        Self::new(lo, hi)
    }
}

impl From<u128> for Uint128 {
    #[inline]
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<Uint128> for u128 {
    #[inline]
    fn from(value: Uint128) -> Self {
        value.into_u128()
    }
}

impl fmt::Debug for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uint128")
            .field("lo", &format_args!("{:#x}", self.lo))
            .field("hi", &format_args!("{:#x}", self.hi))
            .finish()
    }
}
