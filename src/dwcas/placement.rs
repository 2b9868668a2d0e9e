/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # In-Buffer Placement
//!
//! Carves a 16-byte aligned [`AtomicUint128`] out of a caller-provided byte
//! buffer. From any starting offset the worst case needs 31 bytes: up to 15
//! bytes of padding to reach a 16-byte boundary, plus the 16-byte value.
//!
//! # Author
//!
//! Haixing Hu

use crate::dwcas::atomic_uint128::AtomicUint128;
use crate::dwcas::config::{
    ALIGNMENT,
    PLACEMENT_WORST_CASE,
};
use crate::dwcas::error::{
    fault,
    Fault,
};
use crate::dwcas::uint128::Uint128;

/// Reports whether `buf` has room from `offset` to place a 16-byte aligned
/// value at or after `buf[offset]`.
///
/// True iff `offset <= buf.len()` and `buf.len() - offset >= 31`.
///
/// # Example
///
/// ```rust
/// use prism3_dwcas::can_place_aligned;
///
/// assert!(!can_place_aligned(&[0u8; 30], 0));
/// assert!(can_place_aligned(&[0u8; 31], 0));
/// ```
#[inline]
pub fn can_place_aligned(buf: &[u8], offset: usize) -> bool {
    if offset > buf.len() {
        return false;
    }
    buf.len() - offset >= PLACEMENT_WORST_CASE
}

/// Places a 16-byte aligned [`AtomicUint128`] inside `buf`, at the first
/// 16-byte boundary at or after `buf[offset]`.
///
/// The bytes of the placed region are reinterpreted as-is; use
/// [`place_aligned_with`] or [`AtomicUint128::get_mut`] to initialise them.
///
/// # Parameters
///
/// * `buf` - The backing buffer; it stays borrowed while the value lives.
/// * `offset` - Where to start searching for an aligned address.
///
/// # Returns
///
/// `(consumed, value)`, where `consumed` (16..=31) is the number of bytes
/// from `offset` covered by the padding and the value.
///
/// # Panics
///
/// Faults if [`can_place_aligned`] is false for `buf` and `offset`. There
/// is no partial placement.
///
/// # Example
///
/// ```rust
/// use prism3_dwcas::{place_aligned, Uint128};
///
/// let mut buf = [0u8; 64];
/// let (consumed, slot) = place_aligned(&mut buf, 3);
/// assert!((16..=31).contains(&consumed));
/// assert_eq!(slot.as_ptr() as usize % 16, 0);
/// *slot.get_mut() = Uint128::new(1, 2);
/// assert!(slot.relaxed(Uint128::new(1, 2), Uint128::new(3, 4)).1);
/// ```
#[track_caller]
pub fn place_aligned(buf: &mut [u8], offset: usize) -> (usize, &mut AtomicUint128) {
    if !can_place_aligned(buf, offset) {
        fault(Fault::InsufficientBufferSpace {
            len: buf.len(),
            offset,
        });
    }

    // SAFETY: `offset <= buf.len()` was checked above.
    let start = unsafe { buf.as_mut_ptr().add(offset) };
    let pad = padding(start as usize);
    tracing::trace!(offset, pad, "placed aligned Uint128 in buffer");

    // SAFETY: at least 31 bytes remain from `start` and `pad <= 15`, so the
    // 16 bytes at `start + pad` are inside `buf`. The address is 16-byte
    // aligned, every bit pattern is a valid `Uint128`, and the exclusive
    // borrow of `buf` is carried by the returned reference.
    let value = unsafe { &mut *start.add(pad).cast::<AtomicUint128>() };
    (pad + ALIGNMENT, value)
}

/// Places a 16-byte aligned value like [`place_aligned`] and initialises it
/// with `init`.
///
/// # Panics
///
/// Faults if [`can_place_aligned`] is false for `buf` and `offset`.
#[track_caller]
pub fn place_aligned_with(
    buf: &mut [u8],
    offset: usize,
    init: Uint128,
) -> (usize, &mut AtomicUint128) {
    let (consumed, value) = place_aligned(buf, offset);
    *value.get_mut() = init;
    (consumed, value)
}

/// Places an initialised 16-byte aligned value like [`place_aligned_with`]
/// and hands back the bytes that follow it.
///
/// [`place_aligned`] keeps the whole buffer borrowed, so only one placed
/// value can be live per borrow. Splitting off the tail lets several values
/// be packed into one buffer and used at the same time.
///
/// # Returns
///
/// `(value, rest)`, where `rest` starts right after the 16 placed bytes.
///
/// # Panics
///
/// Faults if [`can_place_aligned`] is false for `buf` and `offset`.
///
/// # Example
///
/// ```rust
/// use prism3_dwcas::{place_aligned_split, Uint128};
///
/// let mut buf = [0u8; 96];
/// let (first, rest) = place_aligned_split(&mut buf, 1, Uint128::new(1, 0));
/// let (second, _) = place_aligned_split(rest, 0, Uint128::new(2, 0));
/// assert!(first.relaxed(Uint128::new(1, 0), Uint128::new(1, 1)).1);
/// assert!(second.relaxed(Uint128::new(2, 0), Uint128::new(2, 1)).1);
/// ```
#[track_caller]
pub fn place_aligned_split(
    buf: &mut [u8],
    offset: usize,
    init: Uint128,
) -> (&mut AtomicUint128, &mut [u8]) {
    if !can_place_aligned(buf, offset) {
        fault(Fault::InsufficientBufferSpace {
            len: buf.len(),
            offset,
        });
    }

    let window = &mut buf[offset..];
    let pad = padding(window.as_ptr() as usize);
    let (head, rest) = window.split_at_mut(pad + ALIGNMENT);
    tracing::trace!(offset, pad, rest = rest.len(), "placed aligned Uint128 with tail");

    // SAFETY: `head[pad..]` is exactly 16 bytes starting on a 16-byte
    // boundary, every bit pattern is a valid `Uint128`, and the exclusive
    // borrow of those bytes is carried by the returned reference.
    let value = unsafe { &mut *head[pad..].as_mut_ptr().cast::<AtomicUint128>() };
    *value.get_mut() = init;
    (value, rest)
}

/// Bytes needed to advance `addr` to the next 16-byte boundary.
#[inline]
const fn padding(addr: usize) -> usize {
    addr.wrapping_neg() & (ALIGNMENT - 1)
}
