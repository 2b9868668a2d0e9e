/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-dwcas
//!
//! Portable 128-bit (double-word) compare-and-swap for lock-free algorithms.
//!
//! The core operations are the four ordering variants on [`AtomicUint128`],
//! each performing a single atomic read-modify-write of a contiguous 16-byte
//! value.
//!
//! ## Intended Use Cases
//!
//! - Versioned pointers (ABA mitigation via a tag word).
//! - Composite state where two 64-bit words must move together.
//! - Lock-free queues and stacks where one 128-bit CAS replaces a more
//!   expensive coordination scheme.
//!
//! ## Ordering Contracts
//!
//! | Method    | Success ordering | Failure ordering |
//! |-----------|------------------|------------------|
//! | `relaxed` | relaxed          | relaxed          |
//! | `acquire` | acquire          | relaxed          |
//! | `release` | release          | relaxed          |
//! | `acq_rel` | acquire+release  | relaxed          |
//!
//! Hardware may provide stronger ordering than requested. On x86_64 every
//! `lock cmpxchg16b` is a full barrier; on aarch64 the release-style variants
//! issue `dmb ish` before the attempt, which also orders a failed attempt.
//!
//! ## Alignment
//!
//! The target of every CAS must be 16-byte aligned. Safe references to an
//! [`AtomicUint128`] are only handed out by [`AlignedUint128::new`] and
//! [`place_aligned`], both of which guarantee alignment. Enable the
//! `align-checks` feature for a runtime guard in diagnostic builds.
//!
//! ## Example
//!
//! ```rust
//! use prism3_dwcas::{AlignedUint128, Uint128};
//!
//! let cell = AlignedUint128::new(1, 2);
//! let (prev, swapped) = cell.acq_rel(Uint128::new(1, 2), Uint128::new(3, 4));
//! assert!(swapped);
//! assert_eq!(prev, Uint128::new(1, 2));
//! assert_eq!(cell.load(), Uint128::new(3, 4));
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod dwcas;

// Re-export the public surface
pub use dwcas::{
    barrier_acquire,
    barrier_full,
    barrier_release,
    can_place_aligned,
    config,
    place_aligned,
    place_aligned_split,
    place_aligned_with,
    AlignedUint128,
    AtomicUint128,
    Backend,
    Fault,
    Uint128,
};
