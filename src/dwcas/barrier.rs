/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Manual Barriers
//!
//! Stateless fences for callers who need an ordering edge outside a CAS.
//! Prefer the ordering variants of [`AtomicUint128`](crate::AtomicUint128)
//! when possible.
//!
//! | Backend       | acquire      | release      | full        |
//! |---------------|--------------|--------------|-------------|
//! | x86_64        | compiler     | compiler     | compiler    |
//! | aarch64       | `dmb ishld`  | `dmb ishst`  | `dmb ish`   |
//! | unsupported   | fault        | fault        | fault       |
//!
//! On x86_64 these only prevent compile-time reordering across the call.
//! They are not `mfence` and give no inter-core guarantee beyond the
//! platform's TSO baseline.
//!
//! # Author
//!
//! Haixing Hu

use crate::dwcas::arch::Cas128;
use crate::dwcas::arch::Selected;

/// Emits an acquire barrier.
#[inline]
pub fn barrier_acquire() {
    Selected::barrier_acquire();
}

/// Emits a release barrier.
#[inline]
pub fn barrier_release() {
    Selected::barrier_release();
}

/// Emits a full barrier.
#[inline]
pub fn barrier_full() {
    Selected::barrier_full();
}
