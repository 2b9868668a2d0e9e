/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Unsupported Targets
//!
//! Builds and links everywhere, but every CAS and barrier faults on first
//! use. Nothing is read or written before the fault.
//!
//! # Author
//!
//! Haixing Hu

use std::env::consts::ARCH;

use super::Cas128;
use crate::dwcas::error::{
    fault,
    Fault,
};
use crate::dwcas::uint128::Uint128;

/// The backend for targets without a 128-bit CAS kernel.
pub(crate) struct Unsupported;

#[cold]
#[track_caller]
fn unsupported() -> ! {
    fault(Fault::UnsupportedTarget { arch: ARCH })
}

impl Cas128 for Unsupported {
    unsafe fn cas_relaxed(_: *mut Uint128, _: Uint128, _: Uint128) -> (Uint128, bool) {
        unsupported()
    }

    unsafe fn cas_acquire(_: *mut Uint128, _: Uint128, _: Uint128) -> (Uint128, bool) {
        unsupported()
    }

    unsafe fn cas_release(_: *mut Uint128, _: Uint128, _: Uint128) -> (Uint128, bool) {
        unsupported()
    }

    unsafe fn cas_acq_rel(_: *mut Uint128, _: Uint128, _: Uint128) -> (Uint128, bool) {
        unsupported()
    }

    fn barrier_acquire() {
        unsupported()
    }

    fn barrier_release() {
        unsupported()
    }

    fn barrier_full() {
        unsupported()
    }
}
