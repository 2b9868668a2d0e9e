/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Faults
//!
//! Contract violations detected by this crate. None of them is recoverable:
//! every fault goes through [`fault`], which logs and panics.
//!
//! # Author
//!
//! Haixing Hu

use thiserror::Error;

/// A fatal contract violation.
///
/// These values are never returned as errors. They describe why the
/// process was stopped, and their `Display` form is the panic message.
///
/// # Author
///
/// Haixing Hu
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The CAS target pointer is null.
    #[error("AtomicUint128 target is null")]
    NullTarget,

    /// The CAS target address is not a multiple of 16.
    #[error("AtomicUint128 at {addr:#x} is not 16-byte aligned")]
    MisalignedTarget {
        /// The offending address.
        addr: usize,
    },

    /// A placement request cannot fit a 16-byte aligned value.
    #[error(
        "insufficient space to place an aligned Uint128: len={len}, offset={offset}, \
         need 31 bytes from offset"
    )]
    InsufficientBufferSpace {
        /// Length of the caller's buffer.
        len: usize,
        /// Requested starting offset.
        offset: usize,
    },

    /// No 128-bit CAS or barrier kernel exists for the build target.
    #[error("unsupported architecture: {arch}")]
    UnsupportedTarget {
        /// The target architecture name.
        arch: &'static str,
    },
}

/// Stops execution because of `fault`.
///
/// Emits a `tracing` error event, then panics with `"dwcas: <fault>"`.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fault(fault: Fault) -> ! {
    tracing::error!(%fault, "dwcas contract violation");
    panic!("dwcas: {fault}");
}
