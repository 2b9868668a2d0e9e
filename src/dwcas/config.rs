/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Build Configuration
//!
//! Reports what was selected at compile time. Nothing here can be changed
//! at runtime; the knobs are cargo features and target features.
//!
//! | Knob                      | Effect                                        |
//! |---------------------------|-----------------------------------------------|
//! | feature `align-checks`    | null/alignment guard before every CAS         |
//! | feature `llsc`            | aarch64: LDXP/STXP kernel instead of CASP     |
//! | target feature `lse`      | aarch64 (little-endian): enables CASP kernel  |
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

/// Required alignment, in bytes, of every CAS target.
pub const ALIGNMENT: usize = 16;

/// Worst-case bytes needed to place an aligned value in a byte buffer:
/// 15 bytes of padding plus the 16-byte value.
pub const PLACEMENT_WORST_CASE: usize = ALIGNMENT - 1 + ALIGNMENT;

/// Whether the runtime alignment guard is compiled in.
pub const ALIGNMENT_CHECKS: bool = cfg!(feature = "align-checks");

/// The hardware kernel behind the CAS operations and barriers.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// x86_64 `lock cmpxchg16b`; barriers are compiler fences only.
    Cmpxchg16b,
    /// aarch64 LSE pair CAS (`casp` family); barriers are `dmb ish*`.
    Casp,
    /// aarch64 load-exclusive/store-exclusive pair loop; barriers are
    /// `dmb ish*`.
    Llsc,
    /// No kernel for this target: every CAS and barrier faults.
    Unsupported,
}

impl Backend {
    /// Returns the backend compiled into this build.
    #[inline]
    pub const fn current() -> Self {
        if cfg!(target_arch = "x86_64") {
            Backend::Cmpxchg16b
        } else if cfg!(all(
            target_arch = "aarch64",
            target_feature = "lse",
            target_endian = "little",
            not(feature = "llsc")
        )) {
            Backend::Casp
        } else if cfg!(target_arch = "aarch64") {
            Backend::Llsc
        } else {
            Backend::Unsupported
        }
    }

    /// Returns a short, stable name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Cmpxchg16b => "cmpxchg16b",
            Backend::Casp => "casp",
            Backend::Llsc => "llsc",
            Backend::Unsupported => "unsupported",
        }
    }

    /// Returns `true` if CAS and barriers are usable with this backend.
    #[inline]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Backend::Unsupported)
    }

    /// Returns `true` if the barriers emit hardware fence instructions,
    /// `false` if they are compiler fences only (or unsupported).
    #[inline]
    pub const fn has_hardware_fences(self) -> bool {
        matches!(self, Backend::Casp | Backend::Llsc)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
