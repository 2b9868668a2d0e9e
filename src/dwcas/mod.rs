/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Double-Word Compare-And-Swap
//!
//! Provides the 16-byte value type, the ordering façade over the
//! architecture backends, the alignment helpers, and the manual barriers.
//!
//! # Features
//!
//! - One hardware kernel per instruction set, selected at compile time
//! - Four ordering variants with documented success/failure ordering
//! - Guaranteed-aligned heap allocation and in-buffer placement
//! - Optional runtime alignment guard (`align-checks` feature)
//!
//! # Author
//!
//! Haixing Hu

mod aligned;
mod arch;
mod atomic_uint128;
mod barrier;
pub mod config;
mod error;
mod guard;
mod placement;
mod uint128;

pub use aligned::AlignedUint128;
pub use atomic_uint128::AtomicUint128;
pub use barrier::{
    barrier_acquire,
    barrier_full,
    barrier_release,
};
pub use config::Backend;
pub use error::Fault;
pub use placement::{
    can_place_aligned,
    place_aligned,
    place_aligned_split,
    place_aligned_with,
};
pub use uint128::Uint128;
