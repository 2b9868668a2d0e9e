/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_dwcas::config::{
    ALIGNMENT,
    ALIGNMENT_CHECKS,
    PLACEMENT_WORST_CASE,
};
use prism3_dwcas::Backend;

#[test]
fn test_constants() {
    assert_eq!(ALIGNMENT, 16);
    assert_eq!(PLACEMENT_WORST_CASE, 31);
    assert_eq!(ALIGNMENT_CHECKS, cfg!(feature = "align-checks"));
}

#[test]
fn test_current_backend_matches_target() {
    let backend = Backend::current();

    #[cfg(target_arch = "x86_64")]
    assert_eq!(backend, Backend::Cmpxchg16b);

    #[cfg(all(target_arch = "aarch64", feature = "llsc"))]
    assert_eq!(backend, Backend::Llsc);

    #[cfg(all(target_arch = "aarch64", not(feature = "llsc")))]
    assert!(matches!(backend, Backend::Casp | Backend::Llsc));

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    assert_eq!(backend, Backend::Unsupported);

    assert_eq!(
        backend.is_supported(),
        cfg!(any(target_arch = "x86_64", target_arch = "aarch64"))
    );
}

#[test]
fn test_backend_names_and_display() {
    let all = [
        (Backend::Cmpxchg16b, "cmpxchg16b", true, false),
        (Backend::Casp, "casp", true, true),
        (Backend::Llsc, "llsc", true, true),
        (Backend::Unsupported, "unsupported", false, false),
    ];
    for (backend, name, supported, fences) in all {
        assert_eq!(backend.name(), name);
        assert_eq!(backend.to_string(), name);
        assert_eq!(backend.is_supported(), supported);
        assert_eq!(backend.has_hardware_fences(), fences);
    }
}
