/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

/// Macro to generate the same CAS test suite for one ordering variant.
#[macro_export]
macro_rules! test_cas_variant {
    ($method:ident, $test_mod:ident) => {
        mod $test_mod {
            use prism3_dwcas::{
                place_aligned_with,
                AlignedUint128,
                Uint128,
            };
            use std::sync::Arc;
            use std::thread;

            #[test]
            fn test_success() {
                let cell = AlignedUint128::new(1, 2);
                let (prev, swapped) =
                    cell.$method(Uint128::new(1, 2), Uint128::new(3, 4));
                assert!(swapped);
                assert_eq!(prev, Uint128::new(1, 2));
                assert_eq!(cell.load(), Uint128::new(3, 4));
            }

            #[test]
            fn test_failure_on_low_word_mismatch() {
                let cell = AlignedUint128::new(1, 2);
                let (prev, swapped) =
                    cell.$method(Uint128::new(0, 2), Uint128::new(3, 4));
                assert!(!swapped);
                assert_eq!(prev, Uint128::new(1, 2));
                assert_eq!(cell.load(), Uint128::new(1, 2));
            }

            #[test]
            fn test_failure_on_high_word_mismatch() {
                let cell = AlignedUint128::new(1, 2);
                let (prev, swapped) =
                    cell.$method(Uint128::new(1, 0), Uint128::new(3, 4));
                assert!(!swapped);
                assert_eq!(prev, Uint128::new(1, 2));
                assert_eq!(cell.load(), Uint128::new(1, 2));
            }

            #[test]
            fn test_prev_converges_without_extra_load() {
                let cell = AlignedUint128::new(5, 6);
                let desired = Uint128::new(7, 8);

                let (prev, swapped) = cell.$method(Uint128::ZERO, desired);
                assert!(!swapped);
                assert_eq!(prev, Uint128::new(5, 6));

                let (prev2, swapped2) = cell.$method(prev, desired);
                assert!(swapped2);
                assert_eq!(prev2, prev);
                assert_eq!(cell.load(), desired);
            }

            #[test]
            fn test_round_trip_restores_original() {
                let cell = AlignedUint128::new(10, 20);
                let old = Uint128::new(10, 20);
                let new = Uint128::new(30, 40);

                assert_eq!(cell.$method(old, new), (old, true));
                assert_eq!(cell.$method(new, old), (new, true));
                assert_eq!(cell.load(), old);
            }

            #[test]
            fn test_extreme_bit_patterns() {
                let max = Uint128::new(u64::MAX, u64::MAX);
                let cell = AlignedUint128::new(u64::MAX, u64::MAX);
                assert!(cell.$method(max, Uint128::new(0, u64::MAX)).1);
                assert!(cell.$method(Uint128::new(0, u64::MAX), Uint128::new(u64::MAX, 0)).1);
                assert_eq!(cell.load(), Uint128::new(u64::MAX, 0));
            }

            #[test]
            fn test_on_placed_value() {
                let mut buf = vec![0u8; 96];
                let (_, slot) = place_aligned_with(&mut buf, 5, Uint128::new(1, 1));
                let (prev, swapped) = slot.$method(Uint128::new(1, 1), Uint128::new(2, 2));
                assert!(swapped);
                assert_eq!(prev, Uint128::new(1, 1));
                assert_eq!(*slot.get_mut(), Uint128::new(2, 2));
            }

            #[test]
            fn test_single_winner() {
                const THREADS: usize = 8;
                let cell = Arc::new(AlignedUint128::new(0, 0));
                let mut handles = vec![];

                for i in 0..THREADS {
                    let cell = cell.clone();
                    let handle = thread::spawn(move || {
                        let desired = Uint128::new(i as u64 + 1, !(i as u64));
                        let (prev, swapped) = cell.$method(Uint128::ZERO, desired);
                        (swapped, prev)
                    });
                    handles.push(handle);
                }

                let results: Vec<(bool, Uint128)> =
                    handles.into_iter().map(|h| h.join().unwrap()).collect();
                let winners = results.iter().filter(|(swapped, _)| *swapped).count();
                assert_eq!(winners, 1);

                // Losers observed either the pre-image or the winner's value.
                let final_value = cell.load();
                for (swapped, prev) in results {
                    if swapped {
                        assert_eq!(prev, Uint128::ZERO);
                    } else {
                        assert_eq!(prev, final_value);
                    }
                }
            }
        }
    };
}
