/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_dwcas::{
    can_place_aligned,
    place_aligned,
    place_aligned_split,
    place_aligned_with,
    Uint128,
};

#[test]
fn test_can_place_cases() {
    let buf = vec![0u8; 64];
    let empty = [0u8; 0];
    let short = [0u8; 30];
    let exact = [0u8; 31];
    let cases: Vec<(&str, &[u8], usize, bool)> = vec![
        ("empty slice", &empty[..], 0, false),
        ("off>len", &buf[..], buf.len() + 1, false),
        ("off==len", &buf[..], buf.len(), false),
        ("insufficient (30)", &short[..], 0, false),
        ("exact (31)", &exact[..], 0, true),
        ("sufficient", &buf[..], 0, true),
        ("boundary ok", &buf[..], buf.len() - 31, true),
        ("boundary short", &buf[..], buf.len() - 30, false),
    ];

    for (name, p, off, want) in cases {
        assert_eq!(
            can_place_aligned(p, off),
            want,
            "{name}: can_place_aligned(len={}, off={off})",
            p.len()
        );
    }
}

#[test]
#[should_panic(expected = "insufficient space")]
fn test_place_panics_on_short_buffer() {
    let mut buf = [0u8; 30];
    let _ = place_aligned(&mut buf, 0);
}

#[test]
#[should_panic(expected = "insufficient space")]
fn test_place_panics_when_offset_leaves_30_bytes() {
    let mut buf = [0u8; 31];
    let _ = place_aligned(&mut buf, 1);
}

#[test]
#[should_panic(expected = "insufficient space")]
fn test_place_panics_when_offset_past_end() {
    let mut buf = [0u8; 64];
    let _ = place_aligned(&mut buf, 65);
}

#[test]
fn test_alignment_and_bounds() {
    let mut buf = vec![0u8; 256];
    let base = buf.as_ptr() as usize;
    let end = base + buf.len();

    for off in [0usize, 1, 7, 15, 16, 31, 32, 63, 97, 128, 225, 226, 240] {
        if !can_place_aligned(&buf, off) {
            continue;
        }

        let (n, p) = place_aligned(&mut buf, off);
        let addr = p.as_ptr() as usize;
        let start = base + off;

        assert!((16..=31).contains(&n), "n out of range: {n}");
        assert_eq!(addr % 16, 0, "misaligned at off={off}");
        assert!(addr >= start, "before buf[off]: off={off}");
        assert!(addr + 16 <= end, "out of bounds: off={off}");

        let pad = addr - start;
        assert!(pad <= 15);
        assert_eq!(n, pad + 16);
    }
}

#[test]
fn test_consecutive_placements_do_not_overlap() {
    let mut buf = vec![0u8; 200];
    let mut off = 3;
    let mut addrs = vec![];

    while can_place_aligned(&buf, off) {
        let (n, slot) = place_aligned_with(&mut buf, off, Uint128::new(off as u64, 0));
        addrs.push(slot.as_ptr() as usize);
        off += n;
    }

    assert!(addrs.len() >= 5);
    for pair in addrs.windows(2) {
        assert!(pair[1] >= pair[0] + 16);
    }
}

#[test]
fn test_place_with_initialises_and_writes_buffer() {
    let mut buf = vec![0u8; 64];
    let (n, slot) = place_aligned_with(&mut buf, 0, Uint128::new(0x0102_0304_0506_0708, 0));
    assert_eq!(slot.load(), Uint128::new(0x0102_0304_0506_0708, 0));
    assert!(slot.acq_rel(Uint128::new(0x0102_0304_0506_0708, 0), Uint128::new(1, u64::MAX)).1);

    let pad = n - 16;
    let lo = u64::from_ne_bytes(buf[pad..pad + 8].try_into().unwrap());
    let hi = u64::from_ne_bytes(buf[pad + 8..pad + 16].try_into().unwrap());
    assert_eq!((lo, hi), (1, u64::MAX));
    assert!(buf[..pad].iter().all(|&b| b == 0));
}

#[test]
fn test_place_reinterprets_existing_bytes() {
    let mut buf = vec![0xffu8; 64];
    let (_, slot) = place_aligned(&mut buf, 0);
    assert_eq!(slot.load(), Uint128::new(u64::MAX, u64::MAX));
}

#[test]
fn test_split_packs_several_live_values() {
    let mut buf = [0u8; 128];
    let (a, rest) = place_aligned_split(&mut buf, 1, Uint128::new(1, 0));
    let (b, rest) = place_aligned_split(rest, 0, Uint128::new(2, 0));
    let (c, rest) = place_aligned_split(rest, 0, Uint128::new(3, 0));

    let addrs = [a.as_ptr() as usize, b.as_ptr() as usize, c.as_ptr() as usize];
    for pair in addrs.windows(2) {
        assert!(pair[1] >= pair[0] + 16);
    }
    assert!(addrs.iter().all(|addr| addr % 16 == 0));

    // All three stay usable at once.
    assert!(a.relaxed(Uint128::new(1, 0), Uint128::new(1, 1)).1);
    assert!(b.acquire(Uint128::new(2, 0), Uint128::new(2, 1)).1);
    assert!(c.release(Uint128::new(3, 0), Uint128::new(3, 1)).1);
    assert_eq!(a.load(), Uint128::new(1, 1));
    assert_eq!(b.load(), Uint128::new(2, 1));
    assert_eq!(c.load(), Uint128::new(3, 1));
    assert!(rest.len() < 128 - 48);
}

#[test]
fn test_split_values_shared_across_threads() {
    let mut buf = [0u8; 96];
    let (a, rest) = place_aligned_split(&mut buf, 0, Uint128::ZERO);
    let (b, _) = place_aligned_split(rest, 0, Uint128::ZERO);
    let (a, b) = (&*a, &*b);

    std::thread::scope(|s| {
        for cell in [a, b] {
            for _ in 0..4 {
                s.spawn(move || {
                    for _ in 0..1_000 {
                        let mut current = cell.load();
                        loop {
                            let next = Uint128::new(current.lo + 1, current.hi);
                            match cell.acq_rel(current, next) {
                                (_, true) => break,
                                (prev, false) => current = prev,
                            }
                        }
                    }
                });
            }
        }
    });

    assert_eq!(a.load(), Uint128::new(4_000, 0));
    assert_eq!(b.load(), Uint128::new(4_000, 0));
}

#[test]
#[should_panic(expected = "insufficient space")]
fn test_split_panics_on_short_tail() {
    let mut buf = [0u8; 40];
    let (_, rest) = place_aligned_split(&mut buf, 0, Uint128::ZERO);
    let _ = place_aligned_split(rest, 0, Uint128::ZERO);
}
