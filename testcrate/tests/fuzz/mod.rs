use std::cmp::Ordering;

use rand_xoshiro::{rand_core::RngCore, Xoshiro128StarStar};
use wordseq::prelude::*;

mod cmp;
mod exchange;
mod views;

pub use cmp::cmp_identities;
pub use exchange::exchange_identities;
pub use views::{merge_identities, view_identities};

/// Biased towards fill elements so that normalization and comparison have
/// something to chew on
pub fn rand_element<T: Element>(rng: &mut Xoshiro128StarStar) -> T {
    match rng.next_u32() % 4 {
        0 => T::ZERO,
        1 => T::MAX,
        _ => T::from_u128(((rng.next_u64() as u128) << 64) | (rng.next_u64() as u128)),
    }
}

pub fn rand_body<T: Element>(rng: &mut Xoshiro128StarStar, max_len: usize) -> Vec<T> {
    let len = (rng.next_u32() as usize) % (max_len + 1);
    (0..len).map(|_| rand_element(rng)).collect()
}

pub fn rand_bool(rng: &mut Xoshiro128StarStar) -> bool {
    (rng.next_u32() & 1) != 0
}

/// The first `len` little endian bytes of the value described by `body` and
/// `appendix`, computed without going through any view machinery
pub fn reference_bytes<T: Element>(body: &[T], appendix: bool, len: usize) -> Vec<u8> {
    let fill = if appendix { u8::MAX } else { 0 };
    (0..len)
        .map(|i| match body.get(i / T::BYTES) {
            Some(x) => x.byte(i % T::BYTES),
            None => fill,
        })
        .collect()
}

/// The little endian bytes of the first `count` elements of `source`
pub fn source_bytes<S: Source>(source: &S, count: usize) -> Vec<u8> {
    let bytes = <S::Element as Element>::BYTES;
    (0..(count * bytes))
        .map(|i| source.get(i / bytes).byte(i % bytes))
        .collect()
}

/// Assembles element `j` of width `D` out of reference bytes
pub fn assemble<D: Element>(bytes: &[u8], j: usize) -> D {
    let mut x = 0u128;
    for i in 0..D::BYTES {
        x |= (bytes[j * D::BYTES + i] as u128) << (i * 8);
    }
    D::from_u128(x)
}

/// Compares two values given as byte bodies, extending the shorter one with
/// its fill
pub fn reference_cmp(
    lhs: &[u8],
    lhs_appendix: bool,
    lhs_signed: bool,
    rhs: &[u8],
    rhs_appendix: bool,
    rhs_signed: bool,
) -> Signum {
    if lhs_appendix != rhs_appendix {
        // a one appendix is either negative or unboundedly large
        return if lhs_appendix {
            if lhs_signed {
                Signum::Less
            } else {
                Signum::More
            }
        } else if rhs_signed {
            Signum::More
        } else {
            Signum::Less
        }
    }
    let len = lhs.len().max(rhs.len());
    let lhs = reference_bytes(lhs, lhs_appendix, len);
    let rhs = reference_bytes(rhs, rhs_appendix, len);
    let ordering = lhs.iter().rev().cmp(rhs.iter().rev());
    Signum::from(ordering)
}

#[track_caller]
pub fn assert_ord(signum: Signum, ordering: Ordering) {
    assert_eq!(signum.to_ordering(), ordering);
}
