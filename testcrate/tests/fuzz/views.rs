use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
use wordseq::prelude::*;

use crate::fuzz::{assemble, rand_body, rand_bool, reference_bytes};

pub fn view_identities<T: Element>(n: u32, seed: u64, max_len: usize) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..n {
        let body: Vec<T> = rand_body(&mut rng, max_len);
        let appendix = rand_bool(&mut rng);
        let x = View::new(&body, appendix);
        let fill = T::repeating(appendix);
        assert_eq!(x.fill(), fill);

        // totality
        for i in 0..(body.len() + 3) {
            assert_eq!(x.get(i), body.get(i).copied().unwrap_or(fill));
        }
        assert_eq!(x.get(usize::MAX), fill);

        // normalization
        let norm = x.normalized();
        assert!(norm.is_normalized());
        assert_eq!(norm.normalized().count(), norm.count());
        assert!(norm.count() <= x.count());
        if let Some(last) = norm.last() {
            assert_ne!(last, fill);
        }
        for i in 0..(body.len() + 2) {
            assert_eq!(norm.get(i), x.get(i));
        }
        assert_eq!(x, norm);
        assert_eq!(x.is_zero(), !appendix && norm.count() == 0);
        let floor = body.len() / 2;
        assert!(x.normalized_to(floor).count() >= floor);
        assert!(x.normalized_to(floor).count() >= norm.count());

        // declared signedness
        let signed = View::from_signed(&body);
        assert_eq!(signed.appendix(), body.last().map_or(false, |x| x.msb()));
        assert!(!View::from_unsigned(&body).appendix());

        // streams read the same thing as random access
        let mut s = x.stream();
        for i in 0..(body.len() + 2) {
            assert_eq!(s.is_on_repeat(), i >= body.len());
            assert_eq!(s.next(), x.get(i));
        }
        assert_eq!(s.state(), StreamState::Repeating);
        s.finalize();
        assert_eq!(s.next(), fill);
        assert_eq!(s.state(), StreamState::Finalized);

        #[cfg(target_endian = "little")]
        {
            let bytes = x.split::<u8>();
            assert_eq!(bytes.appendix(), appendix);
            let len = (body.len() + 1) * T::BYTES;
            let reference = reference_bytes(&body, appendix, len);
            for (i, byte) in reference.iter().enumerate() {
                assert_eq!(bytes.get(i), *byte);
            }
            let round = bytes.merge::<T>();
            assert_eq!(round.minor(), 0);
            for i in 0..(body.len() + 2) {
                assert_eq!(round.get(i), x.get(i));
            }
        }
    }
}

/// `U` must be at least as wide as `T`
pub fn merge_identities<T: Element, U: Element>(n: u32, seed: u64, max_len: usize) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..n {
        let body: Vec<T> = rand_body(&mut rng, max_len);
        let appendix = rand_bool(&mut rng);
        let x = View::new(&body, appendix).merge::<U>();
        assert_eq!(
            x.major() * U::BYTES + x.minor(),
            body.len() * T::BYTES
        );
        assert!(x.minor() < U::BYTES);
        assert_eq!(x.count(), x.major() + ((x.minor() != 0) as usize));
        let reference = reference_bytes(&body, appendix, (x.count() + 2) * U::BYTES);
        for j in 0..(x.count() + 2) {
            assert_eq!(x.get(j), assemble::<U>(&reference, j));
        }
        assert_eq!(x.get(usize::MAX), U::repeating(appendix));
        let mut s = x.stream();
        for j in 0..(x.count() + 1) {
            assert_eq!(s.next(), x.get(j));
        }
        assert!(s.is_on_repeat());
    }
}
