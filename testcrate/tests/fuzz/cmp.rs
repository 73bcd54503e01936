use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
use wordseq::prelude::*;

use crate::fuzz::{assert_ord, rand_body, rand_bool, reference_bytes, reference_cmp};

fn bytes_of<T: Element>(body: &[T], appendix: bool) -> Vec<u8> {
    reference_bytes(body, appendix, body.len() * T::BYTES)
}

pub fn cmp_identities<T: Element>(n: u32, seed: u64, max_len: usize) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..n {
        let bodies: [Vec<T>; 3] = [
            rand_body(&mut rng, max_len),
            rand_body(&mut rng, max_len),
            rand_body(&mut rng, max_len),
        ];
        let appendices = [rand_bool(&mut rng), rand_bool(&mut rng), rand_bool(&mut rng)];
        let signs = [rand_bool(&mut rng), rand_bool(&mut rng), rand_bool(&mut rng)];
        let views = [
            View::new(&bodies[0], appendices[0]),
            View::new(&bodies[1], appendices[1]),
            View::new(&bodies[2], appendices[2]),
        ];

        for i in 0..3 {
            for j in 0..3 {
                let r = compare(views[i], signs[i], views[j], signs[j]);
                // against a byte level model
                assert_eq!(
                    r,
                    reference_cmp(
                        &bytes_of(&bodies[i], appendices[i]),
                        appendices[i],
                        signs[i],
                        &bytes_of(&bodies[j], appendices[j]),
                        appendices[j],
                        signs[j],
                    )
                );
                // antisymmetry
                let rev = compare(views[j], signs[j], views[i], signs[i]);
                assert_eq!(r, rev.reversed());
                assert_ord(rev, r.to_ordering().reverse());
                // normalization does not change the outcome
                assert_eq!(
                    compare(views[i].normalized(), signs[i], views[j], signs[j]),
                    r
                );
                assert_eq!(
                    compare(views[i], signs[i], views[j].normalized(), signs[j]),
                    r
                );
            }
            assert_eq!(compare(views[i], signs[i], views[i], signs[i]), Signum::Same);
        }

        // transitivity under a fixed signedness
        for signed in [false, true] {
            let mut sorted = views;
            sorted.sort_by(|a, b| compare(*a, signed, *b, signed).to_ordering());
            for i in 0..3 {
                for j in i..3 {
                    assert!(!compare(sorted[i], signed, sorted[j], signed).is_more());
                }
            }
        }
    }
}
