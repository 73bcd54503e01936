use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
use wordseq::prelude::*;

use crate::fuzz::{assemble, rand_body, rand_bool, reference_bytes, source_bytes};

pub fn exchange_identities<S: Element, D: Element>(n: u32, seed: u64, max_len: usize) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    for _ in 0..n {
        let body: Vec<S> = rand_body(&mut rng, max_len);
        let is_signed = rand_bool(&mut rng);
        let x = ExchangeInt::<S, D>::new(&body, is_signed);
        let appendix = is_signed && body.last().map_or(false, |x| x.msb());
        let fill = D::repeating(appendix);
        assert_eq!(x.appendix(), appendix);
        assert_eq!(x.fill(), fill);
        let total = body.len() * S::BYTES;
        assert_eq!(x.len(), (total + D::BYTES - 1) / D::BYTES);

        // rechunking commutes with the byte level reference
        let reference = reference_bytes(&body, appendix, (x.len() + 2) * D::BYTES);
        for j in 0..(x.len() + 2) {
            assert_eq!(x.get(j), assemble::<D>(&reference, j));
        }
        let chunks = ChunkedInt::<S, D>::new(View::new(&body, appendix));
        for j in 0..(x.len() + 2) {
            assert_eq!(chunks.get(j), x.get(j));
        }
        let mut buf = vec![D::ZERO; x.len() + 1];
        x.copy_to(&mut buf);
        for (j, y) in buf.iter().enumerate() {
            assert_eq!(*y, x.get(j));
        }
        assert_eq!(x.iter().count(), x.len());

        // exchanging a normalized view keeps its appendix
        let norm = View::new(&body, appendix).normalized();
        let from_norm = ExchangeInt::<S, D>::from_view(norm, is_signed);
        assert_eq!(from_norm.appendix(), appendix);
        for j in 0..(x.len() + 2) {
            assert_eq!(from_norm.get(j), x.get(j));
        }

        // succinct form
        let y = x.succinct();
        assert!(y.len() <= x.len());
        assert_eq!(y.sign(), appendix);
        assert_eq!(y.is_signed(), is_signed);
        if y.len() > 0 {
            assert_ne!(y.get(y.len() - 1), fill);
        }
        for j in 0..(x.len() + 2) {
            assert_eq!(y.get(j), x.get(j));
        }
        assert_eq!(
            compare_sources(&x, is_signed, &y, is_signed),
            Signum::Same
        );

        // the succinct bytes do not depend on the destination width
        let fill_byte = if appendix { u8::MAX } else { 0 };
        let mut wide = source_bytes(&y, y.len());
        while wide.last() == Some(&fill_byte) {
            wide.pop();
        }
        let narrow = ExchangeInt::<S, u8>::new(&body, is_signed).succinct();
        assert_eq!(narrow.iter().collect::<Vec<_>>(), wide);
    }
}
