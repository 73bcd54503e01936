#![no_std]
#![no_main]

extern crate panic_halt;

use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};
use riscv_minimal_rt::entry;
use wordseq::prelude::*;

#[entry]
fn main() -> ! {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    let mut buf = [0u32; 8];
    for x in buf.iter_mut() {
        *x = rng.next_u32();
    }
    buf[6] |= 1;
    buf[7] = 0;

    // views and streams over a fixed buffer
    let x = View::from_signed(&buf);
    assert!(!x.appendix());
    assert_eq!(x.normalized().count(), 7);
    let mut s = x.stream();
    for i in 0..10 {
        assert_eq!(s.next(), x.get(i));
    }
    assert_eq!(s.state(), StreamState::Repeating);
    s.finalize();
    assert!(s.is_finalized());

    // merging and exchange
    let bytes = [0x11u8, 0x22, 0x33, 0x44, 0x55, 0x66];
    let y = View::new(&bytes, true).merge::<u32>();
    assert_eq!(y.get(0), 0x4433_2211);
    assert_eq!(y.get(1), 0xffff_6655);
    let z = ExchangeInt::<u32, u64>::new(&buf, false);
    assert_eq!(z.len(), 4);
    assert_eq!(z.get(0), (buf[0] as u64) | ((buf[1] as u64) << 32));
    let arr: [u16; 3] = ExchangeInt::<u8, u16>::new(&bytes, true).to_array();
    assert_eq!(arr, [0x2211, 0x4433, 0x6655]);
    let succinct = ExchangeInt::<u32, u8>::new(&[0x0102, 0, 0], false).succinct();
    assert_eq!(succinct.len(), 2);

    // comparison
    let a = View::new(&[0xffu8], true);
    let b = View::new(&[0x01u8], false);
    assert_eq!(compare(a, true, b, true), Signum::Less);
    assert_eq!(compare(a, false, b, false), Signum::More);
    assert!(Signed(a) < Signed(b));
    assert!(Unsigned(a) > Unsigned(b));

    panic!("main is not allowed to return")
}
