//! Word sequence integer representation library
//!
//! This is the core library of the `wordseq` system of crates. This crate is
//! strictly `no-std` and `no-alloc`, not even requiring an allocator to be
//! compiled. It supplies the borrowed representation that fixed width two's
//! complement integers and arbitrary precision integers share: a [View] over
//! a slice of [Element]s plus one appendix bit that is repeated forever past
//! the stored elements.
//!
//! Every indexed read in this crate is total. The only panicking functions are
//! the reinterpretations [View::split] and [View::merge] when given widths
//! that do not divide each other, and these have `Option` returning `try_`
//! versions.

#![no_std]
#![cfg_attr(feature = "const_support", feature(const_mut_refs))]
// We need to be certain in some places that lifetimes are being elided correctly
#![allow(clippy::needless_lifetimes)]
// There are many types whose length is not meaningfully empty
#![allow(clippy::len_without_is_empty)]
// We are using special indexing everywhere
#![allow(clippy::needless_range_loop)]
#![deny(unsafe_op_in_unsafe_fn)]

#[doc(hidden)]
pub use wordseq_internals;
pub use wordseq_internals::{Digit, Element};

pub(crate) mod data;
pub use data::{
    ChunkedInt, DisjointView, ExchangeInt, Signed, Signum, Source, Stream, StreamState,
    SuccinctInt, Unsigned, View,
};

mod logic;
pub use logic::{compare, compare_sources};

/// A `View` over the native `Digit`
pub type DigitView<'a> = View<'a, Digit>;

/// A `Stream` over a `View` of the native `Digit`
pub type DigitStream<'a> = Stream<View<'a, Digit>>;

pub mod prelude {
    pub use crate::{
        compare, ChunkedInt, Digit, DigitStream, DigitView, DisjointView, Element, ExchangeInt,
        Signed, Signum, Source, Stream, SuccinctInt, Unsigned, View,
    };
}
