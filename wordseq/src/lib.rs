//! This crate compiles all the interfaces of `wordseq_core`.
//!
//! The layer here is the representation that multi-precision integer types
//! lend their storage through: a [View] is a borrowed slice of machine words
//! plus one appendix bit that is repeated forever past the stored words, so
//! every index of every integer is defined. Arithmetic kernels drive a
//! [Stream] per operand, conversions between limb widths go through
//! [View::split], [View::merge], and the [ExchangeInt] layer, and ordering
//! goes through [compare].

#![cfg_attr(not(feature = "std"), no_std)]

pub use wordseq_core::prelude::*;
pub use wordseq_core::{compare_sources, StreamState};

pub mod prelude {
    pub use crate::*;
}
