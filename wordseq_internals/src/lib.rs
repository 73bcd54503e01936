//! This crate contains common developer utilities for crates within the
//! `wordseq` system, such as the `Element` trait and the width arithmetic that
//! every reinterpretation in `wordseq_core` is built from. Most users should
//! never have to interact with this directly.
//!
//! There is a hidden reexport of this crate for `wordseq_core` and `wordseq`.

#![no_std]

mod element;
mod widths;

pub use element::Element;
pub use widths::{chunked_len, exact_ratio, major_minor};

// Two active flags would define two `Digit`s, so every pair is caught here with
// a clearer message, including the `--all-features` case.
#[cfg(any(
    all(feature = "u8_digits", feature = "u16_digits"),
    all(feature = "u8_digits", feature = "u32_digits"),
    all(feature = "u8_digits", feature = "u64_digits"),
    all(feature = "u8_digits", feature = "u128_digits"),
    all(feature = "u16_digits", feature = "u32_digits"),
    all(feature = "u16_digits", feature = "u64_digits"),
    all(feature = "u16_digits", feature = "u128_digits"),
    all(feature = "u32_digits", feature = "u64_digits"),
    all(feature = "u32_digits", feature = "u128_digits"),
    all(feature = "u64_digits", feature = "u128_digits"),
))]
compile_error!(
    "Attempted to activate multiple `*_digits` features at the same time. This is likely because \
     `--all-features` was used, which does not work for `wordseq`."
);

/// The native limb of the library. This should be a type alias of the
/// unsigned integer of the architecture's registers. On most architectures,
/// this is simply `usize`, however there are cases such as AVR where the
/// pointer size is 16 bits but the register size is 8 bits.
#[cfg(not(any(
    feature = "u8_digits",
    feature = "u16_digits",
    feature = "u32_digits",
    feature = "u64_digits",
    feature = "u128_digits",
    target_arch = "avr",
)))]
pub type Digit = usize;
#[cfg(any(feature = "u8_digits", target_arch = "avr"))]
pub type Digit = u8;
#[cfg(feature = "u16_digits")]
pub type Digit = u16;
#[cfg(feature = "u32_digits")]
pub type Digit = u32;
#[cfg(feature = "u64_digits")]
pub type Digit = u64;
#[cfg(feature = "u128_digits")]
pub type Digit = u128;
