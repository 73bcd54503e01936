use core::{
    fmt,
    hash::Hash,
    ops::{BitAnd, BitOr, BitXor, Not},
};

mod private {
    pub trait Sealed {}
}

/// A fixed width unsigned machine word, the storage atom of every view. This
/// is implemented for `u8`, `u16`, `u32`, `u64`, `u128`, and `usize` only.
///
/// Cross-width assembly always goes through `u128` with explicit shifts, so
/// nothing built on this trait depends on target endianness or alignment.
pub trait Element:
    private::Sealed
    + 'static
    + Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::LowerHex
    + fmt::UpperHex
    + fmt::Binary
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
{
    /// Bitwidth of the element
    const BITS: usize;

    /// Number of bytes in the element
    const BYTES: usize;

    const ZERO: Self;

    const MAX: Self;

    /// Returns all zeros if `bit` is `false`, or all ones if `bit` is `true`
    fn repeating(bit: bool) -> Self;

    /// Returns the most significant bit
    fn msb(self) -> bool;

    /// Returns the `i`th least significant byte.
    ///
    /// # Panics
    ///
    /// If `i >= Self::BYTES`
    fn byte(self, i: usize) -> u8;

    /// Zero extends `self` into a `u128`
    fn to_u128(self) -> u128;

    /// Truncates `x` down to `Self`
    fn from_u128(x: u128) -> Self;
}

macro_rules! impl_element {
    ($($t:ident)*) => {
        $(
            impl private::Sealed for $t {}

            impl Element for $t {
                const BITS: usize = $t::BITS as usize;
                const BYTES: usize = ($t::BITS / u8::BITS) as usize;
                const ZERO: Self = 0;
                const MAX: Self = $t::MAX;

                #[inline]
                fn repeating(bit: bool) -> Self {
                    if bit {
                        $t::MAX
                    } else {
                        0
                    }
                }

                #[inline]
                fn msb(self) -> bool {
                    (self >> ($t::BITS - 1)) != 0
                }

                #[inline]
                #[track_caller]
                fn byte(self, i: usize) -> u8 {
                    assert!(i < Self::BYTES, "byte index out of range for the element");
                    (self >> (i * 8)) as u8
                }

                #[inline]
                fn to_u128(self) -> u128 {
                    self as u128
                }

                #[inline]
                fn from_u128(x: u128) -> Self {
                    x as $t
                }
            }
        )*
    };
}

impl_element!(u8 u16 u32 u64 u128 usize);
