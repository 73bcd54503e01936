use core::marker::PhantomData;

use wordseq_internals::*;

use crate::{Source, View};

/// A `View` of `T` elements reinterpreted at the larger width `U`, created by
/// [View::merge]. When the stored bytes are not a multiple of the width of
/// `U`, the view splits into `major` whole `U` elements and `minor` leftover
/// bytes. The leftover bytes form one partial element in its low bytes, with
/// the remaining high bytes filled from the appendix.
///
/// All loads are assembled from the source elements by shifting, so the
/// result does not depend on the alignment of the source buffer or on the
/// endianness of the target.
#[derive(Debug, Clone, Copy)]
pub struct DisjointView<'a, T: Element, U: Element> {
    base: View<'a, T>,
    ratio: usize,
    major: usize,
    minor: usize,
    _dst: PhantomData<U>,
}

impl<'a, T: Element, U: Element> DisjointView<'a, T, U> {
    /// `ratio` is `U::BYTES / T::BYTES` and was checked by `View::try_merge`
    #[inline]
    pub(crate) fn new(base: View<'a, T>, ratio: usize) -> Self {
        debug_assert_eq!(ratio * T::BYTES, U::BYTES);
        let (major, minor) = major_minor(base.count(), ratio, T::BYTES);
        Self {
            base,
            ratio,
            major,
            minor,
            _dst: PhantomData,
        }
    }

    /// Returns the source `View` this was created from
    #[inline]
    #[must_use]
    pub const fn base(&self) -> View<'a, T> {
        self.base
    }

    /// The number of whole `U` elements
    #[inline]
    #[must_use]
    pub const fn major(&self) -> usize {
        self.major
    }

    /// The number of leftover bytes, always less than `U::BYTES`
    #[inline]
    #[must_use]
    pub const fn minor(&self) -> usize {
        self.minor
    }

    #[inline]
    #[must_use]
    pub const fn appendix(&self) -> bool {
        self.base.appendix()
    }

    /// Returns `major`, plus one if there is a partial element
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.major + ((self.minor != 0) as usize)
    }

    #[inline]
    #[must_use]
    pub fn fill(&self) -> U {
        U::repeating(self.appendix())
    }

    /// Returns the whole element at `i`.
    ///
    /// # Safety
    ///
    /// `i < self.major()` should hold true
    #[inline]
    #[must_use]
    pub unsafe fn major_element(&self, i: usize) -> U {
        debug_assert!(i < self.major);
        let start = i * self.ratio;
        let mut x: u128 = 0;
        for j in 0..self.ratio {
            // Safety: `i < self.major` means `start + j < self.major * self.ratio`,
            // which is within the stored elements
            let digit = unsafe { self.base.get_unchecked(start + j) };
            x |= digit.to_u128() << (j * T::BITS);
        }
        U::from_u128(x)
    }

    /// Returns the partial element made from the `minor` leftover bytes in its
    /// low bytes and the appendix in the rest. If `minor == 0` this is just the
    /// fill.
    #[must_use]
    pub fn minor_element_or_appendix(&self) -> U {
        let start = self.major * self.ratio;
        let mut x: u128 = 0;
        for i in 0..self.minor {
            // Safety: the leftover bytes are exactly the bytes of the stored elements
            // past `start`
            let digit = unsafe { self.base.get_unchecked(start + (i / T::BYTES)) };
            x |= (digit.byte(i % T::BYTES) as u128) << (i * 8);
        }
        if self.appendix() {
            // `minor < U::BYTES <= 16` so the shift is in range
            x |= u128::MAX << (self.minor * 8);
        }
        U::from_u128(x)
    }

    /// Returns the element at `i`, or the fill if `i > self.major()`. This
    /// never fails.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> U {
        if i < self.major {
            // Safety: just checked
            unsafe { self.major_element(i) }
        } else if i == self.major {
            self.minor_element_or_appendix()
        } else {
            self.fill()
        }
    }
}

impl<'a, T: Element, U: Element> Source for DisjointView<'a, T, U> {
    type Element = U;

    #[inline]
    fn count(&self) -> usize {
        DisjointView::count(self)
    }

    #[inline]
    fn appendix(&self) -> bool {
        self.base.appendix()
    }

    #[inline]
    fn get(&self, i: usize) -> U {
        DisjointView::get(self, i)
    }
}
