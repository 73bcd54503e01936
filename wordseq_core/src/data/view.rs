//! ## Basic Invariants
//!
//! - A `View` is a borrowed slice of `Element`s in little endian limb order,
//!   followed by an unbounded run of elements equal to
//!   `Element::repeating(appendix)`. Reading any index at or beyond the slice
//!   length is defined and returns that fill.
//! - The same representation serves fixed width two's complement integers
//!   (the appendix is the sign bit and the count is fixed) and arbitrary
//!   precision integers (the appendix is the sign of the number and the count
//!   grows as needed).
//! - A `View` does not know signedness. Functions that need it, such as
//!   [crate::compare], take it as a separate argument for each operand.
//! - A normalized `View` has no removable suffix: either the count is zero or
//!   the last stored element is not the fill.

use core::{mem, slice};

use wordseq_internals::*;

use crate::{DisjointView, Signum, Source, Stream};

/// A read-only, non-owning window over a contiguous buffer of elements plus
/// one appendix bit. This never allocates or frees and is only valid for the
/// lifetime of the borrow it was created from.
///
/// ```
/// use wordseq::prelude::*;
///
/// // -2 as an `i64` stored in 32 bit limbs
/// let x = View::from_signed(&[0xffff_fffe_u32, 0xffff_ffff]);
/// assert!(x.appendix());
/// assert_eq!(x.get(1), u32::MAX);
/// assert_eq!(x.get(1000), u32::MAX);
/// assert_eq!(x.normalized().count(), 1);
/// ```
#[derive(Clone, Copy)]
pub struct View<'a, T: Element> {
    body: &'a [T],
    appendix: bool,
}

/// # Basic functions
impl<'a, T: Element> View<'a, T> {
    /// Creates a `View` of the elements in `body`, followed by unbounded
    /// `Element::repeating(appendix)` fill
    #[inline]
    #[must_use]
    pub const fn new(body: &'a [T], appendix: bool) -> Self {
        Self { body, appendix }
    }

    /// Creates a zero extended `View` of `body`
    #[inline]
    #[must_use]
    pub const fn from_unsigned(body: &'a [T]) -> Self {
        Self::new(body, false)
    }

    /// Creates a sign extended `View` of `body`, using the most significant
    /// bit of the last element as the appendix. An empty `body` is zero.
    #[inline]
    #[must_use]
    pub fn from_signed(body: &'a [T]) -> Self {
        let appendix = match body.last() {
            Some(last) => last.msb(),
            None => false,
        };
        Self::new(body, appendix)
    }

    /// Returns the stored elements
    #[inline]
    #[must_use]
    pub const fn body(&self) -> &'a [T] {
        self.body
    }

    /// Returns the number of stored elements
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.body.len()
    }

    /// Returns the bit that fills every position past the stored elements
    #[inline]
    #[must_use]
    pub const fn appendix(&self) -> bool {
        self.appendix
    }

    /// Returns the element that every index past the stored elements reads as
    #[inline]
    #[must_use]
    pub fn fill(&self) -> T {
        T::repeating(self.appendix)
    }

    /// Returns the element at `i`, or the fill if `i >= self.count()`. This
    /// never fails.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> T {
        match self.body.get(i) {
            Some(x) => *x,
            None => self.fill(),
        }
    }

    /// # Safety
    ///
    /// `i < self.count()` should hold true
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked(&self, i: usize) -> T {
        debug_assert!(i < self.count());
        // Safety: `i < self.count()` means the access is within the slice
        unsafe { *self.body.get_unchecked(i) }
    }

    /// Returns the last stored element, or `None` if nothing is stored
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.body.last().copied()
    }

    /// Returns the canonical minimal form of `self`, sharing the same memory.
    /// The value at every index is unchanged.
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Self {
        self.normalized_to(0)
    }

    /// Trims the maximal suffix of elements equal to the fill, but never
    /// trims the count below `floor`
    #[inline]
    #[must_use]
    pub fn normalized_to(self, floor: usize) -> Self {
        let count = Source::normalized_count(&self, floor);
        Self::new(&self.body[..count], self.appendix)
    }

    /// If `self` has no removable fill suffix
    #[inline]
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        match self.body.last() {
            Some(last) => *last != self.fill(),
            None => true,
        }
    }

    /// If `self` represents zero
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        !self.appendix && self.body.iter().all(|x| *x == T::ZERO)
    }

    /// Starts a `Stream` at index 0
    #[inline]
    #[must_use]
    pub fn stream(self) -> Stream<Self> {
        Stream::new(self)
    }
}

/// # Reinterpretation
impl<'a, T: Element> View<'a, T> {
    /// Reinterprets the same memory as elements of the smaller or equal width
    /// `U`. The count is multiplied by the exact ratio of the widths and the
    /// appendix is unchanged. Returns `None` if the width of `U` does not
    /// divide the width of `T`.
    ///
    /// # Portability
    ///
    /// This shares memory, so on big-endian targets the `U` elements within
    /// each `T` come out in reverse significance order. Use [View::merge] or
    /// [crate::ChunkedInt] for a reinterpretation that is portable.
    #[must_use]
    pub fn try_split<U: Element>(self) -> Option<View<'a, U>> {
        let ratio = exact_ratio(T::BYTES, U::BYTES)?;
        if mem::align_of::<U>() > mem::align_of::<T>() {
            return None
        }
        let count = self.count().checked_mul(ratio)?;
        // Safety: `U` and `T` are both primitive unsigned integers, so every bit
        // pattern is a valid `U`, the alignment of `U` was checked to divide the
        // alignment of `T`, and `count * U::BYTES == self.count() * T::BYTES` covers
        // exactly the same bytes for the same lifetime.
        let body = unsafe { slice::from_raw_parts(self.body.as_ptr() as *const U, count) };
        Some(View::new(body, self.appendix))
    }

    /// The same as [View::try_split] except it panics.
    ///
    /// # Panics
    ///
    /// If the width of `U` does not divide the width of `T`
    #[track_caller]
    #[must_use]
    pub fn split<U: Element>(self) -> View<'a, U> {
        match self.try_split::<U>() {
            Some(view) => view,
            None => panic!(
                "tried to split a `View` of {}-bit elements into {}-bit elements, which does not \
                 divide evenly",
                T::BITS,
                U::BITS
            ),
        }
    }

    /// Reinterprets `self` as elements of the larger or equal width `U`. If
    /// the stored bytes are not a multiple of the width of `U`, the leftover
    /// bytes form a partial element completed with the appendix. Returns
    /// `None` if the width of `T` does not divide the width of `U`.
    ///
    /// ```
    /// use wordseq::prelude::*;
    ///
    /// let x = View::from_unsigned(&[1u32, 0, 2, 0]).merge::<u64>();
    /// assert_eq!((x.major(), x.minor()), (2, 0));
    /// assert_eq!((x.get(0), x.get(1)), (1, 2));
    /// ```
    #[must_use]
    pub fn try_merge<U: Element>(self) -> Option<DisjointView<'a, T, U>> {
        let ratio = exact_ratio(U::BYTES, T::BYTES)?;
        Some(DisjointView::new(self, ratio))
    }

    /// The same as [View::try_merge] except it panics.
    ///
    /// # Panics
    ///
    /// If the width of `T` does not divide the width of `U`
    #[track_caller]
    #[must_use]
    pub fn merge<U: Element>(self) -> DisjointView<'a, T, U> {
        match self.try_merge::<U>() {
            Some(view) => view,
            None => panic!(
                "tried to merge a `View` of {}-bit elements into {}-bit elements, which does not \
                 divide evenly",
                T::BITS,
                U::BITS
            ),
        }
    }
}

/// # Comparison
impl<'a, T: Element> View<'a, T> {
    /// Three way comparison of the values of `self` and `rhs`, each
    /// interpreted with its own declared signedness. See [crate::compare].
    #[inline]
    #[must_use]
    pub fn compare(self, self_signed: bool, rhs: View<'_, T>, rhs_signed: bool) -> Signum {
        crate::compare(self, self_signed, rhs, rhs_signed)
    }

    /// Compares both `self` and `rhs` as signed integers
    #[inline]
    #[must_use]
    pub fn signed_cmp(self, rhs: View<'_, T>) -> Signum {
        crate::compare(self, true, rhs, true)
    }

    /// Compares both `self` and `rhs` as unsigned integers
    #[inline]
    #[must_use]
    pub fn unsigned_cmp(self, rhs: View<'_, T>) -> Signum {
        crate::compare(self, false, rhs, false)
    }
}

impl<'a, T: Element> Source for View<'a, T> {
    type Element = T;

    #[inline]
    fn count(&self) -> usize {
        self.body.len()
    }

    #[inline]
    fn appendix(&self) -> bool {
        self.appendix
    }

    #[inline]
    fn get(&self, i: usize) -> T {
        View::get(self, i)
    }
}
