//! The exchange layer, for crossing limb widths when a whole integer is loaded
//! from or exported to a buffer of a different element type. Everything here
//! is lazy: destination elements are computed on demand from the borrowed
//! source, and nothing is copied or allocated.

use core::marker::PhantomData;

use wordseq_internals::*;

use crate::{Source, View};

/// A `View` of `S` elements rechunked into `D` elements. The natural length
/// is the number of `D` elements needed to cover every stored byte, and the
/// appendix carries over unchanged.
///
/// ```
/// use wordseq::prelude::*;
///
/// let x = ChunkedInt::<u16, u32>::new(View::from_signed(&[1, 2, 0x8000]));
/// assert_eq!(x.count(), 2);
/// assert_eq!(x.get(0), 0x0002_0001);
/// assert_eq!(x.get(1), 0xffff_8000);
/// assert_eq!(x.get(2), u32::MAX);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChunkedInt<'a, S: Element, D: Element> {
    base: View<'a, S>,
    _dst: PhantomData<D>,
}

impl<'a, S: Element, D: Element> ChunkedInt<'a, S, D> {
    #[inline]
    #[must_use]
    pub const fn new(base: View<'a, S>) -> Self {
        Self {
            base,
            _dst: PhantomData,
        }
    }

    #[inline]
    #[must_use]
    pub const fn base(&self) -> View<'a, S> {
        self.base
    }

    /// The natural number of destination elements
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        chunked_len(self.base.count(), S::BYTES, D::BYTES)
    }

    #[inline]
    #[must_use]
    pub const fn appendix(&self) -> bool {
        self.base.appendix()
    }

    #[inline]
    #[must_use]
    pub fn fill(&self) -> D {
        D::repeating(self.appendix())
    }

    /// Iterates over the `self.count()` destination elements
    pub fn iter(self) -> impl Iterator<Item = D> + 'a {
        (0..self.count()).map(move |j| self.get(j))
    }
}

/// The exchange descriptor: a source buffer of `S` elements, whether it is
/// declared signed, and an optional explicit output length in `D` elements.
///
/// The fill past the source is zero if the source is declared unsigned or if
/// its top stored element has a clear sign bit, and all ones if it is
/// declared signed and the top stored element has a set sign bit. Only the
/// declared flag and the top stored bit are consulted, so the same buffer can
/// be read either way.
///
/// ```
/// use wordseq::prelude::*;
///
/// let x = ExchangeInt::<u32, u8>::new(&[0x0000_8001, 0], false).succinct();
/// assert_eq!(x.len(), 2);
/// let mut buf = [0u8; 4];
/// x.as_exchange().copy_to(&mut buf);
/// assert_eq!(buf, [0x01, 0x80, 0, 0]);
///
/// // the same buffer declared signed
/// let y = ExchangeInt::<u8, u8>::new(&[0x01, 0x80], true).succinct();
/// assert!(y.sign());
/// assert_eq!(y.get(5), 0xff);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExchangeInt<'a, S: Element, D: Element> {
    chunks: ChunkedInt<'a, S, D>,
    is_signed: bool,
    len: usize,
}

impl<'a, S: Element, D: Element> ExchangeInt<'a, S, D> {
    /// Creates the descriptor with the natural output length
    #[must_use]
    pub fn new(source: &'a [S], is_signed: bool) -> Self {
        let base = if is_signed {
            View::from_signed(source)
        } else {
            View::from_unsigned(source)
        };
        Self::from_view(base, is_signed)
    }

    /// Creates the descriptor with the natural output length from an existing
    /// `View`, keeping its appendix instead of deriving one from the top
    /// stored bit. This is the way to exchange a normalized `View`, whose top
    /// stored element may no longer carry the sign.
    ///
    /// ```
    /// use wordseq::prelude::*;
    ///
    /// // -129 with the sign element trimmed
    /// let x = View::from_signed(&[0x7fu8, 0xff]).normalized();
    /// assert_eq!(x.body(), &[0x7f]);
    /// let y = ExchangeInt::<u8, u16>::from_view(x, true);
    /// assert_eq!(y.get(0), 0xff7f);
    /// ```
    #[must_use]
    pub fn from_view(base: View<'a, S>, is_signed: bool) -> Self {
        let chunks = ChunkedInt::new(base);
        Self {
            chunks,
            is_signed,
            len: chunks.count(),
        }
    }

    /// Overrides the output length, truncating extra destination elements or
    /// padding with fill elements to reach exactly `len`
    #[inline]
    #[must_use]
    pub const fn with_len(self, len: usize) -> Self {
        Self {
            chunks: self.chunks,
            is_signed: self.is_signed,
            len,
        }
    }

    /// A fixed length random access view of exactly `n` destination elements.
    /// This is [ExchangeInt::with_len], named for when a caller wants a
    /// bounded buffer.
    #[inline]
    #[must_use]
    pub const fn prefix(self, n: usize) -> Self {
        self.with_len(n)
    }

    #[inline]
    #[must_use]
    pub const fn chunks(&self) -> ChunkedInt<'a, S, D> {
        self.chunks
    }

    #[inline]
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.is_signed
    }

    /// The output length, natural unless overridden
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn appendix(&self) -> bool {
        self.chunks.appendix()
    }

    #[inline]
    #[must_use]
    pub fn fill(&self) -> D {
        self.chunks.fill()
    }

    /// Returns destination element `j`. Indexes at or past `self.len()` read
    /// as the fill.
    #[inline]
    #[must_use]
    pub fn get(&self, j: usize) -> D {
        if j < self.len {
            self.chunks.get(j)
        } else {
            self.fill()
        }
    }

    /// Drops the trailing destination elements that equal the fill
    #[must_use]
    pub fn succinct(self) -> SuccinctInt<'a, S, D> {
        let len = Source::normalized_count(&self, 0);
        SuccinctInt {
            chunks: self.chunks,
            is_signed: self.is_signed,
            len,
        }
    }

    /// Writes the first `buf.len()` destination elements to `buf`
    pub fn copy_to(&self, buf: &mut [D]) {
        for (j, x) in buf.iter_mut().enumerate() {
            *x = self.get(j);
        }
    }

    /// Returns the first `N` destination elements
    #[must_use]
    pub fn to_array<const N: usize>(&self) -> [D; N] {
        let mut buf = [D::ZERO; N];
        self.copy_to(&mut buf);
        buf
    }

    /// Iterates over the `self.len()` destination elements
    pub fn iter(self) -> impl Iterator<Item = D> + 'a {
        (0..self.len).map(move |j| self.get(j))
    }
}

impl<'a, S: Element, D: Element> Source for ExchangeInt<'a, S, D> {
    type Element = D;

    #[inline]
    fn count(&self) -> usize {
        self.len
    }

    #[inline]
    fn appendix(&self) -> bool {
        self.chunks.appendix()
    }

    #[inline]
    fn get(&self, j: usize) -> D {
        ExchangeInt::get(self, j)
    }
}

/// The canonical minimal length form of an exchanged integer. No trailing
/// destination element equals the fill, so two `SuccinctInt`s of the same
/// value have the same length and elements regardless of the source width.
#[derive(Debug, Clone, Copy)]
pub struct SuccinctInt<'a, S: Element, D: Element> {
    chunks: ChunkedInt<'a, S, D>,
    is_signed: bool,
    len: usize,
}

impl<'a, S: Element, D: Element> SuccinctInt<'a, S, D> {
    /// The minimal number of destination elements
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.is_signed
    }

    /// If the value is negative (the fill is all ones)
    #[inline]
    #[must_use]
    pub const fn sign(&self) -> bool {
        self.chunks.appendix()
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        (self.len == 0) && !self.sign()
    }

    #[inline]
    #[must_use]
    pub fn fill(&self) -> D {
        self.chunks.fill()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, j: usize) -> D {
        if j < self.len {
            self.chunks.get(j)
        } else {
            self.fill()
        }
    }

    /// Returns this as an `ExchangeInt` with an explicit length equal to
    /// `self.len()`
    #[inline]
    #[must_use]
    pub const fn as_exchange(&self) -> ExchangeInt<'a, S, D> {
        ExchangeInt {
            chunks: self.chunks,
            is_signed: self.is_signed,
            len: self.len,
        }
    }

    /// Iterates over the `self.len()` destination elements
    pub fn iter(self) -> impl Iterator<Item = D> + 'a {
        (0..self.len).map(move |j| self.get(j))
    }
}

impl<'a, S: Element, D: Element> Source for SuccinctInt<'a, S, D> {
    type Element = D;

    #[inline]
    fn count(&self) -> usize {
        self.len
    }

    #[inline]
    fn appendix(&self) -> bool {
        self.chunks.appendix()
    }

    #[inline]
    fn get(&self, j: usize) -> D {
        SuccinctInt::get(self, j)
    }
}
