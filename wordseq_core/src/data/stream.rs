use const_fn::const_fn;

use crate::{Element, Source, View};

/// The state of a [Stream]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamState {
    /// The next read is of a stored element
    Active,
    /// Every following read is the fill
    Repeating,
    /// `Stream::finalize` was called, every following read is the fill and the
    /// index no longer advances
    Finalized,
}

/// A single pass cursor over a [Source]. Past the stored elements it yields
/// the appendix fill forever.
///
/// Elementwise algorithms over operands of differing lengths drive one
/// `Stream` per operand and branch on [Stream::is_on_repeat] to reach the
/// cheaper code paths once an operand is exhausted.
///
/// ```
/// use wordseq::prelude::*;
///
/// let mut s = View::from_signed(&[7u8, 0x80]).stream();
/// assert_eq!(s.next(), 7);
/// assert!(!s.is_on_repeat());
/// assert_eq!(s.next(), 0x80);
/// assert!(s.is_on_repeat());
/// assert_eq!(s.next(), 0xff);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Stream<S: Source> {
    base: S,
    index: usize,
}

impl<S: Source> Stream<S> {
    /// The index of a finalized `Stream`
    pub const FINALIZED: usize = usize::MAX;

    #[inline]
    #[must_use]
    pub const fn new(base: S) -> Self {
        Self { base, index: 0 }
    }

    /// Returns a reference to the source
    #[inline]
    #[must_use]
    pub const fn base(&self) -> &S {
        &self.base
    }

    #[inline]
    #[must_use]
    pub fn into_base(self) -> S {
        self.base
    }

    /// The index of the element the next call to [Stream::next] reads
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Reads the element at the current index and advances. Once finalized,
    /// the index stays put and only fill is returned.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn next(&mut self) -> S::Element {
        let x = self.base.get(self.index);
        if self.index != Self::FINALIZED {
            self.index += 1;
        }
        x
    }

    /// Forces the cursor to its terminal state, for when no more
    /// distinguishing elements can remain
    #[inline]
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn finalize(&mut self) {
        self.index = Self::FINALIZED;
    }

    #[inline]
    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        self.index == Self::FINALIZED
    }

    /// If all following reads are the appendix fill
    #[inline]
    #[must_use]
    pub fn is_on_repeat(&self) -> bool {
        self.index >= self.base.count()
    }

    #[must_use]
    pub fn state(&self) -> StreamState {
        if self.is_finalized() {
            StreamState::Finalized
        } else if self.is_on_repeat() {
            StreamState::Repeating
        } else {
            StreamState::Active
        }
    }
}

impl<'a, T: Element> Stream<View<'a, T>> {
    /// Trims the fill suffix of the underlying `View`, using the current
    /// index as the floor so that nothing already read is trimmed away
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            base: self.base.normalized_to(self.index),
            index: self.index,
        }
    }
}
