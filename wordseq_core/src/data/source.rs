use crate::{logic::normalized_count, Element, Stream};

/// An indexed source of elements followed by an unbounded run of appendix
/// fill. Every reader in this crate goes through [Source::get], so no code
/// path can observe an index past `count()` as anything but the fill.
pub trait Source {
    type Element: Element;

    /// The number of stored (or computed) elements before the fill
    fn count(&self) -> usize;

    /// The bit repeated forever past `count()`
    fn appendix(&self) -> bool;

    /// Returns the element at `i`. This is total: if `i >= self.count()` it
    /// returns `self.fill()`.
    fn get(&self, i: usize) -> Self::Element;

    /// The element equal to every element past `count()`
    #[inline]
    fn fill(&self) -> Self::Element {
        Self::Element::repeating(self.appendix())
    }

    /// Returns the count that remains after removing the maximal suffix of
    /// elements equal to `self.fill()`, but never going below `floor`. If
    /// `floor >= self.count()`, `self.count()` is returned.
    #[inline]
    fn normalized_count(&self, floor: usize) -> usize
    where
        Self: Sized,
    {
        normalized_count(self, floor)
    }

    /// Starts a `Stream` at index 0
    #[inline]
    fn stream(self) -> Stream<Self>
    where
        Self: Sized,
    {
        Stream::new(self)
    }
}
