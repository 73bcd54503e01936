use wordseq_internals::*;

use crate::{ChunkedInt, Source};

/// # Cross-width element construction
impl<'a, S: Element, D: Element> ChunkedInt<'a, S, D> {
    /// Returns destination element `j`, which covers the source bytes
    /// `[j * D::BYTES, (j + 1) * D::BYTES)`. Bytes past the stored source come
    /// from the fill, so this is the same as extending the source forever in
    /// its own width and then rechunking.
    #[must_use]
    pub fn get(&self, j: usize) -> D {
        if j >= self.count() {
            // also keeps the index arithmetic below from overflowing
            return self.fill()
        }
        let base = self.base();
        if D::BYTES >= S::BYTES {
            let ratio = D::BYTES / S::BYTES;
            let start = j * ratio;
            let mut x: u128 = 0;
            for i in 0..ratio {
                x |= base.get(start + i).to_u128() << (i * S::BITS);
            }
            D::from_u128(x)
        } else {
            let ratio = S::BYTES / D::BYTES;
            let shift = (j % ratio) * D::BITS;
            D::from_u128(base.get(j / ratio).to_u128() >> shift)
        }
    }
}

impl<'a, S: Element, D: Element> Source for ChunkedInt<'a, S, D> {
    type Element = D;

    #[inline]
    fn count(&self) -> usize {
        ChunkedInt::count(self)
    }

    #[inline]
    fn appendix(&self) -> bool {
        self.base().appendix()
    }

    #[inline]
    fn get(&self, j: usize) -> D {
        ChunkedInt::get(self, j)
    }
}
