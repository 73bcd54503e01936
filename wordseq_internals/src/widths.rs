//! Width arithmetic shared by every reinterpretation. All widths here are in
//! bytes, and all of the `Element` widths are powers of two, so one of any two
//! widths always divides the other.

/// Returns `larger / smaller` if `smaller` divides `larger` exactly, else
/// `None`. Zero widths are never valid.
#[inline]
pub const fn exact_ratio(larger: usize, smaller: usize) -> Option<usize> {
    if (smaller == 0) || (larger < smaller) || ((larger % smaller) != 0) {
        None
    } else {
        Some(larger / smaller)
    }
}

/// Returns the number of `dst_bytes` wide elements needed to cover `count`
/// elements that are each `src_bytes` wide, rounding up for a partial last
/// element.
///
/// # Panics
///
/// If `dst_bytes == 0`
#[inline]
pub const fn chunked_len(count: usize, src_bytes: usize, dst_bytes: usize) -> usize {
    // `count * src_bytes` is the byte length of a real slice and cannot exceed
    // `isize::MAX`
    let total = count.wrapping_mul(src_bytes);
    (total / dst_bytes) + ((total % dst_bytes != 0) as usize)
}

/// Splits `count` elements of `src_bytes` width into the number of whole
/// elements of a width `ratio` times larger, and the number of leftover bytes.
///
/// # Panics
///
/// If `ratio == 0`
#[inline]
pub const fn major_minor(count: usize, ratio: usize, src_bytes: usize) -> (usize, usize) {
    (count / ratio, (count % ratio) * src_bytes)
}
