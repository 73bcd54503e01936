use crate::{Element, Signum, Source, View};

/// Three way comparison of the value of `lhs` against the value of `rhs`,
/// with each operand interpreted through its own declared signedness.
///
/// - If the appendices differ, the operand with the set appendix decides: if
///   it is declared signed it is negative and therefore smaller, and if it is
///   declared unsigned it is unboundedly large and therefore larger.
/// - Otherwise the longer normalized operand is larger if the shared appendix
///   is zero, and smaller if it is one.
/// - Otherwise the first differing element from the most significant end
///   decides by unsigned element comparison.
///
/// ```
/// use wordseq::prelude::*;
///
/// let minus_one = View::new(&[0xffu8], true);
/// let one = View::new(&[0x01u8], false);
/// assert_eq!(compare(minus_one, true, one, true), Signum::Less);
/// assert_eq!(compare(minus_one, false, one, false), Signum::More);
/// ```
#[must_use]
pub fn compare<T: Element>(
    lhs: View<'_, T>,
    lhs_signed: bool,
    rhs: View<'_, T>,
    rhs_signed: bool,
) -> Signum {
    compare_sources(&lhs, lhs_signed, &rhs, rhs_signed)
}

/// The same as [compare] but for any two sources of the same element type
#[must_use]
pub fn compare_sources<L, R>(lhs: &L, lhs_signed: bool, rhs: &R, rhs_signed: bool) -> Signum
where
    L: Source,
    R: Source<Element = L::Element>,
{
    let appendix = lhs.appendix();
    if appendix != rhs.appendix() {
        return Signum::one(if appendix { lhs_signed } else { !rhs_signed })
    }
    let lhs_count = lhs.normalized_count(0);
    let rhs_count = rhs.normalized_count(0);
    if lhs_count != rhs_count {
        // more significant elements above a zero fill increase the magnitude, above
        // a one fill they increase the negative magnitude
        return Signum::one((lhs_count > rhs_count) == appendix)
    }
    for i in (0..lhs_count).rev() {
        let x = lhs.get(i);
        let y = rhs.get(i);
        if x != y {
            return Signum::one(x < y)
        }
    }
    Signum::Same
}
