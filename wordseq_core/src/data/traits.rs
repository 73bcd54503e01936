use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    ops::Deref,
};

use crate::{compare, Element, Signum, View};

/// Value equality. Equal values need equal appendices, so this does not
/// depend on declared signedness.
impl<'a, 'b, T: Element> PartialEq<View<'b, T>> for View<'a, T> {
    fn eq(&self, rhs: &View<'b, T>) -> bool {
        compare(*self, false, *rhs, false) == Signum::Same
    }
}

impl<'a, T: Element> Eq for View<'a, T> {}

/// Hashes the normalized form, so equal values hash the same regardless of
/// how much fill they store. Note that this depends on the element width.
impl<'a, T: Element> Hash for View<'a, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalized();
        normalized.appendix().hash(state);
        normalized.body().hash(state);
    }
}

macro_rules! impl_ord_wrapper {
    ($($name:ident, $signed:expr, $doc:expr);*;) => {
        $(
            #[doc = $doc]
            #[derive(Debug, Clone, Copy)]
            pub struct $name<'a, T: Element>(pub View<'a, T>);

            impl<'a, T: Element> PartialEq for $name<'a, T> {
                fn eq(&self, rhs: &Self) -> bool {
                    self.0 == rhs.0
                }
            }

            impl<'a, T: Element> Eq for $name<'a, T> {}

            impl<'a, T: Element> PartialOrd for $name<'a, T> {
                fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
                    Some(self.cmp(rhs))
                }
            }

            impl<'a, T: Element> Ord for $name<'a, T> {
                fn cmp(&self, rhs: &Self) -> Ordering {
                    compare(self.0, $signed, rhs.0, $signed).to_ordering()
                }
            }

            impl<'a, T: Element> Hash for $name<'a, T> {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.0.hash(state);
                }
            }

            impl<'a, T: Element> Deref for $name<'a, T> {
                type Target = View<'a, T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }
        )*
    };
}

impl_ord_wrapper!(
    Signed, true, "A wrapper implementing `Ord` by comparing the wrapped `View`s as signed \
                   integers";
    Unsigned, false, "A wrapper implementing `Ord` by comparing the wrapped `View`s as \
                      unsigned integers";
);
