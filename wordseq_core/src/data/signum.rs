use core::{cmp::Ordering, fmt};

/// The three way result of comparing two integer values
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub enum Signum {
    Less,
    Same,
    More,
}

impl Signum {
    /// Returns `Less` if `sign` is set (negative one), and `More` otherwise
    /// (positive one)
    #[inline]
    #[must_use]
    pub const fn one(sign: bool) -> Self {
        if sign {
            Signum::Less
        } else {
            Signum::More
        }
    }

    /// Returns the result of the comparison with the operands swapped
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Signum::Less => Signum::More,
            Signum::Same => Signum::Same,
            Signum::More => Signum::Less,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_less(self) -> bool {
        matches!(self, Signum::Less)
    }

    #[inline]
    #[must_use]
    pub const fn is_same(self) -> bool {
        matches!(self, Signum::Same)
    }

    #[inline]
    #[must_use]
    pub const fn is_more(self) -> bool {
        matches!(self, Signum::More)
    }

    #[inline]
    #[must_use]
    pub const fn to_ordering(self) -> Ordering {
        match self {
            Signum::Less => Ordering::Less,
            Signum::Same => Ordering::Equal,
            Signum::More => Ordering::Greater,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Signum::Less,
            Ordering::Equal => Signum::Same,
            Ordering::Greater => Signum::More,
        }
    }
}

impl From<Ordering> for Signum {
    fn from(ordering: Ordering) -> Self {
        Self::from_ordering(ordering)
    }
}

impl From<Signum> for Ordering {
    fn from(signum: Signum) -> Self {
        signum.to_ordering()
    }
}

impl fmt::Display for Signum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
