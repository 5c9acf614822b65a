use core::num::NonZero;

use crate::Error;

/// The minimum degree `t` of a tree.
///
/// Every non-root node holds `t - 1..=2t - 1` keys and, when internal, one more
/// child than keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Degree(NonZero<usize>);

impl Degree {
    pub(crate) const MIN: usize = 2;
    pub(crate) const DEFAULT: Self = match Self::from_usize(2) {
        Some(degree) => degree,
        None => panic!("`Degree::DEFAULT` - 2 is a valid degree!"),
    };

    // Keep `2t` children addressable.
    const MAX: usize = usize::MAX / 2;

    #[inline]
    const fn from_usize(t: usize) -> Option<Self> {
        if t < Self::MIN || t > Self::MAX {
            return None;
        }
        match NonZero::new(t) {
            Some(t) => Some(Self(t)),
            None => None,
        }
    }

    pub(crate) fn new(t: usize) -> Result<Self, Error> {
        Self::from_usize(t).ok_or_else(|| {
            tracing::debug!(degree = t, "rejected minimum degree");
            Error::InvalidDegree(t)
        })
    }

    #[inline]
    pub(crate) const fn get(self) -> usize {
        self.0.get()
    }

    /// Fewest keys a non-root node may hold.
    #[inline]
    pub(crate) const fn min_keys(self) -> usize {
        self.get() - 1
    }

    /// Keys in a full node.
    #[inline]
    pub(crate) const fn max_keys(self) -> usize {
        2 * self.get() - 1
    }

    #[inline]
    pub(crate) const fn max_children(self) -> usize {
        2 * self.get()
    }
}

impl Default for Degree {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // Verify our assumptions about `Degree` and the niche optimization.
    assert_eq_size!(Degree, Option<Degree>);
    assert_eq_size!(Degree, usize);

    #[test]
    fn default_degree_is_two() {
        assert_eq!(Degree::DEFAULT.get(), 2);
        assert_eq!(Degree::default().max_keys(), 3);
        assert_eq!(Degree::default().max_children(), 4);
        assert_eq!(Degree::default().min_keys(), 1);
    }

    #[test]
    fn degrees_below_two_are_rejected() {
        assert_eq!(Degree::new(0), Err(Error::InvalidDegree(0)));
        assert_eq!(Degree::new(1), Err(Error::InvalidDegree(1)));
        assert_eq!(Degree::new(usize::MAX), Err(Error::InvalidDegree(usize::MAX)));
    }

    proptest! {
        #[test]
        fn bounds_follow_degree(t in 2usize..10_000) {
            let degree = Degree::new(t).unwrap();
            prop_assert_eq!(degree.get(), t);
            prop_assert_eq!(degree.min_keys(), t - 1);
            prop_assert_eq!(degree.max_keys(), 2 * t - 1);
            prop_assert_eq!(degree.max_children(), degree.max_keys() + 1);
        }
    }
}
