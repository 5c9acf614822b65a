use core::fmt;

use crate::compare::{Compare, Natural};
use crate::raw::{Degree, RawBTree};
use crate::Error;

mod structure;

/// An ordered set based on a B-tree with a configurable minimum degree and a
/// pluggable comparator.
///
/// Elements are ordered by the comparator `C` supplied at construction
/// ([`Natural`], i.e. [`Ord`], by default). Two elements the comparator calls
/// equal are the same element as far as the set is concerned: the set never
/// stores both.
///
/// Every non-root node holds between `t - 1` and `2t - 1` elements, where `t`
/// is the minimum degree, so the height stays `O(log_t n)` whatever the order
/// of insertions and removals.
///
/// # Examples
///
/// ```
/// use degree_btree::BTree;
///
/// let mut books = BTree::new();
///
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
/// books.insert("The Great Gatsby");
///
/// // Check for a specific one.
/// if !books.contains(&"The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.", books.len());
/// }
///
/// // Remove a book.
/// books.remove(&"The Odyssey");
/// assert_eq!(books.len(), 3);
/// ```
pub struct BTree<T, C = Natural> {
    raw: RawBTree<T, C>,
}

impl<T: Ord> BTree<T> {
    /// Makes a new, empty `BTree` ordered by [`Ord`], with the default minimum
    /// degree of 2.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use degree_btree::BTree;
    ///
    /// let set: BTree<i32> = BTree::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Makes a new, empty `BTree` ordered by [`Ord`], with minimum degree `t`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDegree`] if `t < 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use degree_btree::{BTree, Error};
    ///
    /// let set: BTree<i32> = BTree::with_degree(16).unwrap();
    /// assert_eq!(set.degree(), 16);
    ///
    /// assert_eq!(BTree::<i32>::with_degree(1).err(), Some(Error::InvalidDegree(1)));
    /// ```
    pub fn with_degree(t: usize) -> Result<Self, Error> {
        Self::with_degree_and_comparator(t, Natural)
    }
}

impl<T, C: Compare<T>> BTree<T, C> {
    /// Makes a new, empty `BTree` ordered by `cmp`, with the default minimum
    /// degree of 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use degree_btree::BTree;
    ///
    /// let mut set = BTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.first(), Some(&3));
    /// ```
    #[must_use]
    pub fn with_comparator(cmp: C) -> Self {
        BTree {
            raw: RawBTree::new(Degree::DEFAULT, cmp),
        }
    }

    /// Makes a new, empty `BTree` ordered by `cmp`, with minimum degree `t`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDegree`] if `t < 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use degree_btree::BTree;
    ///
    /// fn by_len(a: &String, b: &String) -> Ordering {
    ///     a.len().cmp(&b.len())
    /// }
    ///
    /// let mut set = BTree::with_degree_and_comparator(4, by_len).unwrap();
    /// set.insert("abc".to_string());
    /// assert!(set.contains(&"xyz".to_string()));
    /// ```
    pub fn with_degree_and_comparator(t: usize, cmp: C) -> Result<Self, Error> {
        Ok(BTree {
            raw: RawBTree::new(Degree::new(t)?, cmp),
        })
    }

    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use degree_btree::BTree;
    ///
    /// let set: BTree<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn contains(&self, value: &T) -> bool {
        self.raw.contains(value)
    }

    /// Returns a reference to the element in the set, if any, that is equal to
    /// the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use degree_btree::BTree;
    ///
    /// let set: BTree<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get(&self, value: &T) -> Option<&T> {
        self.raw.search(value)
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal value, `true` is
    ///   returned.
    /// - If the set already contained an equal value, `false` is returned, and
    ///   the entry is not updated.
    ///
    /// # Examples
    ///
    /// ```
    /// use degree_btree::BTree;
    ///
    /// let mut set = BTree::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, value: T) -> bool {
        self.raw.insert(value)
    }

    /// Adds a value to the set, replacing the existing element, if any, that is
    /// equal to the value. Returns the replaced element.
    ///
    /// # Examples
    ///
    /// ```
    /// use degree_btree::BTree;
    ///
    /// let mut set = BTree::with_comparator(|a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0));
    /// set.insert((7, "old"));
    ///
    /// assert_eq!(set.replace((7, "new")), Some((7, "old")));
    /// assert_eq!(set.get(&(7, "")), Some(&(7, "new")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn replace(&mut self, value: T) -> Option<T> {
        self.raw.replace(value)
    }

    /// If the set contains an element equal to the value, removes it from the
    /// set and drops it. Returns whether such an element was present.
    ///
    /// Removing an absent value leaves the set untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use degree_btree::BTree;
    ///
    /// let mut set = BTree::new();
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove(&mut self, value: &T) -> bool {
        self.raw.remove(value).is_some()
    }

    /// Removes and returns the element in the set, if any, that is equal to the
    /// given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use degree_btree::BTree;
    ///
    /// let mut set = BTree::new();
    /// set.insert(2);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn take(&mut self, value: &T) -> Option<T> {
        self.raw.remove(value)
    }
}

impl<T, C> BTree<T, C> {
    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use degree_btree::BTree;
    ///
    /// let mut v = BTree::new();
    /// v.insert(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use degree_btree::BTree;
    ///
    /// let mut v = BTree::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns a reference to the first element in the set, if any.
    /// This element is always the minimum of all elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use degree_btree::BTree;
    ///
    /// let mut set = BTree::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(1);
    /// assert_eq!(set.first(), Some(&1));
    /// set.insert(2);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.first()
    }

    /// Returns a reference to the last element in the set, if any.
    /// This element is always the maximum of all elements in the set.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.last()
    }
}

impl<T: Clone, C: Clone> Clone for BTree<T, C> {
    fn clone(&self) -> Self {
        BTree { raw: self.raw.clone() }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        self.raw.for_each(|value| {
            set.entry(value);
        });
        set.finish()
    }
}

impl<T: Ord> Default for BTree<T> {
    /// Creates an empty `BTree` ordered by [`Ord`].
    fn default() -> Self {
        BTree::new()
    }
}

impl<T: Ord> FromIterator<T> for BTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = BTree::new();
        set.extend(iter);
        set
    }
}

impl<T, C: Compare<T>> Extend<T> for BTree<T, C> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Copy, C: Compare<T>> Extend<&'a T> for BTree<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BTree<T> {
    /// Converts a `[T; N]` into a `BTree<T>`.
    ///
    /// ```
    /// use degree_btree::BTree;
    ///
    /// let set1 = BTree::from([1, 2, 3, 4]);
    /// let set2: BTree<_> = [1, 2, 3, 4].into();
    /// assert_eq!(format!("{set1:?}"), format!("{set2:?}"));
    /// ```
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;
    use static_assertions::assert_impl_all;

    assert_impl_all!(BTree<i32>: Send, Sync, Clone, Default, fmt::Debug);
    assert_impl_all!(BTree<String, fn(&String, &String) -> core::cmp::Ordering>: Send, Sync, Clone);

    #[test]
    fn debug_lists_elements_in_order() {
        let set = BTree::from([3, 1, 2]);
        assert_eq!(format!("{set:?}"), "{1, 2, 3}");
        assert_eq!(format!("{:?}", BTree::<i32>::new()), "{}");
    }

    #[test]
    fn clone_is_independent() {
        let mut original: BTree<i32> = (0..100).collect();
        let copy = original.clone();
        original.remove(&50);
        assert!(!original.contains(&50));
        assert!(copy.contains(&50));
        assert_eq!(copy.len(), 100);
        copy.raw.validate_invariants();
    }

    #[test]
    fn extend_from_references() {
        let mut set: BTree<i32> = BTree::new();
        set.extend(&[5, 3, 5, 1]);
        assert_eq!(set.len(), 3);
        set.raw.validate_invariants();
    }

    #[test]
    fn default_is_empty() {
        let set: BTree<u8> = BTree::default();
        assert!(set.is_empty());
        assert_eq!(set.degree(), 2);
    }
}
