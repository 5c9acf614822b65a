use core::cmp::Ordering;

/// A total order over `T`, supplied once when a [`BTree`](crate::BTree) is built.
///
/// Any `Fn(&T, &T) -> Ordering` closure or function is a comparator, and
/// [`Natural`] orders types by their [`Ord`] implementation.
///
/// The tree assumes the order is consistent and never changes while elements
/// are stored. An inconsistent comparator cannot cause memory unsafety, but
/// lookups and removals may then miss elements.
///
/// # Examples
///
/// ```
/// use degree_btree::BTree;
///
/// // Longest string first.
/// let mut words = BTree::with_comparator(|a: &&str, b: &&str| b.len().cmp(&a.len()));
/// words.insert("fig");
/// words.insert("banana");
///
/// assert_eq!(words.first(), Some(&"banana"));
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}
