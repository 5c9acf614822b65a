use super::BTree;

impl<T, C> BTree<T, C> {
    /// Returns the minimum degree `t` the set was built with.
    ///
    /// Every node other than the root holds between `t - 1` and `2t - 1`
    /// elements. The degree never changes after construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use degree_btree::BTree;
    ///
    /// let small: BTree<i32> = BTree::new();
    /// let large: BTree<i32> = BTree::with_degree(64).unwrap();
    /// assert_eq!(small.degree(), 2);
    /// assert_eq!(large.degree(), 64);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn degree(&self) -> usize {
        self.raw.degree().get()
    }

    /// Returns the number of levels in the tree, counting the root. An empty
    /// set has height 1.
    ///
    /// Grows by one only when a full root splits and shrinks by one only when
    /// the root runs out of elements, so for `n` elements it never exceeds
    /// `1 + log_t((n + 1) / 2)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use degree_btree::BTree;
    ///
    /// let mut set = BTree::new();
    /// set.extend([1, 2, 3]);
    /// assert_eq!(set.height(), 1);
    ///
    /// set.insert(4);
    /// assert_eq!(set.height(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Returns a reference to the set's comparator.
    #[must_use]
    pub fn comparator(&self) -> &C {
        self.raw.comparator()
    }
}
