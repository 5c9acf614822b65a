use alloc::boxed::Box;
use core::mem;

use smallvec::SmallVec;

use super::degree::Degree;
use crate::compare::Compare;

// Inline storage sized for `Degree::DEFAULT`, so default trees never spill.
pub(crate) const INLINE_KEYS: usize = 3;
pub(crate) const INLINE_CHILDREN: usize = INLINE_KEYS + 1;

// The first heap allocation never reserves more than this many keys up front.
const INITIAL_SPILL: usize = 8;

pub(crate) type Keys<T> = SmallVec<[T; INLINE_KEYS]>;
pub(crate) type Children<T> = SmallVec<[Box<Node<T>>; INLINE_CHILDREN]>;

/// A B-tree node: sorted keys plus, when internal, one owned child per gap.
#[derive(Clone)]
pub(crate) struct Node<T> {
    keys: Keys<T>,
    // Empty iff this node is a leaf.
    children: Children<T>,
}

/// Result of searching for a key in a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SearchResult {
    /// Key was found at the given index.
    Found(usize),
    /// Key was not found; index is where it would be inserted, which is also
    /// the child to descend into.
    NotFound(usize),
}

impl<T> Node<T> {
    /// Creates a new empty leaf node.
    pub(crate) fn new_leaf() -> Self {
        Self {
            keys: SmallVec::new(),
            children: SmallVec::new(),
        }
    }

    /// Creates a key-less internal node owning a single child.
    pub(crate) fn new_internal(first_child: Box<Node<T>>) -> Self {
        let mut children = SmallVec::new();
        children.push(first_child);
        Self {
            keys: SmallVec::new(),
            children,
        }
    }

    /// Returns true if this is a leaf node.
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of keys in this node.
    #[inline]
    pub(crate) fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns the number of children in this node.
    #[inline]
    pub(crate) fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns true if this node holds `2t - 1` keys.
    #[inline]
    pub(crate) fn is_full(&self, degree: Degree) -> bool {
        self.keys.len() >= degree.max_keys()
    }

    /// Returns true if this node can give up a key and stay at or above `t - 1`.
    #[inline]
    pub(crate) fn can_lend(&self, degree: Degree) -> bool {
        self.keys.len() > degree.min_keys()
    }

    #[inline]
    pub(crate) fn key(&self, index: usize) -> &T {
        &self.keys[index]
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> &[T] {
        &self.keys
    }

    pub(crate) fn key_mut(&mut self, index: usize) -> &mut T {
        &mut self.keys[index]
    }

    pub(crate) fn first_key(&self) -> Option<&T> {
        self.keys.first()
    }

    pub(crate) fn last_key(&self) -> Option<&T> {
        self.keys.last()
    }

    #[inline]
    pub(crate) fn child(&self, index: usize) -> &Node<T> {
        &self.children[index]
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, index: usize) -> &mut Node<T> {
        &mut self.children[index]
    }

    #[cfg(test)]
    pub(crate) fn children(&self) -> &[Box<Node<T>>] {
        &self.children
    }

    /// Returns the allocated key capacity.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.keys.capacity()
    }

    /// Grows storage so the node can hold `min_keys` keys (and, if internal,
    /// `min_keys + 1` children) without reallocating.
    ///
    /// Capacity grows by half again, is never below the first-spill size, and
    /// is clamped to what `degree` allows. It never shrinks.
    pub(crate) fn ensure_capacity(&mut self, min_keys: usize, degree: Degree) {
        debug_assert!(
            min_keys <= degree.max_keys(),
            "`Node::ensure_capacity()` - {min_keys} keys exceed the maximum of {}",
            degree.max_keys()
        );

        let current = self.keys.capacity();
        if min_keys > current {
            let initial = (degree.max_keys() / 2).min(INITIAL_SPILL);
            let target = (current + (current >> 1)).max(min_keys).max(initial).min(degree.max_keys());
            self.keys.reserve_exact(target - self.keys.len());
        }

        if !self.is_leaf() {
            let min_children = min_keys + 1;
            let current = self.children.capacity();
            if min_children > current {
                let target = (current + (current >> 1)).max(min_children).min(degree.max_children());
                self.children.reserve_exact(target - self.children.len());
            }
        }
    }

    /// Inserts a key at `index`, shifting greater keys right.
    pub(crate) fn insert_key_at(&mut self, index: usize, key: T, degree: Degree) {
        self.ensure_capacity(self.keys.len() + 1, degree);
        self.keys.insert(index, key);
    }

    /// Inserts a child at `index`, shifting later children right.
    pub(crate) fn insert_child_at(&mut self, index: usize, child: Box<Node<T>>, degree: Degree) {
        // `n` children need room for `n - 1` keys.
        self.ensure_capacity(self.children.len(), degree);
        self.children.insert(index, child);
    }

    /// Removes and returns the key at `index`, shifting later keys left.
    pub(crate) fn remove_key_at(&mut self, index: usize) -> T {
        self.keys.remove(index)
    }

    /// Removes and returns the child at `index`, shifting later children left.
    pub(crate) fn remove_child_at(&mut self, index: usize) -> Box<Node<T>> {
        self.children.remove(index)
    }

    /// Replaces the key at `index`, returning the old key.
    pub(crate) fn replace_key(&mut self, index: usize, key: T) -> T {
        mem::replace(&mut self.keys[index], key)
    }

    /// Removes the first key and, if internal, the first child.
    pub(crate) fn borrow_first(&mut self) -> Option<(T, Option<Box<Node<T>>>)> {
        if self.keys.is_empty() {
            return None;
        }
        let key = self.keys.remove(0);
        let child = if self.is_leaf() {
            None
        } else {
            Some(self.children.remove(0))
        };
        Some((key, child))
    }

    /// Removes the last key and, if internal, the last child.
    pub(crate) fn borrow_last(&mut self) -> Option<(T, Option<Box<Node<T>>>)> {
        let key = self.keys.pop()?;
        Some((key, self.children.pop()))
    }

    /// Prepends a key and, if given, a child. Receiving side of `borrow_last`.
    pub(crate) fn push_front(&mut self, key: T, child: Option<Box<Node<T>>>, degree: Degree) {
        self.insert_key_at(0, key, degree);
        if let Some(child) = child {
            self.insert_child_at(0, child, degree);
        }
    }

    /// Appends a key and, if given, a child. Receiving side of `borrow_first`.
    pub(crate) fn push_back(&mut self, key: T, child: Option<Box<Node<T>>>, degree: Degree) {
        self.insert_key_at(self.keys.len(), key, degree);
        if let Some(child) = child {
            self.insert_child_at(self.children.len(), child, degree);
        }
    }

    /// Splits a full node. This node keeps keys `[0, t - 1)` and children
    /// `[0, t)`. Returns (`median_key`, `new_node`) where the new node holds
    /// keys `[t, 2t - 1)` and children `[t, 2t)`.
    pub(crate) fn split(&mut self, degree: Degree) -> Option<(T, Node<T>)> {
        debug_assert!(self.is_full(degree), "`Node::split()` - node is not full!");
        let t = degree.get();

        let mut right = Node::new_leaf();
        right.keys = self.keys.drain(t..).collect();
        if !self.is_leaf() {
            right.children = self.children.drain(t..).collect();
        }

        let median = self.keys.pop()?;
        Some((median, right))
    }

    /// Merges with a right sibling, given the separator key from the parent.
    /// With both sides at `t - 1` keys the result is exactly full.
    pub(crate) fn merge_with(&mut self, middle: T, right: Node<T>, degree: Degree) {
        let merged = self.keys.len() + 1 + right.keys.len();
        self.ensure_capacity(merged, degree);

        self.keys.push(middle);
        self.keys.extend(right.keys);
        self.children.extend(right.children);
    }

    /// Binary-searches this node's keys.
    #[inline]
    pub(crate) fn search<C: Compare<T>>(&self, key: &T, cmp: &C) -> SearchResult {
        match self.keys.binary_search_by(|probe| cmp.compare(probe, key)) {
            Ok(idx) => SearchResult::Found(idx),
            Err(idx) => SearchResult::NotFound(idx),
        }
    }

    /// Calls `f` on every key of this subtree in ascending order.
    pub(crate) fn for_each<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a T),
    {
        if self.is_leaf() {
            self.keys.iter().for_each(|key| f(key));
            return;
        }
        for (key, child) in self.keys.iter().zip(&self.children) {
            child.for_each(f);
            f(key);
        }
        if let Some(last) = self.children.last() {
            last.for_each(f);
        }
    }
}

// Parent-side operations: these edit a child (or a pair of adjacent children)
// together with the separator keys of `self`.
impl<T> Node<T> {
    /// Splits the full child at `index`, promoting its median into `self`.
    pub(crate) fn split_child(&mut self, index: usize, degree: Degree) {
        let Some((median, right)) = self.children[index].split(degree) else {
            return;
        };
        self.insert_key_at(index, median, degree);
        self.insert_child_at(index + 1, Box::new(right), degree);
    }

    /// Merges `children[index + 1]` and the separator `keys[index]` into
    /// `children[index]`. The right child is dropped.
    pub(crate) fn merge_children(&mut self, index: usize, degree: Degree) {
        let middle = self.keys.remove(index);
        let right = self.children.remove(index + 1);
        self.children[index].merge_with(middle, *right, degree);
    }

    /// Moves the last key/child of `children[index - 1]` through the separator
    /// into the front of `children[index]`.
    pub(crate) fn rotate_from_left(&mut self, index: usize, degree: Degree) {
        let Some((key, child)) = self.children[index - 1].borrow_last() else {
            return;
        };
        let separator = self.replace_key(index - 1, key);
        self.children[index].push_front(separator, child, degree);
    }

    /// Moves the first key/child of `children[index + 1]` through the separator
    /// into the back of `children[index]`.
    pub(crate) fn rotate_from_right(&mut self, index: usize, degree: Degree) {
        let Some((key, child)) = self.children[index + 1].borrow_first() else {
            return;
        };
        let separator = self.replace_key(index, key);
        self.children[index].push_back(separator, child, degree);
    }

    /// Makes sure `children[index]` holds at least `t` keys before a removal
    /// descends into it. Returns the index of the child to descend into, which
    /// moves left by one when the child had to merge into its left sibling.
    pub(crate) fn fill_child(&mut self, index: usize, degree: Degree) -> usize {
        if self.children[index].can_lend(degree) {
            return index;
        }

        let has_left = index > 0;
        let has_right = index < self.keys.len();

        if has_left && self.children[index - 1].can_lend(degree) {
            self.rotate_from_left(index, degree);
            index
        } else if has_right && self.children[index + 1].can_lend(degree) {
            self.rotate_from_right(index, degree);
            index
        } else if has_right {
            self.merge_children(index, degree);
            index
        } else {
            self.merge_children(index - 1, degree);
            index - 1
        }
    }
}
