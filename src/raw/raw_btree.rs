use alloc::boxed::Box;
use core::cmp::Ordering;
use core::mem;

use super::degree::Degree;
use super::node::{Node, SearchResult};
use crate::compare::Compare;

/// The core B-tree implementation backing `BTree`.
///
/// Insertion splits full nodes on the way down and removal fills minimal
/// nodes on the way down, so both finish in a single pass from the root.
#[derive(Clone)]
pub(crate) struct RawBTree<T, C> {
    /// The root node. An empty tree is a root leaf without keys.
    root: Node<T>,
    /// Minimum degree, fixed for the lifetime of the tree.
    degree: Degree,
    /// Total order over the elements.
    cmp: C,
    /// Total number of elements in the tree.
    len: usize,
}

impl<T, C> RawBTree<T, C> {
    /// Creates a new, empty tree.
    pub(crate) fn new(degree: Degree, cmp: C) -> Self {
        Self {
            root: Node::new_leaf(),
            degree,
            cmp,
            len: 0,
        }
    }

    /// Returns the number of elements in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) const fn degree(&self) -> Degree {
        self.degree
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.cmp
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Node<T> {
        &self.root
    }

    /// Clears all elements from the tree.
    pub(crate) fn clear(&mut self) {
        self.root = Node::new_leaf();
        self.len = 0;
    }

    /// Returns the number of levels, counting the root. An empty tree has
    /// height 1.
    pub(crate) fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &self.root;
        while !node.is_leaf() {
            node = node.child(0);
            height += 1;
        }
        height
    }

    /// Returns the smallest element.
    pub(crate) fn first(&self) -> Option<&T> {
        let mut node = &self.root;
        while !node.is_leaf() {
            node = node.child(0);
        }
        node.first_key()
    }

    /// Returns the largest element.
    pub(crate) fn last(&self) -> Option<&T> {
        let mut node = &self.root;
        while !node.is_leaf() {
            node = node.child(node.child_count() - 1);
        }
        node.last_key()
    }

    /// Calls `f` on every element in ascending order.
    pub(crate) fn for_each<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a T),
    {
        self.root.for_each(&mut f);
    }

    /// Removes the subtree maximum. `node` must hold at least `t` keys, or be
    /// the root.
    fn remove_max(mut node: &mut Node<T>, degree: Degree) -> Option<T> {
        loop {
            if node.is_leaf() {
                let last = node.key_count().checked_sub(1)?;
                return Some(node.remove_key_at(last));
            }
            let index = node.fill_child(node.key_count(), degree);
            node = node.child_mut(index);
        }
    }

    /// Removes the subtree minimum. `node` must hold at least `t` keys, or be
    /// the root.
    fn remove_min(mut node: &mut Node<T>, degree: Degree) -> Option<T> {
        loop {
            if node.is_leaf() {
                if node.key_count() == 0 {
                    return None;
                }
                return Some(node.remove_key_at(0));
            }
            let index = node.fill_child(0, degree);
            node = node.child_mut(index);
        }
    }

    /// Makes the only child of a key-less root the new root.
    fn collapse_root(&mut self) {
        if self.root.key_count() > 0 || self.root.is_leaf() {
            return;
        }
        let child = self.root.remove_child_at(0);
        self.root = *child;
        tracing::trace!(degree = self.degree.get(), height = self.height(), "root collapsed");
    }
}

impl<T, C: Compare<T>> RawBTree<T, C> {
    /// Searches for an element equal to `key`.
    pub(crate) fn search(&self, key: &T) -> Option<&T> {
        let mut node = &self.root;
        loop {
            match node.search(key, &self.cmp) {
                SearchResult::Found(idx) => return Some(node.key(idx)),
                SearchResult::NotFound(_) if node.is_leaf() => return None,
                SearchResult::NotFound(idx) => node = node.child(idx),
            }
        }
    }

    /// Returns true if the tree holds an element equal to `key`.
    pub(crate) fn contains(&self, key: &T) -> bool {
        self.search(key).is_some()
    }

    /// Searches for an element equal to `key`, mutably. Callers must not change
    /// how the element orders.
    fn search_mut(&mut self, key: &T) -> Option<&mut T> {
        let cmp = &self.cmp;
        let mut node = &mut self.root;
        loop {
            match node.search(key, cmp) {
                SearchResult::Found(idx) => return Some(node.key_mut(idx)),
                SearchResult::NotFound(_) if node.is_leaf() => return None,
                SearchResult::NotFound(idx) => node = node.child_mut(idx),
            }
        }
    }

    /// Inserts an element. Returns false, leaving the tree untouched, if an
    /// equal element is already present.
    pub(crate) fn insert(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }

        if self.root.is_full(self.degree) {
            self.split_root();
        }
        Self::insert_nonfull(&mut self.root, item, self.degree, &self.cmp);
        self.len += 1;
        true
    }

    /// Inserts `item`, or swaps it for the stored equal element and returns
    /// the latter.
    pub(crate) fn replace(&mut self, item: T) -> Option<T> {
        if let Some(slot) = self.search_mut(&item) {
            return Some(mem::replace(slot, item));
        }
        self.insert(item);
        None
    }

    /// Grows the tree by one level: the full root becomes the only child of
    /// a new root and is split there.
    fn split_root(&mut self) {
        let old_root = mem::replace(&mut self.root, Node::new_leaf());
        self.root = Node::new_internal(Box::new(old_root));
        self.root.split_child(0, self.degree);
        tracing::trace!(degree = self.degree.get(), height = self.height(), "root split");
    }

    /// Inserts into a subtree whose root is not full, splitting full children
    /// before descending into them.
    fn insert_nonfull(mut node: &mut Node<T>, item: T, degree: Degree, cmp: &C) {
        loop {
            let mut idx = match node.search(&item, cmp) {
                SearchResult::Found(idx) | SearchResult::NotFound(idx) => idx,
            };

            if node.is_leaf() {
                node.insert_key_at(idx, item, degree);
                return;
            }

            if node.child(idx).is_full(degree) {
                node.split_child(idx, degree);
                if cmp.compare(&item, node.key(idx)) == Ordering::Greater {
                    idx += 1;
                }
            }
            node = node.child_mut(idx);
        }
    }

    /// Removes the element equal to `key` and returns it. An absent key leaves
    /// the tree untouched.
    pub(crate) fn remove(&mut self, key: &T) -> Option<T> {
        if !self.contains(key) {
            return None;
        }

        let removed = Self::remove_from(&mut self.root, key, self.degree, &self.cmp);
        self.collapse_root();
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Removes `key` from the subtree rooted at `node`, filling every child
    /// before descending into it.
    fn remove_from(mut node: &mut Node<T>, key: &T, degree: Degree, cmp: &C) -> Option<T> {
        loop {
            match node.search(key, cmp) {
                SearchResult::Found(idx) if node.is_leaf() => return Some(node.remove_key_at(idx)),
                SearchResult::Found(idx) => {
                    if node.child(idx).can_lend(degree) {
                        let predecessor = Self::remove_max(node.child_mut(idx), degree)?;
                        return Some(node.replace_key(idx, predecessor));
                    }
                    if node.child(idx + 1).can_lend(degree) {
                        let successor = Self::remove_min(node.child_mut(idx + 1), degree)?;
                        return Some(node.replace_key(idx, successor));
                    }
                    // Both neighbours are minimal: the key sinks into their merge.
                    node.merge_children(idx, degree);
                    node = node.child_mut(idx);
                }
                SearchResult::NotFound(_) if node.is_leaf() => return None,
                SearchResult::NotFound(idx) => {
                    let idx = node.fill_child(idx, degree);
                    node = node.child_mut(idx);
                }
            }
        }
    }
}
