use alloc::vec::Vec;

use super::handle::{Handle, Link};
use super::node::Node;
use super::raw_wavl_tree::RawWavlTree;

impl<K, V> RawWavlTree<K, V> {
    /// Leftmost node of the subtree rooted at `handle`.
    pub(crate) fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.node(handle).left() {
            handle = left;
        }
        handle
    }

    /// Rightmost node of the subtree rooted at `handle`.
    pub(crate) fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.node(handle).right() {
            handle = right;
        }
        handle
    }

    /// In-order successor, found through parent links.
    pub(crate) fn successor(&self, handle: Handle) -> Link {
        if let Some(right) = self.node(handle).right() {
            return Some(self.leftmost(right));
        }
        let mut child = handle;
        let mut parent = self.node(handle).parent();
        while let Some(p) = parent {
            if self.node(p).left() == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.node(p).parent();
        }
        None
    }

    /// In-order predecessor, found through parent links.
    pub(crate) fn predecessor(&self, handle: Handle) -> Link {
        if let Some(left) = self.node(handle).left() {
            return Some(self.rightmost(left));
        }
        let mut child = handle;
        let mut parent = self.node(handle).parent();
        while let Some(p) = parent {
            if self.node(p).right() == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.node(p).parent();
        }
        None
    }

    /// Visits every node in key order. Recursion depth is bounded by the
    /// tree height.
    pub(crate) fn for_each_in_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<K, V>),
    {
        self.walk(self.root, &mut visit);
    }

    fn walk<'a, F>(&'a self, link: Link, visit: &mut F)
    where
        F: FnMut(&'a Node<K, V>),
    {
        let Some(h) = link else {
            return;
        };
        let node = self.node(h);
        self.walk(node.left(), visit);
        visit(node);
        self.walk(node.right(), visit);
    }

    /// Keys in ascending order.
    pub(crate) fn sorted_keys(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len());
        self.for_each_in_order(|node| keys.push(node.key()));
        keys
    }

    /// Values ordered by their keys, aligned with [`Self::sorted_keys`].
    pub(crate) fn sorted_values(&self) -> Vec<&V> {
        let mut values = Vec::with_capacity(self.len());
        self.for_each_in_order(|node| values.push(node.value()));
        values
    }

    /// Empties the tree into a vector of entries in key order.
    pub(crate) fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut order = Vec::with_capacity(self.len());
        let mut current = self.min;
        while let Some(h) = current {
            order.push(h);
            current = self.successor(h);
        }
        order.into_iter().map(|h| self.nodes.take(h).into_entry()).collect()
    }
}
