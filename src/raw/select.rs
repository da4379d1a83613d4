use core::borrow::Borrow;
use core::cmp::Ordering;

use super::handle::Handle;
use super::raw_wavl_tree::RawWavlTree;

impl<K, V> RawWavlTree<K, V> {
    /// Finds the node holding the `i`-th smallest key, counting from 1.
    ///
    /// Starts at the cached minimum and climbs until a subtree covers `i`,
    /// so ranks near the front are found without visiting the root.
    pub(crate) fn select(&self, i: usize) -> Option<Handle> {
        if i == 0 || i > self.len() {
            return None;
        }

        let mut remaining = i;
        let mut current = self.min?;
        loop {
            // `current` is the leftmost node of every subtree on the way up,
            // so `remaining` counts from the first key of that subtree.
            while self.node(current).size().to_usize() < remaining {
                current = self.node(current).parent()?;
            }
            remaining -= self.size_of(self.node(current).left());
            if remaining == 1 {
                return Some(current);
            }
            remaining -= 1;
            let right = self.node(current).right()?;
            current = self.leftmost(right);
        }
    }

    pub(crate) fn select_key_value(&self, i: usize) -> Option<(&K, &V)> {
        let node = self.node(self.select(i)?);
        Some((node.key(), node.value()))
    }

    pub(crate) fn select_mut(&mut self, i: usize) -> Option<(&K, &mut V)> {
        let h = self.select(i)?;
        Some(self.node_mut(h).entry_mut())
    }
}

impl<K: Ord, V> RawWavlTree<K, V> {
    /// Position of `key` in key order, counting from 1.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut before = 0;
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.node(h);
            match key.cmp(node.key().borrow()) {
                Ordering::Equal => return Some(before + self.size_of(node.left()) + 1),
                Ordering::Greater => {
                    before += self.size_of(node.left()) + 1;
                    current = node.right();
                }
                Ordering::Less => current = node.left(),
            }
        }
        None
    }
}
