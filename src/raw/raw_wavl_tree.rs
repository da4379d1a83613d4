use core::borrow::Borrow;
use core::cmp::Ordering;

use super::arena::Arena;
use super::handle::{Handle, Link};
use super::node::{Node, SENTINEL_RANK, Side};
use super::size::Size;
use crate::Error;

/// The core WAVL tree backing `WavlTreeMap`.
#[derive(Clone)]
pub(crate) struct RawWavlTree<K, V> {
    /// Arena owning every node. Child and parent links are handles into it.
    pub(super) nodes: Arena<Node<K, V>>,
    /// Handle to the root node, or `None` when the tree is empty.
    pub(super) root: Link,
    /// Cached node holding the smallest key.
    pub(super) min: Link,
    /// Cached node holding the largest key.
    pub(super) max: Link,
}

impl<K, V> RawWavlTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            min: None,
            max: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            min: None,
            max: None,
        }
    }

    /// Returns the number of key-value pairs, read off the root's subtree size.
    pub(crate) fn len(&self) -> usize {
        self.size_of(self.root)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.min = None;
        self.max = None;
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Rank of a child slot; the external node ranks -1.
    #[inline]
    pub(crate) fn rank(&self, link: Link) -> i32 {
        link.map_or(SENTINEL_RANK, |h| self.nodes.get(h).rank())
    }

    /// Subtree size of a child slot; the external node has size 0.
    #[inline]
    pub(crate) fn size_of(&self, link: Link) -> usize {
        link.map_or(0, |h| self.nodes.get(h).size().to_usize())
    }

    /// Puts `new` in the slot of `parent` that currently holds `old`, or at
    /// the root when `parent` is `None`.
    pub(super) fn replace_child(&mut self, parent: Link, old: Handle, new: Link) {
        match parent {
            None => self.root = new,
            Some(p) => {
                let node = self.nodes.get_mut(p);
                let side = node.side_of(old);
                node.set_child(side, new);
            }
        }
    }

    pub(crate) fn first(&self) -> Link {
        self.min
    }

    pub(crate) fn last(&self) -> Link {
        self.max
    }

    pub(crate) fn first_key_value(&self) -> Option<(&K, &V)> {
        let node = self.nodes.get(self.min?);
        Some((node.key(), node.value()))
    }

    pub(crate) fn last_key_value(&self) -> Option<(&K, &V)> {
        let node = self.nodes.get(self.max?);
        Some((node.key(), node.value()))
    }

    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let (key, value, _) = self.delete_node(self.min?);
        Some((key, value))
    }

    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let (key, value, _) = self.delete_node(self.max?);
        Some((key, value))
    }

    /// Unlinks `target` and returns its entry with the number of rebalancing
    /// operations performed.
    ///
    /// A node with a real right child trades entries with its in-order
    /// successor, and the successor (which has no left child) is unlinked
    /// instead. The cached extremes are moved before the structure changes.
    fn delete_node(&mut self, target: Handle) -> (K, V, usize) {
        let node = self.nodes.get(target);
        let (left, right, parent) = (node.left(), node.right(), node.parent());

        if self.max == Some(target) {
            self.max = match left {
                Some(l) => Some(self.rightmost(l)),
                None => parent,
            };
        }
        if self.min == Some(target) {
            self.min = match right {
                Some(r) => Some(self.leftmost(r)),
                None => parent,
            };
        }

        let victim = match right {
            Some(r) => {
                let successor = self.leftmost(r);
                let (target_node, successor_node) = self.nodes.get_pair_mut(target, successor);
                target_node.swap_entry(successor_node);
                // The successor's entry now lives in `target`.
                if self.max == Some(successor) {
                    self.max = Some(target);
                }
                if self.min == Some(successor) {
                    self.min = Some(target);
                }
                successor
            }
            None => target,
        };

        let node = self.nodes.get(victim);
        let parent = node.parent();
        let child = node.left().or(node.right());

        let mut ancestor = parent;
        while let Some(a) = ancestor {
            let node = self.nodes.get_mut(a);
            node.set_size(node.size().decrement());
            ancestor = node.parent();
        }

        let side = parent.map(|p| self.nodes.get(p).side_of(victim));
        if let Some(c) = child {
            self.nodes.get_mut(c).set_parent(parent);
        }
        self.replace_child(parent, victim, child);
        let (key, value) = self.nodes.take(victim).into_entry();

        let ops = match (parent, side) {
            (Some(p), Some(side)) => {
                let node = self.nodes.get(p);
                if node.is_leaf() && node.rank() > 0 {
                    // A leaf must be rank 0 before the case analysis can run.
                    let grandparent = node.parent();
                    self.nodes.get_mut(p).set_rank(0);
                    1 + grandparent.map_or(0, |g| {
                        let side = self.nodes.get(g).side_of(p);
                        self.rebalance_after_delete(g, side)
                    })
                } else {
                    self.rebalance_after_delete(p, side)
                }
            }
            _ => 0,
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(ops, len = self.len(), "delete: rebalanced");

        (key, value, ops)
    }
}

impl<K: Ord, V> RawWavlTree<K, V> {
    /// Descends from the root to the node holding `key`.
    pub(crate) fn find<Q>(&self, key: &Q) -> Link
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.nodes.get(h);
            current = match key.cmp(node.key().borrow()) {
                Ordering::Equal => return Some(h),
                Ordering::Greater => node.right(),
                Ordering::Less => node.left(),
            };
        }
        None
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(key).map(|h| self.nodes.get(h).value())
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let h = self.find(key)?;
        Some(self.nodes.get_mut(h).value_mut())
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.nodes.get(self.find(key)?);
        Some((node.key(), node.value()))
    }

    /// Inserts a new key, returning the number of rebalancing operations.
    ///
    /// An existing key is rejected with [`Error::DuplicateKey`] before anything
    /// is touched.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Result<usize, Error> {
        if self.find(&key).is_some() {
            return Err(Error::DuplicateKey);
        }
        assert!(
            self.len() < Size::MAX,
            "`RawWavlTree::insert()` - tree is at maximum capacity ({})",
            Size::MAX
        );

        let Some(root) = self.root else {
            let leaf = self.nodes.alloc(Node::leaf(key, value, None));
            self.root = Some(leaf);
            self.min = Some(leaf);
            self.max = Some(leaf);
            return Ok(0);
        };

        // Every node on the way down gains one descendant.
        let mut current = root;
        let side = loop {
            let node = self.nodes.get_mut(current);
            node.set_size(node.size().increment());
            let side = if key > *node.key() { Side::Right } else { Side::Left };
            match node.child(side) {
                Some(next) => current = next,
                None => break side,
            }
        };

        let leaf = self.nodes.alloc(Node::leaf(key, value, Some(current)));
        self.nodes.get_mut(current).set_child(side, Some(leaf));

        if side == Side::Left && self.min == Some(current) {
            self.min = Some(leaf);
        }
        if side == Side::Right && self.max == Some(current) {
            self.max = Some(leaf);
        }

        let ops = self.rebalance_after_insert(leaf);

        #[cfg(feature = "tracing")]
        tracing::trace!(ops, len = self.len(), "insert: rebalanced");

        Ok(ops)
    }

    /// Removes `key`, returning the number of rebalancing operations.
    pub(crate) fn delete<Q>(&mut self, key: &Q) -> Result<usize, Error>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let target = self.find(key).ok_or(Error::KeyNotFound)?;
        let (_, _, ops) = self.delete_node(target);
        Ok(ops)
    }

    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let target = self.find(key)?;
        let (key, value, _) = self.delete_node(target);
        Some((key, value))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::uninlined_format_args, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::fmt::Debug;
    use proptest::prelude::*;

    impl<K: Ord + Debug, V> RawWavlTree<K, V> {
        /// Validates every WAVL invariant. Panics with a descriptive message if
        /// any is violated.
        pub(crate) fn validate_invariants(&self) {
            let Some(root) = self.root else {
                assert_eq!(self.len(), 0, "Empty tree should have len 0");
                assert_eq!(self.nodes.len(), 0, "Empty tree should own no nodes");
                assert!(self.min.is_none(), "Empty tree should have no min");
                assert!(self.max.is_none(), "Empty tree should have no max");
                return;
            };

            let mut errors: Vec<String> = Vec::new();

            if self.nodes.get(root).parent().is_some() {
                errors.push("Root has a parent".into());
            }

            let count = self.validate_node(root, None, None, &mut errors);
            if count != self.nodes.len() {
                errors.push(alloc::format!("Reachable nodes {} != live nodes {}", count, self.nodes.len()));
            }
            if self.min != Some(self.leftmost(root)) {
                errors.push(alloc::format!("min {:?} is not the leftmost node", self.min));
            }
            if self.max != Some(self.rightmost(root)) {
                errors.push(alloc::format!("max {:?} is not the rightmost node", self.max));
            }

            assert!(errors.is_empty(), "Tree invariant violations:\n{}", errors.join("\n"));
        }

        fn validate_node<'a>(
            &'a self,
            handle: Handle,
            lower: Option<&'a K>,
            upper: Option<&'a K>,
            errors: &mut Vec<String>,
        ) -> usize {
            let node = self.nodes.get(handle);
            let key = node.key();

            if lower.is_some_and(|l| key <= l) || upper.is_some_and(|u| key >= u) {
                errors.push(alloc::format!("Key {:?} out of order ({:?}, {:?})", key, lower, upper));
            }

            for side in [Side::Left, Side::Right] {
                let child = node.child(side);
                let diff = node.rank() - self.rank(child);
                if !(1..=2).contains(&diff) {
                    errors.push(alloc::format!("Key {:?} has {:?} rank difference {}", key, side, diff));
                }
                if let Some(c) = child
                    && self.nodes.get(c).parent() != Some(handle)
                {
                    errors.push(alloc::format!("Key {:?} has {:?} child with a wrong parent link", key, side));
                }
            }

            if node.is_leaf() && node.rank() != 0 {
                errors.push(alloc::format!("Leaf {:?} has rank {}", key, node.rank()));
            }

            let left = node.left().map_or(0, |l| self.validate_node(l, lower, Some(key), errors));
            let right = node.right().map_or(0, |r| self.validate_node(r, Some(key), upper, errors));
            let size = 1 + left + right;
            if node.size().to_usize() != size {
                errors.push(alloc::format!("Key {:?} stores size {} but has {}", key, node.size().to_usize(), size));
            }
            size
        }

        fn rank_of_key(&self, key: &K) -> i32 {
            self.rank(self.find(key))
        }
    }

    /// Builds a tree from `(key, rank, parent key)` triples, parents first.
    fn build(layout: &[(i32, u8, Option<i32>)]) -> RawWavlTree<i32, i32> {
        fn fix_sizes(tree: &mut RawWavlTree<i32, i32>, link: Link) -> usize {
            let Some(h) = link else {
                return 0;
            };
            let (left, right) = (tree.node(h).left(), tree.node(h).right());
            let size = 1 + fix_sizes(tree, left) + fix_sizes(tree, right);
            tree.node_mut(h).set_size(Size::from_usize(size));
            size
        }

        let mut tree = RawWavlTree::new();
        for &(key, rank, parent) in layout {
            let parent = parent.map(|p| tree.find(&p).expect("parent must be listed first"));
            let h = tree.nodes.alloc(Node::leaf(key, key * 10, parent));
            tree.node_mut(h).set_rank(rank);
            match parent {
                None => tree.root = Some(h),
                Some(p) => {
                    let side = if key > *tree.node(p).key() { Side::Right } else { Side::Left };
                    tree.node_mut(p).set_child(side, Some(h));
                }
            }
        }
        let root = tree.root;
        fix_sizes(&mut tree, root);
        tree.min = root.map(|r| tree.leftmost(r));
        tree.max = root.map(|r| tree.rightmost(r));
        tree.validate_invariants();
        tree
    }

    fn tree_from(keys: &[i32]) -> RawWavlTree<i32, i32> {
        let mut tree = RawWavlTree::new();
        for &k in keys {
            tree.insert(k, k * 10).expect("distinct keys");
            tree.validate_invariants();
        }
        tree
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Delete(i32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0i32..500).prop_map(Op::Insert),
            2 => (0i32..500).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn invariants_hold_after_every_operation(ops in prop::collection::vec(op_strategy(), 0..600)) {
            let mut tree: RawWavlTree<i32, i32> = RawWavlTree::new();
            let mut model: BTreeMap<i32, i32> = BTreeMap::new();

            for op in ops {
                match op {
                    Op::Insert(k) => {
                        let expected = if model.contains_key(&k) {
                            Err(Error::DuplicateKey)
                        } else {
                            model.insert(k, -k);
                            Ok(())
                        };
                        prop_assert_eq!(tree.insert(k, -k).map(|_| ()), expected);
                    }
                    Op::Delete(k) => {
                        let expected = model.remove(&k).map(|_| ()).ok_or(Error::KeyNotFound);
                        prop_assert_eq!(tree.delete(&k).map(|_| ()), expected);
                    }
                }
                tree.validate_invariants();
                prop_assert_eq!(tree.len(), model.len());
                prop_assert_eq!(tree.first_key_value(), model.first_key_value());
                prop_assert_eq!(tree.last_key_value(), model.last_key_value());
            }
        }

        #[test]
        fn insert_then_delete_everything_empties_the_tree(
            keys in prop::collection::btree_set(any::<i32>(), 0..300),
            seed in any::<u64>(),
        ) {
            let keys: Vec<i32> = keys.into_iter().collect();
            let mut tree: RawWavlTree<i32, i32> = RawWavlTree::new();
            for &k in &keys {
                tree.insert(k, k).unwrap();
            }

            // Delete in a scrambled order.
            let mut order = keys.clone();
            let mut x = seed | 1;
            for i in (1..order.len()).rev() {
                x = x.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                order.swap(i, (x >> 33) as usize % (i + 1));
            }
            for k in order {
                prop_assert!(tree.delete(&k).is_ok());
                tree.validate_invariants();
            }

            prop_assert!(tree.is_empty());
            prop_assert!(tree.first_key_value().is_none());
            prop_assert!(tree.last_key_value().is_none());
        }

        #[test]
        fn insert_rebalancing_is_amortized_constant(count in 1usize..2000) {
            let mut tree: RawWavlTree<usize, ()> = RawWavlTree::new();
            let total: usize = (0..count).map(|k| tree.insert(k, ()).unwrap()).sum();
            // Each promotion consumes a 1,1 node, and an insertion creates at most four.
            prop_assert!(total <= 7 * count, "{} ops for {} inserts", total, count);
        }
    }

    #[test]
    fn empty_tree() {
        let tree: RawWavlTree<i32, i32> = RawWavlTree::new();
        tree.validate_invariants();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.get(&1).is_none());
        assert!(tree.first_key_value().is_none());
    }

    #[test]
    fn first_insert_needs_no_rebalancing() {
        let mut tree = RawWavlTree::new();
        assert_eq!(tree.insert(1, 'a'), Ok(0));
        assert_eq!(tree.first_key_value(), Some((&1, &'a')));
        assert_eq!(tree.last_key_value(), Some((&1, &'a')));
        tree.validate_invariants();
    }

    #[test]
    fn duplicate_insert_is_a_no_op() {
        let mut tree = tree_from(&[10, 20, 5]);
        assert_eq!(tree.insert(20, 0), Err(Error::DuplicateKey));
        tree.validate_invariants();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(&20), Some(&200));
    }

    #[test]
    fn missing_delete_is_a_no_op() {
        let mut tree = tree_from(&[10, 20, 5]);
        assert_eq!(tree.delete(&7), Err(Error::KeyNotFound));
        tree.validate_invariants();
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn insert_promotion_counts_each_step() {
        let mut tree = tree_from(&[2]);
        // 1 becomes a 0-child of 2; 2 has an external right child, so promote.
        assert_eq!(tree.insert(1, 0), Ok(1));
        assert_eq!(tree.rank_of_key(&2), 1);
        tree.validate_invariants();
    }

    #[test]
    fn insert_single_rotation() {
        let mut tree = tree_from(&[1, 2]);
        // 3 promotes 2, which ties 1 while 1's left sibling is external.
        assert_eq!(tree.insert(3, 0), Ok(2));
        tree.validate_invariants();
        assert_eq!(tree.root.map(|r| *tree.node(r).key()), Some(2));
        assert_eq!(tree.rank_of_key(&2), 1);
        assert_eq!(tree.rank_of_key(&1), 0);
        assert_eq!(tree.rank_of_key(&3), 0);
    }

    #[test]
    fn insert_double_rotation() {
        let mut tree = tree_from(&[1, 3]);
        // 2 promotes 3, then the zig-zag lifts 2 over both.
        assert_eq!(tree.insert(2, 0), Ok(4));
        tree.validate_invariants();
        assert_eq!(tree.root.map(|r| *tree.node(r).key()), Some(2));
        assert_eq!(tree.rank_of_key(&2), 1);
    }

    #[test]
    fn delete_leaf_forcing_counts_one() {
        // 2 is the root with a single child 3.
        let mut tree = tree_from(&[2, 3]);
        assert_eq!(tree.rank_of_key(&2), 1);
        assert_eq!(tree.delete(&3), Ok(1));
        assert_eq!(tree.rank_of_key(&2), 0);
        tree.validate_invariants();
    }

    #[test]
    fn delete_single_rotation() {
        // Ascending inserts build a perfect tree of 7 with every rank difference 1.
        let mut tree = tree_from(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.rank_of_key(&4), 2);

        // Leaf 1 leaves 2 unary with rank 1, which is legal.
        assert_eq!(tree.delete(&1), Ok(0));
        tree.validate_invariants();

        // Leaf 3 forces 2 down to rank 0, making it a 2-child of 4.
        assert_eq!(tree.delete(&3), Ok(1));
        tree.validate_invariants();
        assert_eq!(tree.rank_of_key(&2), 0);

        // 4 is left with an external 3-child; 6's outer child 7 is a 1-child.
        assert_eq!(tree.delete(&2), Ok(2));
        tree.validate_invariants();
        assert_eq!(tree.root.map(|r| *tree.node(r).key()), Some(6));
        assert_eq!(tree.rank_of_key(&6), 2);
        assert_eq!(tree.rank_of_key(&4), 1);
    }

    #[test]
    fn delete_single_rotation_then_leaf_forcing() {
        // 2 (rank 2) over leaf 1 and 3 (rank 1), which has a right leaf 4.
        let mut tree = tree_from(&[2, 1, 3, 4]);
        assert_eq!(tree.rank_of_key(&2), 2);
        assert_eq!(tree.delete(&1), Ok(3));
        tree.validate_invariants();
        assert_eq!(tree.root.map(|r| *tree.node(r).key()), Some(3));
        assert_eq!(tree.rank_of_key(&3), 2);
        assert_eq!(tree.rank_of_key(&2), 0);
    }

    #[test]
    fn delete_double_rotation() {
        // 2 (rank 2) over leaf 1 and 4 (rank 1), which has a left leaf 3.
        let mut tree = tree_from(&[2, 1, 4, 3]);
        assert_eq!(tree.delete(&1), Ok(3));
        tree.validate_invariants();
        assert_eq!(tree.root.map(|r| *tree.node(r).key()), Some(3));
        assert_eq!(tree.rank_of_key(&3), 2);
        assert_eq!(tree.rank_of_key(&2), 0);
        assert_eq!(tree.rank_of_key(&4), 0);
    }

    #[test]
    fn delete_demotes_a_3_2_parent() {
        let mut tree = tree_from(&[1, 2, 3, 4, 5, 6, 7]);
        for (key, ops) in [(1, 0), (3, 1), (5, 0), (7, 1)] {
            assert_eq!(tree.delete(&key), Ok(ops), "delete({})", key);
            tree.validate_invariants();
        }
        // 4 (rank 2) now has leaves 2 and 6 as 2-children.
        assert_eq!(tree.rank_of_key(&4), 2);
        assert_eq!(tree.delete(&6), Ok(1));
        tree.validate_invariants();
        assert_eq!(tree.rank_of_key(&4), 1);
        assert_eq!(tree.last_key_value(), Some((&4, &40)));
    }

    #[test]
    fn delete_demotes_parent_and_2_2_sibling() {
        let mut tree = build(&[
            (4, 3, None),
            (2, 1, Some(4)),
            (8, 2, Some(4)),
            (1, 0, Some(2)),
            (6, 0, Some(8)),
            (10, 0, Some(8)),
        ]);
        // Forcing leaf 2 to rank 0 makes it a 3-child of 4, whose sibling 8 is 2,2.
        assert_eq!(tree.delete(&1), Ok(3));
        tree.validate_invariants();
        assert_eq!(tree.rank_of_key(&4), 2);
        assert_eq!(tree.rank_of_key(&8), 1);
        assert_eq!(tree.rank_of_key(&2), 0);
    }

    #[test]
    fn delete_with_two_children_uses_the_successor() {
        let mut tree = tree_from(&[10, 20, 5, 15, 25]);
        assert_eq!(tree.remove_entry(&10), Some((10, 100)));
        tree.validate_invariants();
        assert_eq!(tree.get(&15), Some(&150));
        assert!(tree.get(&10).is_none());
        assert_eq!(tree.first_key_value(), Some((&5, &50)));
        assert_eq!(tree.last_key_value(), Some((&25, &250)));
    }

    #[test]
    fn extremes_follow_pops() {
        let mut tree = tree_from(&[4, 2, 6, 1, 3, 5, 7]);
        let mut popped = Vec::new();
        while let Some((k, _)) = tree.pop_first() {
            popped.push(k);
            tree.validate_invariants();
            if let Some((k, _)) = tree.pop_last() {
                popped.push(k);
                tree.validate_invariants();
            }
        }
        assert_eq!(popped, [1, 7, 2, 6, 3, 5, 4]);
        assert!(tree.is_empty());
    }

    #[test]
    fn max_moves_into_the_node_receiving_the_successor() {
        // Root 1 with right leaf 2: 2 is both the successor of 1 and the max.
        let mut tree = tree_from(&[1, 2]);
        assert_eq!(tree.delete(&1), Ok(1));
        tree.validate_invariants();
        assert_eq!(tree.last_key_value(), Some((&2, &20)));
        assert_eq!(tree.first_key_value(), Some((&2, &20)));
    }

    #[test]
    fn clear_resets_everything() {
        let mut tree = tree_from(&[3, 1, 2]);
        tree.clear();
        tree.validate_invariants();
        assert!(tree.insert(9, 9).is_ok());
        tree.validate_invariants();
    }
}
