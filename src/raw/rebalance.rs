//! Rank maintenance after insertion and deletion.
//!
//! Conventions follow Haeupler, Sen and Tarjan, "Rank-Balanced Trees": the
//! rank difference of a node is its parent's rank minus its own, and a node is
//! an `i`-child when its rank difference is `i`. Every real node must be a
//! 1-child or a 2-child and every leaf must have rank 0. An insertion can
//! create one 0-child, a deletion one 3-child; the walks below push that
//! violation up the tree until it disappears or a rotation absorbs it.
//!
//! Both walks return the number of rebalancing steps taken. Each promotion,
//! demotion and rotation counts as one.

use super::handle::Handle;
use super::node::Side;
use super::raw_wavl_tree::RawWavlTree;
use super::size::Size;

impl<K, V> RawWavlTree<K, V> {
    /// Rotates `x` above its parent.
    ///
    /// The parent adopts `x`'s inner subtree, becomes `x`'s child on the
    /// opposite side and loses one rank. `x` takes the parent's place, and
    /// the root if the parent was the root.
    pub(super) fn rotate(&mut self, x: Handle) -> usize {
        let p = self.node(x).parent().expect("`RawWavlTree::rotate()` - cannot rotate the root!");
        let side = self.node(p).side_of(x);
        let inner = self.node(x).child(side.opposite());
        let outer_size = self.size_of(self.node(x).child(side));
        let grandparent = self.node(p).parent();
        let p_size = self.node(p).size();

        {
            let parent = self.node_mut(p);
            parent.set_child(side, inner);
            parent.set_parent(Some(x));
            parent.set_size(Size::from_usize(p_size.to_usize() - outer_size - 1));
            parent.demote();
        }
        if let Some(i) = inner {
            self.node_mut(i).set_parent(Some(p));
        }
        self.replace_child(grandparent, p, Some(x));
        {
            let node = self.node_mut(x);
            node.set_child(side.opposite(), Some(p));
            node.set_parent(grandparent);
            node.set_size(p_size);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(x = x.to_index(), parent = p.to_index(), "rotate");

        1
    }

    /// Restores the rank rule after `x` became a leaf, walking upward while
    /// `x` is a 0-child.
    pub(super) fn rebalance_after_insert(&mut self, mut x: Handle) -> usize {
        let mut ops = 0;
        loop {
            let Some(p) = self.node(x).parent() else {
                return ops;
            };
            let p_rank = self.node(p).rank();
            if p_rank != self.node(x).rank() {
                return ops;
            }

            let side = self.node(p).side_of(x);
            let sibling = self.node(p).child(side.opposite());

            // 0,1 parent: promote and keep climbing.
            if p_rank - self.rank(sibling) == 1 {
                self.node_mut(p).promote();
                ops += 1;
                x = p;
                continue;
            }

            // 0,2 parent: one or two rotations finish the job.
            let inner = self.node(x).child(side.opposite());
            if self.node(x).rank() - self.rank(inner) == 2 {
                return ops + self.rotate(x);
            }

            let z = inner.expect("`RawWavlTree::rebalance_after_insert()` - inner 1-child must be real!");
            self.node_mut(z).promote();
            return ops + 1 + self.rotate(z) + self.rotate(z);
        }
    }

    /// Restores the rank rule after the child on `side` of `parent` lost a
    /// rank, walking upward while that child is a 3-child.
    pub(super) fn rebalance_after_delete(&mut self, mut parent: Handle, mut side: Side) -> usize {
        let mut ops = 0;
        loop {
            let p_rank = self.node(parent).rank();
            if p_rank - self.rank(self.node(parent).child(side)) != 3 {
                return ops;
            }

            let other = self
                .node(parent)
                .child(side.opposite())
                .expect("`RawWavlTree::rebalance_after_delete()` - sibling of a 3-child must be real!");
            let other_rank = self.node(other).rank();
            let outer = self.node(other).child(side.opposite());
            let inner = self.node(other).child(side);

            if p_rank - other_rank == 2 {
                // 3,2 parent: demote it.
                self.node_mut(parent).demote();
                ops += 1;
            } else if other_rank - self.rank(outer) == 2 && other_rank - self.rank(inner) == 2 {
                // 3,1 parent with a 2,2 sibling: demote both.
                self.node_mut(parent).demote();
                self.node_mut(other).demote();
                ops += 2;
            } else if other_rank - self.rank(outer) == 1 {
                // Outer grandchild is a 1-child: a single rotation ends the walk.
                self.rotate(other);
                self.node_mut(other).promote();
                if self.node(parent).is_leaf() {
                    self.node_mut(parent).set_rank(0);
                    return ops + 3;
                }
                return ops + 2;
            } else {
                // Inner grandchild is the 1-child: lift it over both.
                let v = inner.expect("`RawWavlTree::rebalance_after_delete()` - inner 1-child must be real!");
                self.rotate(v);
                self.rotate(v);
                self.node_mut(v).promote_by(2);
                self.node_mut(parent).demote();
                return ops + 3;
            }

            let Some(grandparent) = self.node(parent).parent() else {
                return ops;
            };
            side = self.node(grandparent).side_of(parent);
            parent = grandparent;
        }
    }
}
