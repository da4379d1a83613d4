use super::handle::{Handle, Link};
use super::size::Size;

/// Rank carried by the external node (an absent child link).
pub(crate) const SENTINEL_RANK: i32 = -1;

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A tree vertex.
///
/// Child slots hold either a real node or `None`, the shared external node
/// (rank -1, size 0). The parent link is a back-reference only; the arena owns
/// every node.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    // Relaxed height. Leaves are 0 and every rank difference is 1 or 2.
    rank: u8,
    // Real nodes in the subtree rooted here, this one included.
    size: Size,
    left: Link,
    right: Link,
    parent: Link,
}

impl<K, V> Node<K, V> {
    /// Creates a rank 0 leaf whose children are both external.
    pub(crate) fn leaf(key: K, value: V, parent: Link) -> Self {
        Self {
            key,
            value,
            rank: 0,
            size: Size::ONE,
            left: None,
            right: None,
            parent,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Borrows the key immutably and the value mutably.
    pub(crate) fn entry_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Exchanges key and value with `other`, leaving links, ranks and sizes alone.
    pub(crate) fn swap_entry(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.key, &mut other.key);
        core::mem::swap(&mut self.value, &mut other.value);
    }

    #[inline]
    pub(crate) fn rank(&self) -> i32 {
        i32::from(self.rank)
    }

    pub(crate) fn set_rank(&mut self, rank: u8) {
        self.rank = rank;
    }

    pub(crate) fn promote(&mut self) {
        self.promote_by(1);
    }

    pub(crate) fn promote_by(&mut self, delta: u8) {
        self.rank = self.rank.checked_add(delta).expect("`Node::promote_by()` - rank overflow!");
    }

    pub(crate) fn demote(&mut self) {
        self.rank = self.rank.checked_sub(1).expect("`Node::demote()` - rank underflow!");
    }

    #[inline]
    pub(crate) fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    #[inline]
    pub(crate) fn left(&self) -> Link {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Link {
        self.right
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Link) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) fn parent(&self) -> Link {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Link) {
        self.parent = parent;
    }

    /// Both children are external.
    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Which side of this node `child` hangs from.
    pub(crate) fn side_of(&self, child: Handle) -> Side {
        if self.left == Some(child) {
            Side::Left
        } else {
            debug_assert_eq!(self.right, Some(child), "`Node::side_of()` - not a child of this node");
            Side::Right
        }
    }
}
